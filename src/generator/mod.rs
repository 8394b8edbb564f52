//! テキスト生成モジュール
//!
//! プロンプトを受け取りテキストを返す生成器の抽象化:
//! - OpenAiGenerator: OpenAI互換API（HTTP）
//! - CliGenerator: ローカルのAI CLI（claude / codex / gemini）

mod cli;
mod openai;

pub use cli::CliGenerator;
pub use openai::OpenAiGenerator;

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::Result;

/// テキスト生成器の共通インターフェース
pub trait TextGenerator {
    /// システムメッセージとプロンプトからテキストを生成する
    fn complete(
        &self,
        system: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// プロバイダ選択後の生成器
#[derive(Debug)]
pub enum GeneratorKind {
    OpenAi(OpenAiGenerator),
    Cli(CliGenerator),
}

impl TextGenerator for GeneratorKind {
    async fn complete(&self, system: &str, prompt: &str, max_output_tokens: u32) -> Result<String> {
        match self {
            GeneratorKind::OpenAi(g) => g.complete(system, prompt, max_output_tokens).await,
            GeneratorKind::Cli(g) => g.complete(system, prompt, max_output_tokens).await,
        }
    }
}

/// プロバイダ指定から生成器を構築する
pub fn create_generator(provider: AiProvider, config: &Config) -> Result<GeneratorKind> {
    match provider.command_name() {
        None => Ok(GeneratorKind::OpenAi(OpenAiGenerator::new(config)?)),
        Some(command) => Ok(GeneratorKind::Cli(CliGenerator::new(
            command,
            config.timeout_seconds,
        ))),
    }
}

//! ローカルAI CLI連携
//!
//! claude / codex / gemini などのAI CLIをサブプロセスとして呼び出す

use std::time::Duration;
use tokio::process::Command;

use super::TextGenerator;
use crate::error::{Result, WireflowError};

/// AI CLIのテキスト生成器
#[derive(Debug, Clone)]
pub struct CliGenerator {
    command: &'static str,
    timeout_seconds: u64,
}

impl CliGenerator {
    pub fn new(command: &'static str, timeout_seconds: u64) -> Self {
        Self {
            command,
            timeout_seconds,
        }
    }

    async fn run(&self, prompt: &str) -> Result<String> {
        // CLI呼び出し（Windowsではcmd /c経由）
        #[cfg(windows)]
        let output = Command::new("cmd")
            .args(["/c", self.command, "-p", prompt, "--output-format", "text"])
            .output();

        #[cfg(not(windows))]
        let output = Command::new(self.command)
            .args(["-p", prompt, "--output-format", "text"])
            .output();

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_seconds), output)
            .await
            .map_err(|_| {
                WireflowError::Generation(format!(
                    "{} CLIがタイムアウトしました（{}秒）",
                    self.command, self.timeout_seconds
                ))
            })?
            .map_err(|e| {
                WireflowError::Generation(format!("{} CLI実行エラー: {}", self.command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WireflowError::Generation(format!(
                "{} CLI failed (code {:?}): {}",
                self.command,
                output.status.code(),
                stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl TextGenerator for CliGenerator {
    async fn complete(&self, system: &str, prompt: &str, _max_output_tokens: u32) -> Result<String> {
        // CLIにはシステムメッセージの口がないためプロンプトに前置する
        let raw_prompt = format!("{}\n\n{}", system, prompt);
        // 改行をスペースに置換してcmd経由で渡す
        let full_prompt = raw_prompt.replace('\n', " ").replace('"', "\\\"");

        let response = self.run(&full_prompt).await?;

        if response.trim().is_empty() {
            return Err(WireflowError::Generation(
                "空のレスポンスが返されました".into(),
            ));
        }

        Ok(response)
    }
}

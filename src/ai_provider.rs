use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AiProvider {
    Openai,
    Claude,
    Codex,
    Gemini,
}

impl AiProvider {
    /// CLI連携時のコマンド名
    ///
    /// OpenAIはHTTP API経由で呼ぶため None
    pub fn command_name(&self) -> Option<&'static str> {
        match self {
            AiProvider::Openai => None,
            AiProvider::Claude => Some("claude"),
            AiProvider::Codex => Some("codex"),
            AiProvider::Gemini => Some("gemini"),
        }
    }
}

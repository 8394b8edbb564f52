use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wireflow")]
#[command(about = "ワイヤーフレーム画像からUIマークアップを生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (openai/claude/codex/gemini)
    #[arg(long, default_value = "openai", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ワイヤーフレーム画像からマークアップを生成
    Generate {
        /// 入力画像ファイルまたは画像フォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（ファイル入力時はファイル、フォルダ入力時はディレクトリ。省略時は標準出力/入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ビジョンモデルでレイアウトを解析
        #[arg(long)]
        vision: bool,

        /// AI生成を使わずフォールバック描画のみ
        #[arg(long)]
        fallback_only: bool,
    },

    /// 画像を解析してレイアウトJSONを出力
    Analyze {
        /// 入力画像ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ビジョンモデルでレイアウトを解析
        #[arg(long)]
        vision: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

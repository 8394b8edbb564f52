use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireflowError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`wireflow config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像として読み込めません: {0}")]
    UnsupportedMedia(String),

    #[error("レイアウトが不正です: {0}")]
    InvalidLayout(String),

    #[error("コード生成エラー: {0}")]
    Generation(String),

    #[error("レイアウトJSONのパースに失敗: {0}")]
    LayoutParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),
}

pub type Result<T> = std::result::Result<T, WireflowError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScholarPageError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ファイルが既に存在します: {0}（上書きするには --force を指定）")]
    OutputExists(String),

    #[error("ポート {0} は使用中です。`--port` で別のポートを指定してください")]
    PortInUse(u16),

    #[error("サーバーエラー: {0}")]
    Server(String),

    #[error(transparent)]
    Content(#[from] scholar_page_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScholarPageError>;

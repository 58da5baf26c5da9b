//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// HTTPステータスが成功以外
    #[error("HTTP error! status: {status}")]
    Fetch { status: u16 },

    /// ネットワーク層での失敗（CORS拒否を含む）
    #[error("Network error: {0}")]
    Network(String),

    /// ワークブックのバイト列を解釈できない
    #[error("Workbook parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl Error {
    /// 取得段階（HTTP/ネットワーク）の失敗か
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Network(_))
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(feature = "excel")]
impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Export(err.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

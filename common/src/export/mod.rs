//! ファイル出力

#[cfg(feature = "excel")]
pub mod template;

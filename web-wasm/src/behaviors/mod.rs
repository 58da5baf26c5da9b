//! データ読み込みとは独立したページ操作

pub mod email_copy;
pub mod smooth_scroll;
pub mod toast;

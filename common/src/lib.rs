//! Scholar Page Common Library
//!
//! CLIとWeb(WASM)で共有される型・ワークブック読み込み・HTML生成

pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod highlight;
pub mod links;
pub mod render;
pub mod section;
pub mod types;
pub mod workbook;

pub use config::{HomepageConfig, ToastSettings};
pub use dates::parse_date;
pub use error::{Error, Result};
pub use highlight::{highlight_author, highlight_author_if_unmarked};
pub use render::render_sheet;
pub use section::{content_views, failure_message, failure_views, SectionView};
pub use types::{RowRecord, Sheet, SheetKind};
pub use workbook::HomepageContent;

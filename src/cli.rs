use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scholar-page")]
#[command(about = "研究者ホームページ生成・プレビューツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/scholar-page/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ワークブックから各セクションのHTMLを生成
    Render {
        /// 入力ワークブック
        #[arg(default_value = "publications.xlsx")]
        input: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long, default_value = "rendered")]
        output: PathBuf,

        /// 強調する著者名（設定より優先）
        #[arg(long)]
        highlight: Option<String>,
    },

    /// サンプルワークブックを生成
    Template {
        /// 出力ファイル
        #[arg(short, long, default_value = "publications.xlsx")]
        output: PathBuf,

        /// 既存ファイルを上書き
        #[arg(long)]
        force: bool,
    },

    /// ローカルプレビューサーバーを起動
    Serve {
        /// ポート番号（省略時は設定値）
        #[arg(short, long)]
        port: Option<u16>,

        /// 公開ディレクトリ
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// 起動後にブラウザで開く
        #[arg(long)]
        open: bool,
    },

    /// 設定管理
    Config {
        /// 強調する著者名を設定
        #[arg(long)]
        set_highlight: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

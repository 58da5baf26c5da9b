use clap::Parser;
use scholar_page::{cli, config, error, render, serve, template};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Render { input, output, highlight } => {
            println!("📚 scholar-page - HTML生成\n");

            let mut homepage = config.homepage;
            if let Some(name) = highlight {
                homepage.highlighted_author = name;
            }

            let written = render::render_workbook(&input, &output, &homepage)?;
            for path in &written {
                println!("✔ {}", path.display());
            }
            println!("\n✅ {}セクションを出力", written.len());
        }

        Commands::Template { output, force } => {
            println!("📄 scholar-page - ひな形生成\n");

            let sheets = template::write_template(&output, force)?;
            println!("✔ 保存: {}", output.display());
            template::print_summary(&sheets);
        }

        Commands::Serve { port, dir, open } => {
            serve::serve(&dir, port.unwrap_or(config.port), open).await?;
        }

        Commands::Config { set_highlight, show } => {
            let mut config = config;

            if let Some(name) = set_highlight {
                config.set_highlighted_author(name, &config_path)?;
                println!("✔ 強調する著者名を設定しました");
            }

            if show {
                println!("設定: {}", config_path.display());
                println!("  強調する著者: {}", config.homepage.highlighted_author);
                println!("  ワークブック: {}", config.homepage.workbook_path);
                println!("  中国語動画ホスト: {}", config.homepage.chinese_video_hosts.join(", "));
                println!("  ポート: {}", config.port);
            }
        }
    }

    Ok(())
}

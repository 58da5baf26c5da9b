//! ローカルプレビューサーバー
//!
//! `file:` で開くとブラウザがワークブック取得を拒否するため、
//! ディレクトリをHTTPで配信する。

use crate::error::{Result, ScholarPageError};
use axum::http::{header, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub fn router(root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .fallback_service(ServeDir::new(root))
        .layer(cors)
}

pub async fn serve(root: &Path, port: u16, open_browser: bool) -> Result<()> {
    if !root.is_dir() {
        return Err(ScholarPageError::FileNotFound(root.display().to_string()));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => ScholarPageError::PortInUse(port),
        _ => ScholarPageError::Io(e),
    })?;

    let url = format!("http://localhost:{}", port);
    println!("🌐 配信中: {}", url);
    println!("   ディレクトリ: {}", root.display());
    println!("   Ctrl+C で停止");
    log::info!("listening on {}", addr);

    if open_browser {
        if let Err(e) = open::that(&url) {
            log::warn!("ブラウザを開けませんでした: {}", e);
        }
    }

    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ScholarPageError::Server(e.to_string()))?;

    println!("\n✔ サーバーを停止しました");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Ctrl+C の待機に失敗: {}", e);
    }
}

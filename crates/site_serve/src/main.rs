//! Local static server for testing the site.
//!
//! Examples:
//!   site-serve
//!   site-serve --port 9000 --open
//!   site-serve --root crates/site_web/dist
//!
//! Serves on every interface so phones on the same network can load the page.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use std::path::{Path, PathBuf};

use axum::Router;
use clap::Parser;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "site-serve", about = "Serve the site locally for testing.")]
struct Args {
    /// Port to run the server on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Open the site in the default browser.
    #[arg(long)]
    open: bool,

    /// Directory to serve (the Trunk output by default).
    #[arg(long, default_value = "crates/site_web/dist")]
    root: PathBuf,
}

#[derive(Debug, Error)]
enum ServeError {
    #[error("site root {path:?} is not usable: {source}")]
    Root { path: PathBuf, source: io::Error },

    #[error("could not bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

fn router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Address other machines on the LAN can reach us at.
///
/// Connecting a UDP socket sends nothing; it only makes the OS pick the
/// outbound interface.
fn local_ip() -> IpAddr {
    let probe = || -> io::Result<IpAddr> {
        let sock = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        sock.connect(("8.8.8.8", 80))?;
        Ok(sock.local_addr()?.ip())
    };
    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        warn!("could not open browser: {}", e);
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler: run until killed.
        std::future::pending::<()>().await;
    }
    info!("Stopping server...");
}

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let root = args.root.canonicalize().map_err(|source| ServeError::Root {
        path: args.root.clone(),
        source,
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    let localhost_url = format!("http://localhost:{}/", args.port);
    info!("Serving inQue Apps website");
    info!("Root:  {}", root.display());
    info!("Local: {}", localhost_url);
    info!("LAN:   http://{}:{}/", local_ip(), args.port);
    info!("Press Ctrl+C to stop.");

    if args.open {
        open_browser(&localhost_url);
    }

    axum::serve(listener, router(&root))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>inQue Apps</h1>").unwrap();
        std::fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
        dir
    }

    async fn get(root: &Path, uri: &str) -> (StatusCode, String) {
        let resp = router(root)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn root_serves_index_html() {
        let dir = site();
        let (status, body) = get(dir.path(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("inQue Apps"));
    }

    #[tokio::test]
    async fn assets_are_served_and_missing_files_404() {
        let dir = site();
        let (status, body) = get(dir.path(), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("margin"));

        let (status, _) = get(dir.path(), "/nope.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["site-serve"]).unwrap();
        assert_eq!(args.port, 8000);
        assert!(!args.open);
        assert_eq!(args.root, PathBuf::from("crates/site_web/dist"));

        let args = Args::try_parse_from(["site-serve", "--port", "9000", "--open"]).unwrap();
        assert_eq!(args.port, 9000);
        assert!(args.open);
    }
}

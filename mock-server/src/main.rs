use std::path::PathBuf;

use contract_core::{fixtures, store, translate_all};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mocks = match std::env::var("MOCKS_DIR") {
        Ok(dir) => store::load_catalog(&PathBuf::from(dir))?,
        Err(_) => translate_all(&fixtures::sample_mocks()),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, mocks = mocks.len(), "listening");
    mock_server::run(listener, &mocks).await?;
    Ok(())
}

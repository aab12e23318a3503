use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use projects_server::config::ServerConfig;
use projects_server::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    let addr = config.bind_addr()?;
    let store = match &config.data_file {
        Some(path) => Store::open(path.clone()).await?,
        None => Store::in_memory(),
    };

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, persisted = store.data_file().is_some(), "listening");
    projects_server::serve(listener, store).await?;
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},projects_server={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

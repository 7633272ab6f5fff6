use std::net::SocketAddr;

use status_server::config::Config;
use status_server::{create_app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!("Starting status server on {}:{}", config.host, config.port);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Status server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rickandmorty_api::Client;
use rickandmorty_gateway_lib::{router, GatewayConfig};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "rickandmorty-gateway")]
#[command(about = "Serve the Rick and Morty character API as flat, unpaginated JSON")]
struct Cli {
    /// Port to listen on; the CORS origin is http://localhost:<port>
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Root of the upstream character API
    #[arg(long, env = "RICKANDMORTY_API_URL", default_value = rickandmorty_api::DEFAULT_BASE_URL)]
    upstream_url: String,

    /// Timeout in seconds for each upstream request
    #[arg(long, env = "RICKANDMORTY_TIMEOUT_SECS", default_value_t = 30)]
    upstream_timeout_secs: u64,
}

impl From<Cli> for GatewayConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            upstream_base_url: cli.upstream_url,
            upstream_timeout: Duration::from_secs(cli.upstream_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rickandmorty=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = GatewayConfig::from(Cli::parse());

    let client = Client::with_config(&config.upstream_base_url, config.upstream_timeout)
        .context("failed to build upstream client")?;
    let app = router(Arc::new(client), &config);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        "listening on {} (upstream {}, CORS origin {})",
        addr,
        config.upstream_base_url,
        config.cors_origin()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

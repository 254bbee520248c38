use std::sync::Arc;

use httpsrv::config::Config;
use httpsrv::handler::HttpHandler;
use httpsrv::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::load());
    let handler = Arc::new(HttpHandler::new(Arc::clone(&cfg)));

    tokio::select! {
        res = server::listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

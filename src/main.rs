use anyhow::Context;
use todo_service::{config::Config, db, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("configuration error")?;

    // No database, no traffic.
    let store = db::connect(&config)
        .await
        .context("failed to initialize database")?;

    let shutdown = server::shutdown_signal().context("failed to install signal handlers")?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind to {}:{}", config.host, config.port))?;

    server::run(listener, store, shutdown)
        .await
        .context("server error")
}

mod args;
mod bootstrap;
mod health;
mod routes;

use anyhow::Result;
use catfacts_core::config::AppConfig;
use catfacts_core::errors::ApplicationError;
use clap::Parser;
use tracing::{error, info};

use crate::args::ServerArgs;

fn init_logging(config: &AppConfig) {
    use catfacts_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run(ServerArgs::parse()).await
}

async fn run(args: ServerArgs) -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = match AppConfig::load(args.into_load_options()) {
        Ok(config) => config,
        Err(config_error) => {
            init_logging(&AppConfig::default());
            return Err(startup_failure(config_error.into()));
        }
    };
    init_logging(&config);

    // The store must be fully loaded before the listener is bound.
    let app = bootstrap::bootstrap_with_config(config)
        .await
        .map_err(|bootstrap_error| startup_failure(bootstrap_error.into()))?;

    let address = app.config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        facts_loaded = app.store.len(),
        "Server listening on port {}",
        app.config.server.port
    );

    axum::serve(listener, routes::router(app.store.clone()))
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "catfacts-server stopping"
    );

    Ok(())
}

fn startup_failure(failure: ApplicationError) -> anyhow::Error {
    let interface = failure.clone().into_interface("bootstrap");
    error!(
        event_name = "system.bootstrap.failed",
        correlation_id = interface.correlation_id(),
        status_code = interface.status_code(),
        error = %failure,
        "application bootstrap failed"
    );
    anyhow::Error::new(failure)
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "could not listen for shutdown signal; serving until the process is killed"
        );
        std::future::pending::<()>().await;
    }
}

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use roster::database::seed::seed_activities;
use roster::{router, ActivityStore, AppState, ServerConfig};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Configuration
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    // 2. Logging
    roster::telemetry::init_logging(config.log_format);

    // 3. Roster, built once and handed to the router
    let store = match ActivityStore::new(seed_activities()) {
        Ok(s) => s
            .with_capacity_enforcement(config.enforce_capacity)
            .with_email_required(config.require_email),
        Err(e) => {
            error!("Cannot build activity roster: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        activities = store.len(),
        enforce_capacity = store.enforces_capacity(),
        require_email = store.requires_email(),
        "activity roster seeded"
    );

    let app = router(AppState::new(store));

    // 4. Bind, with a single fallback port
    let listener = match bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("Cannot bind listener: {}", e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!(
            build = env!("ROSTER_BUILD_ID"),
            "Server listening on http://{}", addr
        ),
        Err(e) => warn!("Cannot read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
    info!("Server stopped");
}

async fn bind(config: &ServerConfig) -> Result<TcpListener, Box<dyn std::error::Error>> {
    let addr = config.addr()?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Cannot bind {}: {}. Trying fallback {}", addr, e, fallback);
            Ok(TcpListener::bind(fallback).await?)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

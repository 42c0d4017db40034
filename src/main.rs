use crate::api::routes::{cors_layer, create_router};
use crate::config::Config;
use crate::error::StartupError;
use crate::state::new_state;

mod api;
mod config;
mod error;
mod game;
mod logging;
mod state;
mod timestamp;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::load()?;
    logging::init_logging(&config.log_level, config.json_logs);

    let state = new_state(config.leaderboard_capacity);
    let cors = config.cors_origin.as_deref().map(cors_layer).transpose()?;
    let app = create_router(state, cors);

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        cors_origin = ?config.cors_origin,
        leaderboard_capacity = ?config.leaderboard_capacity,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

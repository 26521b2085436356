use error::ServerError;
use log::*;
use service::AppState;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod error;
pub mod router;
mod sse;

/// Binds the configured address and serves until Ctrl-C (or SIGTERM on Unix).
pub async fn init_server(app_state: AppState) -> Result<(), ServerError> {
    let address = app_state.config.server_address();

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Server running at http://{address}");

    serve(listener, app_state, shutdown_signal()).await
}

/// Serves the router on an already bound listener until `signal` resolves.
///
/// Open streams are told to end once the signal fires so that graceful
/// shutdown is not held up by clients that never disconnect.
pub async fn serve<F>(
    listener: TcpListener,
    app_state: AppState,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let sse_manager = Arc::clone(&app_state.sse_manager);

    axum::serve(listener, router::define_routes(app_state))
        .with_graceful_shutdown(async move {
            signal.await;
            sse_manager.shutdown();
        })
        .await
        .map_err(ServerError::Serve)?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
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
                error!("Failed to listen for SIGTERM: {e}");
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

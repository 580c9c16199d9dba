use crate::adapters::SqliteStore;
use crate::app::routes::router;
use crate::core::service::ClimateService;
use crate::domain::ports::{ClimateStore, ConfigProvider};
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Open the store, bind, and serve until Ctrl-C. The pool is closed once the
/// last in-flight request has finished.
pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
    let store = SqliteStore::connect(config.database_path(), config.max_connections()).await?;
    let service = Arc::new(ClimateService::new(store));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🌊 Listening on http://{}", listener.local_addr()?);

    serve(listener, service.clone(), shutdown_signal()).await?;

    service.store().close().await;
    tracing::info!("✅ Server stopped");
    Ok(())
}

/// Serve the API on an already-bound listener until `shutdown` resolves.
pub async fn serve<S, F>(
    listener: TcpListener,
    service: Arc<ClimateService<S>>,
    shutdown: F,
) -> Result<()>
where
    S: ClimateStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down gracefully..."),
        Err(e) => tracing::error!("❌ Failed to install Ctrl-C handler: {}", e),
    }
}

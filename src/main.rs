use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use pod_query::app_state::build_app_state;
use pod_query::config::AppConfig;
use pod_query::core::client::kube_client::build_kube_client;
use pod_query::core::client::pods::KubePodSource;
use pod_query::logging;
use pod_query::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(config.log_dir.as_deref())?;

    info!("Starting pod-query v{}", env!("CARGO_PKG_VERSION"));

    let client = build_kube_client(config.kubeconfig.as_deref()).await?;
    let source = Arc::new(KubePodSource::new(client));
    let state = build_app_state(source, &config.namespace);
    let app = app_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "Serving pods of namespace '{}' on {}",
        config.namespace, config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

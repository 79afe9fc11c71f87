//! employee-server: CRUD HTTP service for employees on PostgreSQL

use employee_server::db::{PgClient, PgEmployeeGateway};
use employee_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting employee-server (env: {})", config.environment);

    // Connect; a database that never answers is fatal
    let client = PgClient::connect(
        &config.database_url,
        config.max_connections,
        config.retry_policy(),
    )
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Giving up on PostgreSQL"))?;

    if let Err(e) = client.ping().await {
        tracing::warn!(error = %e, "Database ping failed");
    }

    let gateway = PgEmployeeGateway::new(client.pool().clone(), config.query_timeout);
    if let Err(e) = gateway.init_schema().await {
        tracing::warn!(error = %e, "Unable to create employees table at startup, retrying on first insert");
    }

    let app = api::create_router(AppState::new(gateway));

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("employee-server HTTP listening on {http_addr}");

    // Pool first, then the HTTP server
    let db = client.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, closing database pool");
            db.close().await;
        })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

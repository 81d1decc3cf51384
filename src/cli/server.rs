use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::http::{HeaderValue, Method, header};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use mealweek::routes::AppState;

pub async fn serve(
    config: mealweek::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting mealweek server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // Write pool first: it creates the file and enables WAL for the readers
    let write_pool = mealweek::create_write_pool(&config.database.url).await?;
    mealweek_db::migrate(&write_pool).await?;
    tracing::info!("Database schema is up to date");

    let read_pool =
        mealweek::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let shared = mealweek_shared::State {
        read_db: read_pool.clone(),
        write_db: write_pool.clone(),
    };

    if config.expander.api_key.as_deref().is_none_or(str::is_empty) {
        tracing::warn!("No expander API key configured, recipe details will be unavailable");
    }

    let expander = mealweek_expander::ChatCompletionExpander::new(config.expander.settings())?;

    let state = AppState {
        recipe_command: mealweek_recipe::Command::new(shared.clone()),
        plan_command: mealweek_mealplan::Command::new(shared),
        expander: Arc::new(expander),
        pool: read_pool.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(config.server.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let app = mealweek::routes::router(state, config.server.rate_limit())?
        .layer(cors)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
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
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}

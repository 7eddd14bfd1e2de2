//! Server startup: load the model, build the router, serve.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::model::FileModelLoader,
    ui::{
        handler::{health_check, sms_reply},
        signal::shutdown_signal,
        state::AppState,
    },
    usecase::LoadModelUseCase,
};

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sms", get(sms_reply).post(sms_reply))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the model once, then serve until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    // Model status is fixed before the first request is accepted
    let loader = Arc::new(FileModelLoader::new(&config.model_path));
    let model_status = LoadModelUseCase::new(loader).execute().await;
    let state = Arc::new(AppState::new(model_status));

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on http://{}/sms", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

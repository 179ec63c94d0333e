//! Montagem do router da aplicação

pub mod moto_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Criar o router completo da aplicação
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/motos", moto_routes::create_moto_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint simples de verificação
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "moto-api",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

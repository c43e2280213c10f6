use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use catfacts_core::FactStore;
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    store: Arc<FactStore>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub facts_loaded: usize,
    pub categories: usize,
    pub checked_at: String,
}

pub fn router(store: Arc<FactStore>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { store })
}

/// Ready once at least one fact is loaded; an empty store cannot answer fact requests.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let ready = !state.store.is_empty();

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        facts_loaded: state.store.len(),
        categories: state.store.categories().len(),
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

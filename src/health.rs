//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload with the relay version,
//! uptime, the configured name service, and greeting counters. It never
//! calls the name service itself.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub name_service: String,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub greetings_served: u64,
    pub greetings_failed: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        name_service: state.name_service.base_url().to_string(),
        stats: StatsResponse {
            greetings_served: state.stats.served.load(Ordering::Relaxed),
            greetings_failed: state.stats.failed.load(Ordering::Relaxed),
        },
    })
}

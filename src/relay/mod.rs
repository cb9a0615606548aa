//! The greeting relay.
//!
//! [`greeting_handler`] serves `GET /greeting`: it captures the inbound
//! trace headers ([`trace`]), asks the name service for a name
//! ([`client`]) with those headers attached, and wraps the answer in a
//! [`Greeting`]. Any failure of the outbound call becomes a `500` with a
//! plain-text explanation.

pub mod client;
pub mod trace;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::NameServiceError;
use crate::server::AppState;
use trace::TraceContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub content: String,
}

impl Greeting {
    /// `"Hello "` followed by the name exactly as received.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        Self {
            content: format!("Hello {name}"),
        }
    }
}

/// Plain-text body returned when the name service call fails.
#[must_use]
pub fn failure_message(target: &str, err: &NameServiceError) -> String {
    format!(
        "Failed to communicate with `{target}` due to: {}",
        err.describe()
    )
}

pub async fn greeting_handler(
    State(state): State<Arc<AppState>>,
    req_headers: HeaderMap,
) -> Response {
    let trace = TraceContext::from_headers(&req_headers);
    let request_id = trace
        .request_id()
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    if trace.is_empty() {
        tracing::debug!(
            request_id = %request_id,
            "no trace headers on inbound request"
        );
    }

    let start = Instant::now();
    let result = state.name_service.fetch_name(&trace).await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(name) => {
            state.stats.served.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                request_id = %request_id,
                trace_id = trace.trace_id().unwrap_or("-"),
                propagated = trace.len(),
                latency_ms,
                "greeting served"
            );
            Json(Greeting::for_name(&name)).into_response()
        }
        Err(e) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                request_id = %request_id,
                trace_id = trace.trace_id().unwrap_or("-"),
                target = %state.name_service.target(),
                error_kind = e.kind(),
                error = %e.describe(),
                latency_ms,
                "name service call failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                failure_message(state.name_service.target(), &e),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_prefixes_name() {
        assert_eq!(Greeting::for_name("Bob").content, "Hello Bob");
    }

    #[test]
    fn greeting_does_not_trim() {
        assert_eq!(Greeting::for_name("").content, "Hello ");
        assert_eq!(Greeting::for_name(" Ada\n").content, "Hello  Ada\n");
    }

    #[test]
    fn greeting_serializes_single_field() {
        let json = serde_json::to_string(&Greeting::for_name("Bob")).unwrap();
        assert_eq!(json, r#"{"content":"Hello Bob"}"#);
    }

    #[test]
    fn failure_message_names_target_and_cause() {
        let err = NameServiceError::Status(StatusCode::SERVICE_UNAVAILABLE);
        let msg = failure_message("cute-name", &err);
        assert_eq!(
            msg,
            "Failed to communicate with `cute-name` due to: \
             name service responded with status 503 Service Unavailable"
        );
    }
}

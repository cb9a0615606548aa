//! Trace-correlation header capture and propagation.
//!
//! [`TraceContext`] snapshots the allow-listed headers of one inbound
//! request so they can be replayed, byte for byte, on the outbound call to
//! the name service. Everything outside [`PROPAGATED_HEADERS`] is ignored.

use axum::http::{HeaderMap, HeaderValue};

const PROPAGATED_COUNT: usize = 7;

/// Headers the tracing backend uses to stitch hops together (B3 plus
/// Envoy's request id and the OpenTracing span context).
pub static PROPAGATED_HEADERS: [&str; PROPAGATED_COUNT] = [
    "x-request-id",
    "x-b3-traceid",
    "x-b3-spanid",
    "x-b3-parentspanid",
    "x-b3-sampled",
    "x-b3-flags",
    "x-ot-span-context",
];

/// Per-request snapshot of the propagated headers.
///
/// Slot `i` holds the inbound value of `PROPAGATED_HEADERS[i]`, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    values: [Option<HeaderValue>; PROPAGATED_COUNT],
}

impl TraceContext {
    /// Capture the allow-listed headers from an inbound request.
    ///
    /// When a header is repeated, the first value wins.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let values = PROPAGATED_HEADERS.map(|name| headers.get(name).cloned());
        Self { values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        PROPAGATED_HEADERS
            .iter()
            .position(|known| known.eq_ignore_ascii_case(name))
            .and_then(|idx| self.values[idx].as_ref())
    }

    /// Present headers only, in allow-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HeaderValue)> + '_ {
        PROPAGATED_HEADERS
            .iter()
            .zip(&self.values)
            .filter_map(|(name, value)| value.as_ref().map(|v| (*name, v)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Attach every captured header to an outbound request.
    #[must_use]
    pub fn inject(&self, mut builder: http::request::Builder) -> http::request::Builder {
        for (name, value) in self.iter() {
            builder = builder.header(name, value.clone());
        }
        builder
    }

    /// Inbound `x-request-id`, for log correlation.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.get("x-request-id").and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.get("x-b3-traceid").and_then(|v| v.to_str().ok())
    }
}

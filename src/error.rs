//! Unified error types for the greeting relay.
//!
//! Defines [`RelayError`] (process and CLI failures) and
//! [`NameServiceError`] (per-request failures of the downstream name
//! call). Both use `thiserror` for `Display` and `Error` derives.
//! A [`NameServiceError`] never escapes the greeting handler; it is
//! rendered into a `500` plain-text body instead.

use std::error::Error as _;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),
}

/// Failure of the single outbound call to the name service.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NameServiceError {
    #[error("invalid name service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build request: {0}")]
    Request(#[source] http::Error),

    #[error("{0}")]
    Unreachable(#[source] hyper_util::client::legacy::Error),

    #[error("name service responded with status {0}")]
    Status(hyper::StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[source] hyper::Error),

    #[error("response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),
}

impl NameServiceError {
    /// Coarse failure category, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } | Self::Request(_) => "configuration",
            Self::Unreachable(_) => "unreachable",
            Self::Status(_) | Self::Body(_) | Self::InvalidUtf8(_) => "downstream",
        }
    }

    /// Render the error followed by every distinct message in its source chain.
    ///
    /// hyper's client errors only say `client error (Connect)` at the top
    /// level; the useful cause (e.g. `Connection refused`) sits further down.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let msg = err.to_string();
            if !out.contains(&msg) {
                out.push_str(": ");
                out.push_str(&msg);
            }
            source = err.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_is_downstream_kind() {
        let err = NameServiceError::Status(hyper::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind(), "downstream");
        assert_eq!(
            err.describe(),
            "name service responded with status 503 Service Unavailable"
        );
    }

    #[test]
    fn invalid_url_is_configuration_kind() {
        let err = NameServiceError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.kind(), "configuration");
        assert!(err.describe().contains("'nope'"));
    }

    #[test]
    fn describe_does_not_repeat_inlined_source() {
        let bytes = vec![0xff, 0xfe];
        let utf8 = String::from_utf8(bytes).unwrap_err();
        let err = NameServiceError::InvalidUtf8(utf8);
        let described = err.describe();
        assert_eq!(described, err.to_string());
    }
}

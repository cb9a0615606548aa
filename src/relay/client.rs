//! Outbound client for the name service.
//!
//! [`NameServiceClient`] issues exactly one `GET <base>/api/name` per call,
//! carrying the caller's [`TraceContext`]. There is no retry and no request
//! deadline beyond what the transport itself applies.

use http_body_util::{BodyExt, Full};
use hyper::{Method, Uri};

use super::trace::TraceContext;
use crate::config::RelayConfig;
use crate::error::NameServiceError;
use crate::server::HttpClient;

#[derive(Clone)]
pub struct NameServiceClient {
    http: HttpClient,
    config: RelayConfig,
    target: String,
}

impl NameServiceClient {
    #[must_use]
    pub fn new(http: HttpClient, config: RelayConfig) -> Self {
        let target = target_label(&config.name_service_url);
        Self {
            http,
            config,
            target,
        }
    }

    /// Host of the name service, or the raw configured URL if it has none.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.name_service_url
    }

    /// Resolve the name endpoint into a request target.
    pub fn endpoint(&self) -> Result<Uri, NameServiceError> {
        let raw = self.config.name_endpoint();
        let invalid = |reason: String| NameServiceError::InvalidUrl {
            url: self.config.name_service_url.clone(),
            reason,
        };

        crate::config::parse_base_url(&self.config.name_service_url).map_err(invalid)?;
        let parsed = url::Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
        parsed
            .as_str()
            .parse::<Uri>()
            .map_err(|e| invalid(e.to_string()))
    }

    /// Fetch a name, forwarding `trace` on the outbound request.
    pub async fn fetch_name(&self, trace: &TraceContext) -> Result<String, NameServiceError> {
        let uri = self.endpoint()?;

        let req = trace
            .inject(hyper::Request::builder().method(Method::GET).uri(uri))
            .body(Full::new(bytes::Bytes::new()))
            .map_err(NameServiceError::Request)?;

        let response = self
            .http
            .request(req)
            .await
            .map_err(NameServiceError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NameServiceError::Status(status));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(NameServiceError::Body)?
            .to_bytes();

        String::from_utf8(body.to_vec()).map_err(NameServiceError::InvalidUtf8)
    }
}

fn target_label(base_url: &str) -> String {
    url::Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_http_client;

    fn client(base: &str) -> NameServiceClient {
        NameServiceClient::new(build_http_client(), RelayConfig::new(base))
    }

    #[tokio::test]
    async fn target_is_host_of_base_url() {
        assert_eq!(client("http://cute-name:8080").target(), "cute-name");
    }

    #[tokio::test]
    async fn target_falls_back_to_raw_url() {
        assert_eq!(client("::not-a-url::").target(), "::not-a-url::");
    }

    #[tokio::test]
    async fn endpoint_resolves_fixed_path() {
        let uri = client("http://cute-name:8080").endpoint().unwrap();
        assert_eq!(uri.to_string(), "http://cute-name:8080/api/name");
    }

    #[tokio::test]
    async fn endpoint_rejects_malformed_base() {
        let err = client("not a url").endpoint().unwrap_err();
        assert!(matches!(err, NameServiceError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn endpoint_rejects_query_in_base() {
        let err = client("http://names:8080?x=1").endpoint().unwrap_err();
        assert_eq!(err.kind(), "configuration");
        assert!(err.describe().contains("query string"));
    }

    #[tokio::test]
    async fn endpoint_rejects_fragment_in_base() {
        let err = client("http://names:8080#frag").endpoint().unwrap_err();
        assert_eq!(err.kind(), "configuration");
        assert!(err.describe().contains("fragment"));
    }

    #[tokio::test]
    async fn endpoint_collapses_trailing_slashes() {
        let uri = client("http://names:8080//").endpoint().unwrap();
        assert_eq!(uri.to_string(), "http://names:8080/api/name");
    }

    #[tokio::test]
    async fn endpoint_rejects_non_http_scheme() {
        let err = client("ftp://cute-name").endpoint().unwrap_err();
        assert_eq!(err.kind(), "configuration");
    }
}

//! Relay configuration.
//!
//! The only externally tunable value of the relay itself is the base URL
//! of the name service. [`RelayConfig`] carries it from the CLI into the
//! server; [`validate_base_url`] is the startup sanity check.

use url::Url;

/// Fixed sub-path on the name service that returns a plain-text name.
pub const NAME_PATH: &str = "/api/name";

pub const DEFAULT_NAME_SERVICE_URL: &str = "http://greeting-name:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub name_service_url: String,
}

impl RelayConfig {
    #[must_use]
    pub fn new(name_service_url: impl Into<String>) -> Self {
        Self {
            name_service_url: name_service_url.into(),
        }
    }

    /// Full URL of the name endpoint: `<base><NAME_PATH>`.
    ///
    /// Trailing `/`s on the base are dropped so that
    /// `http://host:8080/` does not yield `//api/name`.
    #[must_use]
    pub fn name_endpoint(&self) -> String {
        let base = self.name_service_url.trim_end_matches('/');
        format!("{base}{NAME_PATH}")
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_SERVICE_URL)
    }
}

/// Validate a name service base URL. Returns `Ok(())` or a human-readable error.
pub fn validate_base_url(url: &str) -> Result<(), String> {
    parse_base_url(url).map(|_| ())
}

/// Parse a name service base URL.
///
/// A query or fragment is rejected: [`NAME_PATH`] is appended to the raw
/// string, so it would land inside the query or be dropped with the fragment.
pub fn parse_base_url(url: &str) -> Result<Url, String> {
    let parsed = Url::parse(url).map_err(|e| format!("'{url}' is not a valid URL ({e})"))?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(format!(
            "unsupported scheme '{scheme}' (expected http or https)"
        ));
    }
    if parsed.host_str().is_none() {
        return Err(format!("'{url}' has no host"));
    }
    if parsed.query().is_some() {
        return Err(format!("'{url}' must not contain a query string"));
    }
    if parsed.fragment().is_some() {
        return Err(format!("'{url}' must not contain a fragment"));
    }
    Ok(parsed)
}

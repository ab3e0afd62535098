use std::{env, time::Duration};

/// Versioned REST root of the production gateway.
pub const BASE_URL: &str = "https://www.beanstream.com/api/v1";

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable read by [`GatewayConfig::from_env`].
const BASE_URL_VAR: &str = "BEANSTREAM_BASE_URL";

/// Settings for the underlying HTTP client.
///
/// The defaults talk to the production gateway with certificate verification
/// enabled and a 30 second timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Root URL every action path is appended to, without a trailing `/`.
    base_url: String,
    /// Total timeout of a single request.
    timeout: Duration,
    /// Skips TLS certificate verification when set.
    accept_invalid_certs: bool,
    /// Treats any non-2xx status as a transport failure before looking at the body.
    fail_on_status: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(BASE_URL),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            fail_on_status: false,
        }
    }
}

impl GatewayConfig {
    /// Default configuration with the base URL taken from `BEANSTREAM_BASE_URL`
    /// when that variable is set and non-empty.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = String::from(base_url.trim_end_matches('/'));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables certificate verification. Only meant for test gateways with
    /// self-signed certificates.
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub fn with_fail_on_status(mut self, fail: bool) -> Self {
        self.fail_on_status = fail;
        self
    }

    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn timeout(&self) -> Duration { self.timeout }
    pub fn accept_invalid_certs(&self) -> bool { self.accept_invalid_certs }
    pub fn fail_on_status(&self) -> bool { self.fail_on_status }
}

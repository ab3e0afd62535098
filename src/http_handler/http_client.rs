use super::common::{HTTPError, HTTPRequestMethod, transport_code};
use super::http_response::response_common::decode_body;
use crate::config::GatewayConfig;
use crate::credentials::Credentials;
use crate::logger::{log, warning};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::Value;

/// A thin wrapper around `reqwest::Client` preconfigured for the gateway:
/// base URL, `Authorization` header, timeout and TLS policy.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all action paths.
    base_url: String,
    /// Prebuilt `Passcode <token>` header value, marked sensitive.
    authorization: HeaderValue,
    /// Whether a non-2xx status fails the call before the body is read.
    fail_on_status: bool,
}

impl HTTPClient {
    /// Builds the client. No network traffic happens here.
    ///
    /// # Errors
    /// A `Transport` error with code `-2` if the TLS backend cannot be initialised.
    pub(crate) fn new(credentials: &Credentials, config: &GatewayConfig) -> Result<Self, HTTPError> {
        if config.accept_invalid_certs() {
            warning!("TLS certificate verification is disabled for {}", config.base_url());
        }
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .timeout(config.timeout())
            .build()
            .map_err(|e| HTTPError::Transport {
                code: transport_code::FAILED_INIT,
                message: e.to_string(),
            })?;
        let mut authorization =
            HeaderValue::from_str(&credentials.authorization_header()).map_err(|e| {
                HTTPError::Transport { code: transport_code::FAILED_INIT, message: e.to_string() }
            })?;
        authorization.set_sensitive(true);
        Ok(HTTPClient {
            client,
            base_url: String::from(config.base_url()),
            authorization,
            fail_on_status: config.fail_on_status(),
        })
    }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// `<base>/<action>` with exactly one separating slash.
    pub(crate) fn endpoint_url(&self, action: &str) -> String {
        format!("{}/{}", self.base_url, action.trim_start_matches('/'))
    }

    /// Performs one request against `action` and returns the decoded JSON.
    ///
    /// The method defaults to POST when a body is given and GET otherwise; an
    /// explicit `method` always wins and the body is sent whatever the method.
    pub(crate) async fn dispatch<B>(
        &self,
        action: &str,
        body: Option<&B>,
        method: Option<HTTPRequestMethod>,
    ) -> Result<Value, HTTPError>
    where
        B: serde::Serialize + ?Sized,
    {
        let method = HTTPRequestMethod::resolve(method, body.is_some());
        let url = self.endpoint_url(action);
        log!("{method} {url}");

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, self.authorization.clone());
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(|e| HTTPError::Protocol {
                message: format!("Unable to encode request body: {e}"),
            })?;
            request = request.body(encoded);
        }

        let response = request.send().await?;
        let status = response.status();
        if self.fail_on_status && !status.is_success() {
            return Err(HTTPError::Transport {
                code: transport_code::HTTP_RETURNED_ERROR,
                message: format!("The requested URL returned error: {status}"),
            });
        }
        let raw = response.bytes().await?;
        decode_body(status, &raw)
    }
}

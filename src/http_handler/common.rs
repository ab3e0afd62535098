use serde_json::{Map, Value};
use strum_macros::Display;

/// Result type of every gateway operation.
pub type Result<T> = std::result::Result<T, HTTPError>;

/// Transport error codes, negated the way curl's error numbers are reported.
pub(crate) mod transport_code {
    pub(crate) const OTHER: i64 = -1;
    pub(crate) const FAILED_INIT: i64 = -2;
    pub(crate) const URL_MALFORMAT: i64 = -3;
    pub(crate) const COULDNT_CONNECT: i64 = -7;
    pub(crate) const HTTP_RETURNED_ERROR: i64 = -22;
    pub(crate) const OPERATION_TIMEDOUT: i64 = -28;
    pub(crate) const TOO_MANY_REDIRECTS: i64 = -47;
    pub(crate) const RECV_ERROR: i64 = -56;
}

/// The HTTP verbs used by the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HTTPRequestMethod {
    /// An explicit method always wins; otherwise POST with a body, GET without.
    pub fn resolve(explicit: Option<Self>, has_body: bool) -> Self {
        match explicit {
            Some(method) => method,
            None if has_body => Self::Post,
            None => Self::Get,
        }
    }
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single field complaint attached to a gateway error.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// Failure of a gateway call.
///
/// Codes are partitioned by origin: transport failures are negative, protocol
/// failures are `0` and gateway-reported failures keep the gateway's positive code.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum HTTPError {
    /// The exchange itself failed: no connection, timeout, redirect loop or a
    /// rejected status.
    #[strum(to_string = "transport error {code}: {message}")]
    Transport { code: i64, message: String },
    /// The response could not be interpreted, or the request body could not be encoded.
    #[strum(to_string = "protocol error 0: {message}")]
    Protocol { message: String },
    /// The gateway answered with `code > 1`.
    #[strum(to_string = "gateway error {code}: {message}")]
    Gateway {
        code: i64,
        message: String,
        category: Option<i64>,
        reference: Option<String>,
        details: Vec<ErrorDetail>,
    },
}

impl HTTPError {
    /// Signed error code: negative for transport, `0` for protocol, positive for gateway.
    pub fn code(&self) -> i64 {
        match self {
            HTTPError::Transport { code, .. } | HTTPError::Gateway { code, .. } => *code,
            HTTPError::Protocol { .. } => 0,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HTTPError::Transport { message, .. }
            | HTTPError::Protocol { message }
            | HTTPError::Gateway { message, .. } => message,
        }
    }

    pub fn is_transport(&self) -> bool { matches!(self, HTTPError::Transport { .. }) }
    pub fn is_protocol(&self) -> bool { matches!(self, HTTPError::Protocol { .. }) }
    pub fn is_gateway(&self) -> bool { matches!(self, HTTPError::Gateway { .. }) }

    pub(crate) fn unexpected_format() -> Self {
        HTTPError::Protocol { message: String::from("Unexpected response format") }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        HTTPError::Protocol { message: format!("Unexpected response format: missing `{field}`") }
    }
}

impl std::error::Error for HTTPError {}

impl From<reqwest::Error> for HTTPError {
    fn from(value: reqwest::Error) -> Self {
        let code = if value.is_timeout() {
            transport_code::OPERATION_TIMEDOUT
        } else if value.is_connect() {
            transport_code::COULDNT_CONNECT
        } else if value.is_redirect() {
            transport_code::TOO_MANY_REDIRECTS
        } else if value.is_status() {
            transport_code::HTTP_RETURNED_ERROR
        } else if value.is_builder() {
            transport_code::URL_MALFORMAT
        } else if value.is_body() || value.is_decode() {
            transport_code::RECV_ERROR
        } else {
            transport_code::OTHER
        };
        HTTPError::Transport { code, message: value.to_string() }
    }
}

/// Card data as accepted by the profile card endpoints.
///
/// Fields the gateway adds over time can be passed through `extra`; a key that
/// repeats a typed field which is set is dropped from the request.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvd: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
            expiry_month: Some(expiry_month.into()),
            expiry_year: Some(expiry_year.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cvd(mut self, cvd: impl Into<String>) -> Self {
        self.cvd = Some(cvd.into());
        self
    }

    /// Copy in which typed fields that are set win over same-named `extra` keys.
    pub(crate) fn without_shadowed_extra(&self) -> Self {
        let mut card = self.clone();
        let typed = [
            ("name", card.name.is_some()),
            ("number", card.number.is_some()),
            ("expiry_month", card.expiry_month.is_some()),
            ("expiry_year", card.expiry_year.is_some()),
            ("cvd", card.cvd.is_some()),
        ];
        for (key, set) in typed {
            if set {
                card.extra.remove(key);
            }
        }
        card
    }
}

/// One condition of a report search, e.g. `{"field": 1, "operator": "%3D", "value": "10000028"}`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SearchCriterion {
    pub field: Value,
    pub operator: String,
    pub value: Value,
}

impl SearchCriterion {
    pub fn new(field: impl Into<Value>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), operator: operator.into(), value: value.into() }
    }
}

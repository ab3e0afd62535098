use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Response of the payment endpoints (`payments`, completions, voids and returns).
///
/// Only the commonly used fields are typed; everything else the gateway sends
/// is kept in `extra`.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PaymentResponse {
    /// Transaction id, used by completions, voids and returns.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// `"1"` when the transaction was approved.
    #[serde(default, deserialize_with = "string_or_number")]
    pub approved: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub message_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub auth_code: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_number: Option<String>,
    /// Transaction type, e.g. `"P"` for purchase or `"PAC"` for completion.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentResponse {
    pub fn is_approved(&self) -> bool { self.approved.as_deref() == Some("1") }
}

impl SerdeJSONBodyHTTPResponseType for PaymentResponse {}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where D: Deserializer<'de> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(String::from(if b { "1" } else { "0" })),
        _ => None,
    })
}

use crate::http_handler::common::{ErrorDetail, HTTPError, transport_code};
use crate::logger::error;
use reqwest::StatusCode;
use serde_json::{Map, Value};

/// Turns a decoded gateway response into the value handed back to the caller.
pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError>;
}

/// Marker for responses that deserialize straight from the JSON body.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> {
        parse_json_body(response)
    }
}

pub(crate) fn parse_json_body<T>(response: Value) -> Result<T, HTTPError>
where for<'de> T: serde::Deserialize<'de> {
    serde_json::from_value(response).map_err(|_| HTTPError::unexpected_format())
}

/// Removes `field` from a response object.
pub(crate) fn take_field(response: Value, field: &str) -> Result<Value, HTTPError> {
    match response {
        Value::Object(mut map) => map.remove(field).ok_or_else(|| HTTPError::missing_field(field)),
        _ => Err(HTTPError::unexpected_format()),
    }
}

/// Reads a list of objects from `field`; `null` counts as empty.
pub(crate) fn take_object_list(
    response: Value,
    field: &str,
) -> Result<Vec<Map<String, Value>>, HTTPError> {
    match take_field(response, field)? {
        Value::Null => Ok(Vec::new()),
        list => parse_json_body(list),
    }
}

/// The gateway's `code` field, accepting integers, floats and numeric strings.
pub(crate) fn gateway_code(response: &Value) -> Option<f64> {
    match response.get("code")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decodes a raw body and applies the gateway's error convention: a `code`
/// greater than 1 is a failure, `code <= 1` or no code at all is success.
/// A body that is not JSON, or is JSON `null`, is a protocol error.
pub(crate) fn decode_body(status: StatusCode, raw: &[u8]) -> Result<Value, HTTPError> {
    let response: Value =
        serde_json::from_slice(raw).map_err(|_| HTTPError::unexpected_format())?;
    if response.is_null() {
        return Err(HTTPError::unexpected_format());
    }
    if let Some(code) = gateway_code(&response).filter(|code| *code > 1.0) {
        // Saturating cast; fractional codes keep their integer part.
        #[allow(clippy::cast_possible_truncation)]
        let err = gateway_error(code as i64, &response);
        error!("{err}");
        return Err(err);
    }
    if !status.is_success() {
        return Err(HTTPError::Transport {
            code: transport_code::HTTP_RETURNED_ERROR,
            message: format!("The requested URL returned error: {status}"),
        });
    }
    Ok(response)
}

fn gateway_error(code: i64, response: &Value) -> HTTPError {
    let message = response.get("message").and_then(Value::as_str).unwrap_or_default();
    let category = response.get("category").and_then(Value::as_i64);
    let reference = match response.get("reference") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let details = response
        .get("details")
        .cloned()
        .and_then(|d| serde_json::from_value::<Vec<ErrorDetail>>(d).ok())
        .unwrap_or_default();
    HTTPError::Gateway { code, message: String::from(message), category, reference, details }
}

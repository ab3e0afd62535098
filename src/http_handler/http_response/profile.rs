use crate::http_handler::common::HTTPError;
use crate::http_handler::http_response::response_common::{
    HTTPResponseType, parse_json_body, take_field,
};
use serde_json::{Map, Value};

/// Response type for `POST profiles`.
pub(crate) enum CreateProfileResponse {}

impl HTTPResponseType for CreateProfileResponse {
    /// The new profile's customer code.
    type ParsedResponseType = String;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> {
        match take_field(response, "customer_code")? {
            Value::String(code) => Ok(code),
            Value::Number(code) => Ok(code.to_string()),
            _ => Err(HTTPError::missing_field("customer_code")),
        }
    }
}

/// Response type for `GET profiles/{id}`.
pub(crate) enum RetrieveProfileResponse {}

impl HTTPResponseType for RetrieveProfileResponse {
    /// The profile without the status `code` and `message`.
    type ParsedResponseType = Map<String, Value>;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> {
        let mut profile: Map<String, Value> = parse_json_body(response)?;
        profile.remove("code");
        profile.remove("message");
        Ok(profile)
    }
}

use crate::http_handler::common::HTTPError;
use crate::http_handler::http_response::response_common::HTTPResponseType;
use serde_json::Value;

/// Response type for the profile and card mutations whose body carries
/// nothing beyond the status.
///
/// Reaching `read_response` already means the gateway reported no error, so
/// the body is not inspected. In particular `POST profiles/{id}/cards` does
/// not return the new card's id.
pub(crate) enum AcknowledgementResponse {}

impl HTTPResponseType for AcknowledgementResponse {
    type ParsedResponseType = bool;

    fn read_response(_response: Value) -> Result<Self::ParsedResponseType, HTTPError> { Ok(true) }
}

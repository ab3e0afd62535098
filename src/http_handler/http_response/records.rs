use crate::http_handler::common::HTTPError;
use crate::http_handler::http_response::response_common::{HTTPResponseType, take_object_list};
use serde_json::{Map, Value};

/// Response type for `GET profiles/{id}/cards`.
pub(crate) enum CardListResponse {}

impl HTTPResponseType for CardListResponse {
    type ParsedResponseType = Vec<Map<String, Value>>;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> {
        take_object_list(response, "card")
    }
}

/// Response type for `POST reports`.
pub(crate) enum SearchResponse {}

impl HTTPResponseType for SearchResponse {
    type ParsedResponseType = Vec<Map<String, Value>>;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> {
        take_object_list(response, "records")
    }
}

/// Response type for [`GatewayClient::request`](crate::GatewayClient::request).
pub(crate) enum RawResponse {}

impl HTTPResponseType for RawResponse {
    type ParsedResponseType = Value;

    fn read_response(response: Value) -> Result<Self::ParsedResponseType, HTTPError> { Ok(response) }
}

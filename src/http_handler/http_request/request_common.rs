pub(crate) use crate::http_handler::common::HTTPRequestMethod;
use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::HTTPResponseType;

/// Parsed return value of the response type tied to request `T`.
pub(crate) type ParsedResponse<T> =
    <<T as HTTPRequestType>::Response as HTTPResponseType>::ParsedResponseType;

/// One gateway operation: where it goes, how, with which body, and how its
/// answer is read.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Type of the json body, `()` for bodyless requests.
    type Body: serde::Serialize;
    /// Action path relative to the base URL, e.g. `profiles/{id}/cards`.
    fn endpoint(&self) -> String;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Returns the serializable body, if any.
    fn body(&self) -> Option<&Self::Body>;

    async fn send_request(&self, client: &HTTPClient) -> Result<ParsedResponse<Self>, HTTPError>
    where Self: Sized {
        let response =
            client.dispatch(&self.endpoint(), self.body(), Some(self.request_method())).await?;
        Self::Response::read_response(response)
    }
}

/// Body of completions, voids and returns.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub(crate) struct AmountBody {
    pub(crate) amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order_number: Option<String>,
}

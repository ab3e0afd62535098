use super::acknowledgement::AcknowledgementResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use serde_json::{Map, Value};
use urlencoding::encode;

/// Request type for `PUT profiles/{id}`.
#[derive(Debug)]
pub(crate) struct UpdateProfileRequest<'a> {
    pub(crate) customer_code: &'a str,
    pub(crate) data: Map<String, Value>,
}

impl HTTPRequestType for UpdateProfileRequest<'_> {
    type Response = AcknowledgementResponse;
    type Body = Map<String, Value>;
    fn endpoint(&self) -> String { format!("profiles/{}", encode(self.customer_code)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
    fn body(&self) -> Option<&Self::Body> { Some(&self.data) }
}

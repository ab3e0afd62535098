use super::acknowledgement::AcknowledgementResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use urlencoding::encode;

/// Request type for `DELETE profiles/{id}`.
#[derive(Debug)]
pub(crate) struct DeleteProfileRequest<'a> {
    pub(crate) customer_code: &'a str,
}

impl HTTPRequestType for DeleteProfileRequest<'_> {
    type Response = AcknowledgementResponse;
    type Body = ();
    fn endpoint(&self) -> String { format!("profiles/{}", encode(self.customer_code)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
    fn body(&self) -> Option<&Self::Body> { None }
}

use super::acknowledgement::AcknowledgementResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use urlencoding::encode;

/// Request type for `DELETE profiles/{id}/cards/{card_id}`.
#[derive(Debug)]
pub(crate) struct DeleteCardRequest<'a> {
    pub(crate) customer_code: &'a str,
    pub(crate) card_id: u32,
}

impl HTTPRequestType for DeleteCardRequest<'_> {
    type Response = AcknowledgementResponse;
    type Body = ();
    fn endpoint(&self) -> String {
        format!("profiles/{}/cards/{}", encode(self.customer_code), self.card_id)
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
    fn body(&self) -> Option<&Self::Body> { None }
}

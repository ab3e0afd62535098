use super::records::CardListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use urlencoding::encode;

/// Request type for `GET profiles/{id}/cards`.
#[derive(Debug)]
pub(crate) struct CardListRequest<'a> {
    pub(crate) customer_code: &'a str,
}

impl HTTPRequestType for CardListRequest<'_> {
    type Response = CardListResponse;
    type Body = ();
    fn endpoint(&self) -> String { format!("profiles/{}/cards", encode(self.customer_code)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> Option<&Self::Body> { None }
}

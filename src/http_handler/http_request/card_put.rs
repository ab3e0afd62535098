use super::acknowledgement::AcknowledgementResponse;
use super::card_post::CardBody;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::Card;
use urlencoding::encode;

/// Request type for `PUT profiles/{id}/cards/{card_id}`.
#[derive(Debug)]
pub(crate) struct UpdateCardRequest<'a> {
    pub(crate) customer_code: &'a str,
    pub(crate) card_id: u32,
    pub(crate) body: CardBody,
}

impl<'a> UpdateCardRequest<'a> {
    pub(crate) fn new(customer_code: &'a str, card_id: u32, card: &Card) -> Self {
        Self { customer_code, card_id, body: CardBody::new(card) }
    }
}

impl HTTPRequestType for UpdateCardRequest<'_> {
    type Response = AcknowledgementResponse;
    type Body = CardBody;
    fn endpoint(&self) -> String {
        format!("profiles/{}/cards/{}", encode(self.customer_code), self.card_id)
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}

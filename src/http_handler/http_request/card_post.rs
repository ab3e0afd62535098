use super::acknowledgement::AcknowledgementResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::common::Card;
use urlencoding::encode;

/// Json body of the card endpoints, `{"card": {...}}`.
#[derive(serde::Serialize, Debug)]
pub(crate) struct CardBody {
    pub(crate) card: Card,
}

impl CardBody {
    pub(crate) fn new(card: &Card) -> Self { Self { card: card.without_shadowed_extra() } }
}

/// Request type for `POST profiles/{id}/cards`.
#[derive(Debug)]
pub(crate) struct AddCardRequest<'a> {
    pub(crate) customer_code: &'a str,
    pub(crate) body: CardBody,
}

impl<'a> AddCardRequest<'a> {
    pub(crate) fn new(customer_code: &'a str, card: &Card) -> Self {
        Self { customer_code, body: CardBody::new(card) }
    }
}

impl HTTPRequestType for AddCardRequest<'_> {
    type Response = AcknowledgementResponse;
    type Body = CardBody;
    fn endpoint(&self) -> String { format!("profiles/{}/cards", encode(self.customer_code)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}

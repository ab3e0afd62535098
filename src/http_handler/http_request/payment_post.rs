use super::payment::PaymentResponse;
use super::request_common::{HTTPRequestType, HTTPRequestMethod};
use serde_json::{Map, Value, json};

/// Request type for a card payment, `POST payments`.
#[derive(Debug)]
pub(crate) struct PaymentRequest {
    body: Map<String, Value>,
}

impl PaymentRequest {
    /// `payment_method` defaults to `"card"`; a value in `data` overrides it.
    pub(crate) fn new(data: Map<String, Value>) -> Self {
        let mut body = Map::new();
        body.insert(String::from("payment_method"), Value::from("card"));
        body.extend(data);
        Self { body }
    }
}

impl HTTPRequestType for PaymentRequest {
    type Response = PaymentResponse;
    type Body = Map<String, Value>;
    fn endpoint(&self) -> String { String::from("payments") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}

/// Request type for a payment charged to a stored profile card, `POST payments`.
#[derive(Debug)]
pub(crate) struct ProfilePaymentRequest {
    body: Map<String, Value>,
}

impl ProfilePaymentRequest {
    /// The profile block and `payment_method` always replace anything of the
    /// same name in `data`.
    pub(crate) fn new(
        customer_code: &str,
        card_id: u32,
        complete: bool,
        data: Map<String, Value>,
    ) -> Self {
        let mut body = data;
        body.insert(String::from("payment_method"), Value::from("payment_profile"));
        body.insert(
            String::from("payment_profile"),
            json!({
                "complete": complete,
                "customer_code": customer_code,
                "card_id": card_id,
            }),
        );
        Self { body }
    }
}

impl HTTPRequestType for ProfilePaymentRequest {
    type Response = PaymentResponse;
    type Body = Map<String, Value>;
    fn endpoint(&self) -> String { String::from("payments") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}

use super::payment::PaymentResponse;
use super::request_common::{AmountBody, HTTPRequestMethod, HTTPRequestType};
use strum_macros::IntoStaticStr;
use urlencoding::encode;

/// Follow-up operations on an existing transaction; the variant names the
/// path segment after `payments/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Adjustment {
    /// Completes a pre-authorization.
    Completions,
    /// Voids a same-day purchase or return.
    Void,
    /// Refunds a settled purchase.
    Returns,
}

/// Request type for `POST payments/{id}/{completions|void|returns}`.
#[derive(Debug)]
pub(crate) struct AdjustmentRequest {
    transaction_id: String,
    adjustment: Adjustment,
    body: AmountBody,
}

impl AdjustmentRequest {
    pub(crate) fn new(
        adjustment: Adjustment,
        transaction_id: &str,
        amount: f64,
        order_number: Option<&str>,
    ) -> Self {
        Self {
            transaction_id: String::from(transaction_id),
            adjustment,
            body: AmountBody { amount, order_number: order_number.map(String::from) },
        }
    }
}

impl HTTPRequestType for AdjustmentRequest {
    type Response = PaymentResponse;
    type Body = AmountBody;
    fn endpoint(&self) -> String {
        let segment: &'static str = self.adjustment.into();
        format!("payments/{}/{segment}", encode(&self.transaction_id))
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.body) }
}

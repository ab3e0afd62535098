use super::http_response::{acknowledgement, payment, profile, records};

pub(crate) mod adjustment_post;
pub(crate) mod card_delete;
pub(crate) mod card_post;
pub(crate) mod card_put;
pub(crate) mod cards_get;
pub(crate) mod payment_post;
pub(crate) mod profile_delete;
pub(crate) mod profile_get;
pub(crate) mod profile_post;
pub(crate) mod profile_put;
pub(crate) mod raw_request;
pub(crate) mod request_common;
pub mod search_post;

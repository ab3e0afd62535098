use super::profile::RetrieveProfileResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use urlencoding::encode;

/// Request type for `GET profiles/{id}`.
#[derive(Debug)]
pub(crate) struct RetrieveProfileRequest<'a> {
    pub(crate) customer_code: &'a str,
}

impl HTTPRequestType for RetrieveProfileRequest<'_> {
    type Response = RetrieveProfileResponse;
    type Body = ();
    fn endpoint(&self) -> String { format!("profiles/{}", encode(self.customer_code)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> Option<&Self::Body> { None }
}

use super::records::RawResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use serde_json::Value;

/// Request type for arbitrary actions; the response is returned as decoded.
#[derive(Debug)]
pub(crate) struct RawRequest<'a> {
    pub(crate) action: &'a str,
    pub(crate) data: Option<&'a Value>,
    pub(crate) method: Option<HTTPRequestMethod>,
}

impl HTTPRequestType for RawRequest<'_> {
    type Response = RawResponse;
    type Body = Value;
    fn endpoint(&self) -> String { String::from(self.action) }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::resolve(self.method, self.data.is_some())
    }
    fn body(&self) -> Option<&Self::Body> { self.data }
}

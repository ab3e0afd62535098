use super::profile::CreateProfileResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use serde_json::{Map, Value};

/// Request type for `POST profiles`.
#[derive(Debug)]
pub(crate) struct CreateProfileRequest {
    /// Profile data as defined by the gateway (`card`, `billing`, `custom`, ...).
    pub(crate) data: Map<String, Value>,
}

impl HTTPRequestType for CreateProfileRequest {
    type Response = CreateProfileResponse;
    type Body = Map<String, Value>;
    fn endpoint(&self) -> String { String::from("profiles") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> Option<&Self::Body> { Some(&self.data) }
}

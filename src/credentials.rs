use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::fmt;

/// Merchant credentials for the gateway's `Passcode` authorization scheme.
///
/// The passcode is not kept; only the derived token is stored, and `Debug`
/// output never shows it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The merchant id the token was built for.
    merchant_id: String,
    /// `base64("<merchant_id>:<passcode>")`.
    token: String,
}

impl Credentials {
    /// Encodes `merchant_id` and `passcode` into the authorization token.
    pub fn new(merchant_id: impl Into<String>, passcode: &str) -> Self {
        let merchant_id = merchant_id.into();
        let token = BASE64.encode(format!("{merchant_id}:{passcode}"));
        Self { merchant_id, token }
    }

    pub fn merchant_id(&self) -> &str { &self.merchant_id }

    /// The token sent as `Authorization: Passcode <token>`.
    pub fn auth_token(&self) -> &str { &self.token }

    pub(crate) fn authorization_header(&self) -> String { format!("Passcode {}", self.token) }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

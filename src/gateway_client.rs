use crate::config::GatewayConfig;
use crate::credentials::Credentials;
use crate::http_handler::common::{Card, HTTPError, HTTPRequestMethod, Result, transport_code};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    adjustment_post::{Adjustment, AdjustmentRequest},
    card_delete::DeleteCardRequest,
    card_post::AddCardRequest,
    card_put::UpdateCardRequest,
    cards_get::CardListRequest,
    payment_post::{PaymentRequest, ProfilePaymentRequest},
    profile_delete::DeleteProfileRequest,
    profile_get::RetrieveProfileRequest,
    profile_post::CreateProfileRequest,
    profile_put::UpdateProfileRequest,
    raw_request::RawRequest,
    request_common::HTTPRequestType,
    search_post::{SearchFilter, SearchRequest},
};
use crate::http_handler::http_response::payment::PaymentResponse;
use crate::logger::info;
use serde_json::{Map, Value};

/// Client for the gateway's payment, profile and report resources.
///
/// Every method performs exactly one HTTP request. Nothing is retried; any
/// failure is returned as an [`HTTPError`].
#[derive(Debug, Clone)]
pub struct GatewayClient {
    credentials: Credentials,
    http: HTTPClient,
}

impl GatewayClient {
    /// Client for the production gateway with default settings.
    ///
    /// # Errors
    /// Only if the HTTP client cannot be initialised; no request is sent.
    pub fn new(merchant_id: impl Into<String>, passcode: &str) -> Result<Self> {
        Self::with_config(Credentials::new(merchant_id, passcode), &GatewayConfig::default())
    }

    /// # Errors
    /// Only if the HTTP client cannot be initialised; no request is sent.
    pub fn with_config(credentials: Credentials, config: &GatewayConfig) -> Result<Self> {
        let http = HTTPClient::new(&credentials, config)?;
        info!("Gateway client for merchant {} at {}", credentials.merchant_id(), http.url());
        Ok(Self { credentials, http })
    }

    pub fn credentials(&self) -> &Credentials { &self.credentials }

    /// The `base64("<merchant_id>:<passcode>")` authorization token.
    pub fn auth_token(&self) -> &str { self.credentials.auth_token() }

    pub fn base_url(&self) -> &str { self.http.url() }

    /// Sends `data` (if any) to `<base>/<action>` and returns the decoded JSON.
    ///
    /// Without an explicit `method` the request is a POST when `data` is given
    /// and a GET otherwise. The body is sent with any method.
    ///
    /// # Errors
    /// `Transport` for network failures, `Protocol` for a body that is not JSON
    /// and `Gateway` when the response carries `code > 1`.
    pub async fn request(
        &self,
        action: &str,
        data: Option<&Value>,
        method: Option<HTTPRequestMethod>,
    ) -> Result<Value> {
        RawRequest { action, data, method }.send_request(&self.http).await
    }

    /// Card payment. `payment_method` defaults to `"card"` unless `data` sets it.
    pub async fn payment(&self, data: Map<String, Value>) -> Result<PaymentResponse> {
        PaymentRequest::new(data).send_request(&self.http).await
    }

    /// Completes a pre-authorized transaction.
    pub async fn complete(
        &self,
        transaction_id: &str,
        amount: f64,
        order_number: Option<&str>,
    ) -> Result<PaymentResponse> {
        AdjustmentRequest::new(Adjustment::Completions, transaction_id, amount, order_number)
            .send_request(&self.http)
            .await
    }

    pub async fn void(&self, transaction_id: &str, amount: f64) -> Result<PaymentResponse> {
        AdjustmentRequest::new(Adjustment::Void, transaction_id, amount, None)
            .send_request(&self.http)
            .await
    }

    pub async fn refund(
        &self,
        transaction_id: &str,
        amount: f64,
        order_number: Option<&str>,
    ) -> Result<PaymentResponse> {
        AdjustmentRequest::new(Adjustment::Returns, transaction_id, amount, order_number)
            .send_request(&self.http)
            .await
    }

    /// Payment charged to card `card_id` of profile `customer_code`.
    ///
    /// `complete = false` only pre-authorizes the amount.
    pub async fn payment_profile(
        &self,
        customer_code: &str,
        card_id: u32,
        data: Map<String, Value>,
        complete: bool,
    ) -> Result<PaymentResponse> {
        ProfilePaymentRequest::new(customer_code, card_id, complete, data)
            .send_request(&self.http)
            .await
    }

    /// Creates a payment profile and returns its customer code.
    pub async fn create_profile(&self, data: Map<String, Value>) -> Result<String> {
        CreateProfileRequest { data }.send_request(&self.http).await
    }

    /// The stored profile, without the status `code` and `message`.
    pub async fn retrieve_profile(&self, customer_code: &str) -> Result<Map<String, Value>> {
        RetrieveProfileRequest { customer_code }.send_request(&self.http).await
    }

    pub async fn update_profile(&self, customer_code: &str, data: Map<String, Value>) -> Result<bool> {
        UpdateProfileRequest { customer_code, data }.send_request(&self.http).await
    }

    pub async fn delete_profile(&self, customer_code: &str) -> Result<bool> {
        DeleteProfileRequest { customer_code }.send_request(&self.http).await
    }

    /// Adds a card to a profile. The gateway does not report the new card's id;
    /// use [`retrieve_cards`](Self::retrieve_cards) to find it.
    pub async fn add_card(&self, customer_code: &str, card: &Card) -> Result<bool> {
        AddCardRequest::new(customer_code, card).send_request(&self.http).await
    }

    pub async fn retrieve_cards(&self, customer_code: &str) -> Result<Vec<Map<String, Value>>> {
        CardListRequest { customer_code }.send_request(&self.http).await
    }

    pub async fn update_card(&self, customer_code: &str, card_id: u32, card: &Card) -> Result<bool> {
        UpdateCardRequest::new(customer_code, card_id, card).send_request(&self.http).await
    }

    pub async fn delete_card(&self, customer_code: &str, card_id: u32) -> Result<bool> {
        DeleteCardRequest { customer_code, card_id }.send_request(&self.http).await
    }

    /// Searches transactions. Without dates the window is the last 24 hours;
    /// without rows the first ten records are returned.
    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Map<String, Value>>> {
        SearchRequest::new(filter, chrono::Utc::now()).send_request(&self.http).await
    }
}

/// Synchronous facade over [`GatewayClient`].
///
/// Owns a single-threaded runtime and blocks the calling thread for the
/// duration of each request. Must not be used from within an async context.
#[derive(Debug)]
pub struct BlockingGatewayClient {
    inner: GatewayClient,
    runtime: tokio::runtime::Runtime,
}

impl BlockingGatewayClient {
    /// # Errors
    /// Only if the HTTP client or the runtime cannot be initialised.
    pub fn new(merchant_id: impl Into<String>, passcode: &str) -> Result<Self> {
        Self::with_config(Credentials::new(merchant_id, passcode), &GatewayConfig::default())
    }

    /// # Errors
    /// Only if the HTTP client or the runtime cannot be initialised.
    pub fn with_config(credentials: Credentials, config: &GatewayConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| HTTPError::Transport {
                code: transport_code::FAILED_INIT,
                message: e.to_string(),
            })?;
        Ok(Self { inner: GatewayClient::with_config(credentials, config)?, runtime })
    }

    /// The async client this facade drives.
    pub fn client(&self) -> &GatewayClient { &self.inner }

    pub fn auth_token(&self) -> &str { self.inner.auth_token() }

    pub fn request(
        &self,
        action: &str,
        data: Option<&Value>,
        method: Option<HTTPRequestMethod>,
    ) -> Result<Value> {
        self.runtime.block_on(self.inner.request(action, data, method))
    }

    pub fn payment(&self, data: Map<String, Value>) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.payment(data))
    }

    pub fn complete(
        &self,
        transaction_id: &str,
        amount: f64,
        order_number: Option<&str>,
    ) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.complete(transaction_id, amount, order_number))
    }

    pub fn void(&self, transaction_id: &str, amount: f64) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.void(transaction_id, amount))
    }

    pub fn refund(
        &self,
        transaction_id: &str,
        amount: f64,
        order_number: Option<&str>,
    ) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.refund(transaction_id, amount, order_number))
    }

    pub fn payment_profile(
        &self,
        customer_code: &str,
        card_id: u32,
        data: Map<String, Value>,
        complete: bool,
    ) -> Result<PaymentResponse> {
        self.runtime.block_on(self.inner.payment_profile(customer_code, card_id, data, complete))
    }

    pub fn create_profile(&self, data: Map<String, Value>) -> Result<String> {
        self.runtime.block_on(self.inner.create_profile(data))
    }

    pub fn retrieve_profile(&self, customer_code: &str) -> Result<Map<String, Value>> {
        self.runtime.block_on(self.inner.retrieve_profile(customer_code))
    }

    pub fn update_profile(&self, customer_code: &str, data: Map<String, Value>) -> Result<bool> {
        self.runtime.block_on(self.inner.update_profile(customer_code, data))
    }

    pub fn delete_profile(&self, customer_code: &str) -> Result<bool> {
        self.runtime.block_on(self.inner.delete_profile(customer_code))
    }

    pub fn add_card(&self, customer_code: &str, card: &Card) -> Result<bool> {
        self.runtime.block_on(self.inner.add_card(customer_code, card))
    }

    pub fn retrieve_cards(&self, customer_code: &str) -> Result<Vec<Map<String, Value>>> {
        self.runtime.block_on(self.inner.retrieve_cards(customer_code))
    }

    pub fn update_card(&self, customer_code: &str, card_id: u32, card: &Card) -> Result<bool> {
        self.runtime.block_on(self.inner.update_card(customer_code, card_id, card))
    }

    pub fn delete_card(&self, customer_code: &str, card_id: u32) -> Result<bool> {
        self.runtime.block_on(self.inner.delete_card(customer_code, card_id))
    }

    pub fn search(&self, filter: SearchFilter) -> Result<Vec<Map<String, Value>>> {
        self.runtime.block_on(self.inner.search(filter))
    }
}

//! Client for the Beanstream payment gateway REST API (v1).
//!
//! Payments, payment profiles, profile cards and transaction reports are
//! exposed as methods on [`GatewayClient`] (async) and
//! [`BlockingGatewayClient`]. Requests authenticate with the merchant id and
//! API passcode using the gateway's `Passcode` scheme.
//!
//! ```no_run
//! use beanstream::{GatewayClient, Value};
//!
//! # async fn run() -> beanstream::Result<()> {
//! let client = GatewayClient::new("300200578", "4BaD82D9197b4cc4b70a221911eE9f70")?;
//! let payment = serde_json::json!({
//!     "order_number": "10000123",
//!     "amount": 100.00,
//!     "card": {
//!         "name": "John Doe",
//!         "number": "5100000010001004",
//!         "expiry_month": "02",
//!         "expiry_year": "24",
//!         "cvd": "123"
//!     }
//! });
//! let Value::Object(data) = payment else { unreachable!() };
//! let response = client.payment(data).await?;
//! assert!(response.is_approved());
//! # Ok(())
//! # }
//! ```
//!
//! Setting `BEANSTREAM_LOG` in the environment prints each request and every
//! gateway error to stdout.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod config;
mod credentials;
mod gateway_client;
mod http_handler;
mod logger;

pub use chrono;
pub use serde_json;
pub use serde_json::{Map, Value};

pub use config::{BASE_URL, DEFAULT_TIMEOUT, GatewayConfig};
pub use credentials::Credentials;
pub use gateway_client::{BlockingGatewayClient, GatewayClient};
pub use http_handler::common::{
    Card, ErrorDetail, HTTPError, HTTPRequestMethod, Result, SearchCriterion,
};
pub use http_handler::http_request::search_post::SearchFilter;
pub use http_handler::http_response::payment::PaymentResponse;

//! Client SDK for the bigpay payment API.
//!
//! [`Client`] is a thin facade: each operation is forwarded untouched to an
//! injected collaborator. [`Client::create`] wires in the HTTP collaborators
//! from this crate; tests and embedders can inject their own.
//!
//! # Quick Example
//!
//! ```no_run
//! use bigpay_client::{Client, StoreInstrumentData};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut client = Client::create();
//! client.set_host("https://bigpay.dev");
//!
//! let instruments = client
//!     .load_instruments(&StoreInstrumentData {
//!         store_id: "1504098821".to_string(),
//!         customer_id: "0".to_string(),
//!         auth_token: "shopper-token".to_string(),
//!         currency_code: Some("USD".to_string()),
//!         instrument_id: None,
//!     })
//!     .await
//!     .unwrap();
//!
//! println!("{}", instruments.data);
//! # }
//! ```

mod client;
mod client_token_generator;
mod offsite_payment_initializer;
mod payment_submitter;
mod request_sender;
mod store_request_sender;

pub use client::Client;
pub use client_token_generator::BigpayClientTokenGenerator;
pub use offsite_payment_initializer::BigpayOffsitePaymentInitializer;
pub use payment_submitter::BigpayPaymentSubmitter;
pub use request_sender::RequestSender;
pub use store_request_sender::BigpayStoreRequestSender;

// Re-export commonly needed types from core
pub use bigpay::{
    Address, ApiResponse, BigpayError, ClientConfig, ClientTokenGenerator, OffsitePaymentForm,
    OffsitePaymentInitializer, PaymentMethod, PaymentMethodType, PaymentRequestData,
    PaymentSubmitter, SharedConfig, StoreInstrumentData, StoreRequestSender,
    TrustedShippingAddressData, DEFAULT_HOST, DEFAULT_OFFSITE_TARGET,
};

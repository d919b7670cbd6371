//! Core types for the bigpay payment client.
//!
//! Holds the pieces shared by the client facade and its collaborators:
//! connection config, request data models, wire payloads, the offsite form
//! descriptor, and the collaborator traits themselves.
//!
//! # Collaborators
//!
//! - [`PaymentSubmitter`] — submits API payments
//! - [`OffsitePaymentInitializer`] — starts hosted payment flows
//! - [`ClientTokenGenerator`] — issues client tokens
//! - [`StoreRequestSender`] — manages a shopper's stored instruments

// Core types and traits
pub mod config;
pub mod constants;
pub mod error;
pub mod payment;
pub mod response;
pub mod service;
pub mod store;

// Wire formats
pub mod offsite;
pub mod payload;

// Re-exports
pub use config::{ClientConfig, SharedConfig};
pub use constants::*;
pub use error::BigpayError;
pub use offsite::OffsitePaymentForm;
pub use payment::*;
pub use response::ApiResponse;
pub use service::*;
pub use store::{StoreInstrumentData, TrustedShippingAddressData};

//! Collaborator traits the client facade delegates to.
//!
//! - [`PaymentSubmitter`] — submits API (non-hosted) payments
//! - [`OffsitePaymentInitializer`] — starts hosted payment flows
//! - [`ClientTokenGenerator`] — issues client tokens for tokenization
//! - [`StoreRequestSender`] — loads and deletes a shopper's stored instruments
//!
//! Each returned future resolves exactly once, and owns whatever I/O the
//! operation needs.

use crate::error::BigpayError;
use crate::offsite::OffsitePaymentForm;
use crate::payment::PaymentRequestData;
use crate::response::ApiResponse;
use crate::store::{StoreInstrumentData, TrustedShippingAddressData};

pub trait PaymentSubmitter: Send + Sync {
    /// Submit a payment for an order.
    fn submit_payment(
        &self,
        data: &PaymentRequestData,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BigpayError>> + Send;
}

pub trait OffsitePaymentInitializer: Send + Sync {
    /// Start an offsite flow rendered into `target`.
    ///
    /// `None` means the caller did not name a target; the implementation
    /// decides which browsing context to use.
    fn initialize_offsite_payment(
        &self,
        data: &PaymentRequestData,
        target: Option<&str>,
    ) -> impl std::future::Future<Output = Result<OffsitePaymentForm, BigpayError>> + Send;
}

pub trait ClientTokenGenerator: Send + Sync {
    fn generate_client_token(
        &self,
        data: &PaymentRequestData,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BigpayError>> + Send;
}

pub trait StoreRequestSender: Send + Sync {
    fn load_instruments(
        &self,
        data: &StoreInstrumentData,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BigpayError>> + Send;

    /// Load the instruments that are trusted for the given shipping address.
    fn load_instruments_with_address(
        &self,
        data: &TrustedShippingAddressData,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BigpayError>> + Send;

    fn delete_shopper_instrument(
        &self,
        data: &StoreInstrumentData,
    ) -> impl std::future::Future<Output = Result<ApiResponse, BigpayError>> + Send;
}

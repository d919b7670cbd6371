use bigpay::{
    ApiResponse, BigpayError, ClientConfig, ClientTokenGenerator, OffsitePaymentForm,
    OffsitePaymentInitializer, PaymentRequestData, PaymentSubmitter, SharedConfig,
    StoreInstrumentData, StoreRequestSender, TrustedShippingAddressData,
};

use crate::client_token_generator::BigpayClientTokenGenerator;
use crate::offsite_payment_initializer::BigpayOffsitePaymentInitializer;
use crate::payment_submitter::BigpayPaymentSubmitter;
use crate::request_sender::RequestSender;
use crate::store_request_sender::BigpayStoreRequestSender;

/// Entry point for bigpay payment operations.
///
/// Every operation is handed, with its arguments untouched, to the matching
/// collaborator, and the collaborator's result is returned as is. The client
/// itself only owns the connection config.
#[derive(Debug)]
pub struct Client<
    P = BigpayPaymentSubmitter,
    O = BigpayOffsitePaymentInitializer,
    T = BigpayClientTokenGenerator,
    S = BigpayStoreRequestSender,
> {
    config: SharedConfig,
    payment_submitter: P,
    offsite_payment_initializer: O,
    client_token_generator: T,
    store_request_sender: S,
}

impl Client {
    /// Create a client for the production host with the HTTP collaborators.
    pub fn create() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with the HTTP collaborators and a custom config.
    ///
    /// The client and all collaborators share one config, so
    /// [`set_host`](Client::set_host) redirects subsequent requests.
    pub fn with_config(config: ClientConfig) -> Self {
        let config = SharedConfig::new(config);
        let sender = RequestSender::new(config.clone());

        Self::new(
            config.clone(),
            BigpayPaymentSubmitter::new(sender.clone()),
            BigpayOffsitePaymentInitializer::new(config),
            BigpayClientTokenGenerator::new(sender.clone()),
            BigpayStoreRequestSender::new(sender),
        )
    }

    /// Create a client configured from `BIGPAY_*` environment variables.
    pub fn from_env() -> Result<Self, BigpayError> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }
}

/// Clones get their own config and collaborators wired to it, so a host
/// change on one client never leaks into another.
impl Clone for Client {
    fn clone(&self) -> Self {
        Self::with_config(self.config.snapshot())
    }
}

impl<P, O, T, S> Client<P, O, T, S>
where
    P: PaymentSubmitter,
    O: OffsitePaymentInitializer,
    T: ClientTokenGenerator,
    S: StoreRequestSender,
{
    pub fn new(
        config: impl Into<SharedConfig>,
        payment_submitter: P,
        offsite_payment_initializer: O,
        client_token_generator: T,
        store_request_sender: S,
    ) -> Self {
        Self {
            config: config.into(),
            payment_submitter,
            offsite_payment_initializer,
            client_token_generator,
            store_request_sender,
        }
    }

    /// Snapshot of the current config.
    pub fn config(&self) -> ClientConfig {
        self.config.snapshot()
    }

    pub fn shared_config(&self) -> &SharedConfig {
        &self.config
    }

    /// Point the client at a different payment service host.
    ///
    /// Only `host` changes; other connection options are kept.
    pub fn set_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        tracing::info!(%host, "bigpay host updated");
        self.config.set_host(host);
    }

    pub async fn submit_payment(
        &self,
        data: &PaymentRequestData,
    ) -> Result<ApiResponse, BigpayError> {
        self.payment_submitter.submit_payment(data).await
    }

    /// Start an offsite payment flow.
    ///
    /// `target` names the browsing context the hosted page is loaded into.
    /// `None` is forwarded as is, leaving the choice to the initializer.
    pub async fn initialize_offsite_payment(
        &self,
        data: &PaymentRequestData,
        target: Option<&str>,
    ) -> Result<OffsitePaymentForm, BigpayError> {
        self.offsite_payment_initializer
            .initialize_offsite_payment(data, target)
            .await
    }

    pub async fn generate_client_token(
        &self,
        data: &PaymentRequestData,
    ) -> Result<ApiResponse, BigpayError> {
        self.client_token_generator.generate_client_token(data).await
    }

    pub async fn load_instruments(
        &self,
        data: &StoreInstrumentData,
    ) -> Result<ApiResponse, BigpayError> {
        self.store_request_sender.load_instruments(data).await
    }

    pub async fn load_instruments_with_address(
        &self,
        data: &TrustedShippingAddressData,
    ) -> Result<ApiResponse, BigpayError> {
        self.store_request_sender
            .load_instruments_with_address(data)
            .await
    }

    pub async fn delete_shopper_instrument(
        &self,
        data: &StoreInstrumentData,
    ) -> Result<ApiResponse, BigpayError> {
        self.store_request_sender
            .delete_shopper_instrument(data)
            .await
    }

    pub fn payment_submitter(&self) -> &P {
        &self.payment_submitter
    }

    pub fn offsite_payment_initializer(&self) -> &O {
        &self.offsite_payment_initializer
    }

    pub fn client_token_generator(&self) -> &T {
        &self.client_token_generator
    }

    pub fn store_request_sender(&self) -> &S {
        &self.store_request_sender
    }
}

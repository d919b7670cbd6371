use bigpay::{
    BigpayError, OffsitePaymentForm, OffsitePaymentInitializer, PaymentRequestData, SharedConfig,
    DEFAULT_OFFSITE_TARGET, OFFSITE_PAYMENT_PATH,
};

/// Builds the auto-submitting form that hands the shopper to a hosted
/// payment page.
///
/// No request is sent from here: the form has to be submitted by the
/// shopper's browser so the hosted page can take over the target context.
#[derive(Debug, Clone)]
pub struct BigpayOffsitePaymentInitializer {
    config: SharedConfig,
}

impl BigpayOffsitePaymentInitializer {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }
}

impl OffsitePaymentInitializer for BigpayOffsitePaymentInitializer {
    async fn initialize_offsite_payment(
        &self,
        data: &PaymentRequestData,
        target: Option<&str>,
    ) -> Result<OffsitePaymentForm, BigpayError> {
        if !data.is_hosted() {
            return Err(BigpayError::InvalidPaymentMethod(format!(
                "{} does not support the offsite payment flow",
                data.payment_method.id
            )));
        }

        let action = format!(
            "{}{}",
            self.config.host().trim_end_matches('/'),
            OFFSITE_PAYMENT_PATH
        );
        let target = target.unwrap_or(DEFAULT_OFFSITE_TARGET);

        tracing::debug!(%action, %target, order_id = %data.order.order_id, "initializing offsite payment");

        Ok(OffsitePaymentForm::from_request(action, target, data))
    }
}

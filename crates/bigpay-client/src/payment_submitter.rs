use bigpay::payload::PaymentPayload;
use bigpay::{ApiResponse, BigpayError, PaymentRequestData, PaymentSubmitter, PAYMENT_PATH};

use crate::request_sender::RequestSender;

/// Submits API payments to `/api/public/v1/orders/payments`.
#[derive(Debug, Clone)]
pub struct BigpayPaymentSubmitter {
    sender: RequestSender,
}

impl BigpayPaymentSubmitter {
    pub fn new(sender: RequestSender) -> Self {
        Self { sender }
    }
}

impl PaymentSubmitter for BigpayPaymentSubmitter {
    async fn submit_payment(&self, data: &PaymentRequestData) -> Result<ApiResponse, BigpayError> {
        if data.is_hosted() {
            return Err(BigpayError::InvalidPaymentMethod(format!(
                "{} is a hosted payment method; use the offsite payment flow",
                data.payment_method.id
            )));
        }

        let payload = PaymentPayload::from_request(data);
        self.sender
            .post(PAYMENT_PATH, &data.auth_token, &[], &payload)
            .await
    }
}

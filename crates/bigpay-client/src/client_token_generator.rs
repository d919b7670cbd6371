use bigpay::payload::ClientTokenPayload;
use bigpay::{ApiResponse, BigpayError, ClientTokenGenerator, PaymentRequestData, CLIENT_TOKEN_PATH};

use crate::request_sender::RequestSender;

#[derive(Debug, Clone)]
pub struct BigpayClientTokenGenerator {
    sender: RequestSender,
}

impl BigpayClientTokenGenerator {
    pub fn new(sender: RequestSender) -> Self {
        Self { sender }
    }
}

impl ClientTokenGenerator for BigpayClientTokenGenerator {
    async fn generate_client_token(
        &self,
        data: &PaymentRequestData,
    ) -> Result<ApiResponse, BigpayError> {
        let payload = ClientTokenPayload::from_request(data);
        self.sender
            .post(CLIENT_TOKEN_PATH, &data.auth_token, &[], &payload)
            .await
    }
}

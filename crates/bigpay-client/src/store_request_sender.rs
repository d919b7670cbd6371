use bigpay::payload::AddressBody;
use bigpay::{
    instrument_path, instruments_path, trusted_shipping_address_path, ApiResponse, BigpayError,
    StoreInstrumentData, StoreRequestSender, TrustedShippingAddressData,
};

use crate::request_sender::RequestSender;

/// Loads and deletes a shopper's vaulted instruments.
#[derive(Debug, Clone)]
pub struct BigpayStoreRequestSender {
    sender: RequestSender,
}

impl BigpayStoreRequestSender {
    pub fn new(sender: RequestSender) -> Self {
        Self { sender }
    }
}

/// `currency_code` filter for instrument lookups, if one was given.
fn currency_query(currency_code: Option<&str>) -> Vec<(&'static str, &str)> {
    currency_code
        .map(|code| ("currency_code", code))
        .into_iter()
        .collect()
}

impl StoreRequestSender for BigpayStoreRequestSender {
    async fn load_instruments(
        &self,
        data: &StoreInstrumentData,
    ) -> Result<ApiResponse, BigpayError> {
        let path = instruments_path(&data.store_id, &data.customer_id);
        let query = currency_query(data.currency_code.as_deref());
        self.sender.get(&path, &data.auth_token, &query).await
    }

    async fn load_instruments_with_address(
        &self,
        data: &TrustedShippingAddressData,
    ) -> Result<ApiResponse, BigpayError> {
        let path = trusted_shipping_address_path(&data.store_id, &data.customer_id);
        let query = currency_query(data.currency_code.as_deref());
        let body = AddressBody::from(&data.shipping_address);
        self.sender
            .post(&path, &data.auth_token, &query, &body)
            .await
    }

    /// Deletes by instrument id; `currency_code` plays no part in a delete.
    async fn delete_shopper_instrument(
        &self,
        data: &StoreInstrumentData,
    ) -> Result<ApiResponse, BigpayError> {
        let instrument_id = data
            .instrument_id
            .as_deref()
            .ok_or(BigpayError::MissingField("instrumentId"))?;
        let path = instrument_path(&data.store_id, &data.customer_id, instrument_id);
        self.sender.delete(&path, &data.auth_token).await
    }
}

use serde::{Deserialize, Serialize};

use crate::payment::Address;

/// Identifies a shopper's instrument vault, and optionally one instrument in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInstrumentData {
    pub store_id: String,
    pub customer_id: String,
    /// Shopper token sent as the `Authorization` header.
    pub auth_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Required for deletes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_id: Option<String>,
}

/// Instrument lookup filtered to those trusted for a shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedShippingAddressData {
    pub store_id: String,
    pub customer_id: String,
    pub auth_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub shipping_address: Address,
}

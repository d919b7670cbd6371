use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::BigpayError;

/// A reply from the bigpay service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    /// Header names are lowercase.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// JSON body. `Null` for an empty body, a JSON string for non-JSON text.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Build a response from a raw body, parsing it as JSON when possible.
    pub fn from_body(
        status: u16,
        status_text: impl Into<String>,
        headers: BTreeMap<String, String>,
        body: &[u8],
    ) -> Self {
        let data = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(body).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(body).into_owned())
            })
        };

        Self {
            status,
            status_text: status_text.into(),
            headers,
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize `data` into a typed body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BigpayError> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

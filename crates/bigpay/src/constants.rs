/// Production host of the bigpay payment service.
pub const DEFAULT_HOST: &str = "https://payments.bigcommerce.com";

/// Per-request timeout applied by the default HTTP collaborators.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint that accepts API (non-hosted) payment submissions.
pub const PAYMENT_PATH: &str = "/api/public/v1/orders/payments";

/// Endpoint that starts a hosted (offsite) payment flow.
pub const OFFSITE_PAYMENT_PATH: &str = "/pay/initialize";

/// Endpoint that issues client tokens for client-side tokenization.
pub const CLIENT_TOKEN_PATH: &str = "/api/public/v1/payments/client_token";

/// Browsing context used when an offsite flow is started without a target.
pub const DEFAULT_OFFSITE_TARGET: &str = "_top";

/// Environment variable overriding [`DEFAULT_HOST`].
pub const HOST_ENV: &str = "BIGPAY_HOST";

/// Environment variable overriding [`DEFAULT_REQUEST_TIMEOUT_SECS`].
pub const REQUEST_TIMEOUT_ENV: &str = "BIGPAY_REQUEST_TIMEOUT_SECS";

/// Path of a shopper's stored instrument collection.
///
/// Segments are percent-encoded.
pub fn instruments_path(store_id: &str, customer_id: &str) -> String {
    format!(
        "/api/v2/stores/{}/shoppers/{}/instruments",
        urlencoding::encode(store_id),
        urlencoding::encode(customer_id)
    )
}

/// Path used to load instruments trusted for a given shipping address.
pub fn trusted_shipping_address_path(store_id: &str, customer_id: &str) -> String {
    format!(
        "{}/trusted_shipping_address",
        instruments_path(store_id, customer_id)
    )
}

/// Path of a single stored instrument.
pub fn instrument_path(store_id: &str, customer_id: &str, instrument_id: &str) -> String {
    format!(
        "{}/{}",
        instruments_path(store_id, customer_id),
        urlencoding::encode(instrument_id)
    )
}

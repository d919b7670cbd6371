use std::collections::BTreeMap;
use std::time::Duration;

use bigpay::{ApiResponse, BigpayError, SharedConfig};
use serde::Serialize;

/// Sends authenticated JSON requests to the bigpay service.
///
/// The host is read from the shared config on every request, so a host
/// change made through the client applies to the next call.
#[derive(Debug, Clone)]
pub struct RequestSender {
    http: reqwest::Client,
    config: SharedConfig,
}

impl RequestSender {
    pub fn new(config: SharedConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a sender with a custom reqwest::Client.
    pub fn with_http_client(config: SharedConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path on the current host.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.host().trim_end_matches('/'), path)
    }

    pub async fn get(
        &self,
        path: &str,
        auth_token: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, BigpayError> {
        self.send::<()>(reqwest::Method::GET, path, auth_token, query, None)
            .await
    }

    pub async fn post<B>(
        &self,
        path: &str,
        auth_token: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<ApiResponse, BigpayError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(reqwest::Method::POST, path, auth_token, query, Some(body))
            .await
    }

    pub async fn delete(&self, path: &str, auth_token: &str) -> Result<ApiResponse, BigpayError> {
        self.send::<()>(reqwest::Method::DELETE, path, auth_token, &[], None)
            .await
    }

    /// Send a request and map the reply onto [`ApiResponse`].
    ///
    /// `Content-Type` is only sent along with a body. Non-2xx replies come
    /// back as [`BigpayError::Rejected`] carrying the full response.
    pub async fn send<B>(
        &self,
        method: reqwest::Method,
        path: &str,
        auth_token: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<ApiResponse, BigpayError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(%method, %url, %request_id, "sending bigpay request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::AUTHORIZATION, auth_token)
            .header("X-Request-Id", &request_id)
            .timeout(Duration::from_secs(self.config.request_timeout_secs()));

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| BigpayError::Http(format!("{method} {url} failed: {e}")))?;

        let status = resp.status();
        let headers: BTreeMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| BigpayError::Http(format!("failed to read response body: {e}")))?;

        let response = ApiResponse::from_body(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            headers,
            &body,
        );

        if !response.is_success() {
            tracing::warn!(
                %method,
                %url,
                %request_id,
                status = response.status,
                "bigpay request rejected"
            );
            return Err(BigpayError::Rejected(Box::new(response)));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigpay::ClientConfig;

    #[test]
    fn test_url_joins_host_and_path() {
        let sender = RequestSender::new(SharedConfig::new(ClientConfig::new("https://bigpay.dev/")));
        assert_eq!(
            sender.url("/pay/initialize"),
            "https://bigpay.dev/pay/initialize"
        );
    }

    #[test]
    fn test_url_follows_host_changes() {
        let config = SharedConfig::new(ClientConfig::new("https://bigpay.dev"));
        let sender = RequestSender::new(config.clone());

        config.set_host("https://google.com");

        assert_eq!(sender.url("/x"), "https://google.com/x");
    }
}

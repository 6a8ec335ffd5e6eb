//! Razorpay order-creation client.
//!
//! Implements the `PaymentGateway` port against the Razorpay REST API.
//! Requests authenticate with HTTP basic auth (key id / key secret) and
//! carry a bounded timeout so a slow processor cannot pin server resources.
//!
//! # Security
//!
//! - Key secret held as `secrecy::SecretString`, exposed only for the auth
//!   header
//! - Processor error bodies are logged, never relayed to clients

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::ports::{CreateOrder, GatewayError, GatewayOrder, PaymentGateway};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret.
    key_secret: SecretString,

    /// Base URL for the Razorpay API.
    api_base_url: String,

    /// Outbound request timeout.
    request_timeout: Duration,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl From<&PaymentConfig> for RazorpayConfig {
    fn from(config: &PaymentConfig) -> Self {
        Self::new(
            config.razorpay_key_id.clone(),
            config.razorpay_key_secret.clone(),
        )
        .with_base_url(config.api_base_url.clone())
        .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway client with the given configuration.
    pub fn new(config: RazorpayConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Pull a human-readable description out of a Razorpay error body.
    fn error_description(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/description")
                    .and_then(|d| d.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "order creation rejected".to_string())
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: CreateOrder) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);
        let body = serde_json::json!({
            "amount": request.amount_minor,
            "currency": request.currency,
            "receipt": request.receipt,
        });

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "gateway rejected order creation");
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: Self::error_description(&text),
            });
        }

        response
            .json::<GatewayOrder>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_gateway(base_url: &str) -> RazorpayGateway {
        let config = RazorpayConfig::new("rzp_test_key", "test_secret")
            .with_base_url(base_url.to_string())
            .with_timeout(Duration::from_secs(2));
        RazorpayGateway::new(config).unwrap()
    }

    fn test_request() -> CreateOrder {
        CreateOrder {
            amount_minor: 50000,
            currency: "INR".to_string(),
            receipt: "receipt_order_1_0".to_string(),
        }
    }

    #[tokio::test]
    async fn create_order_relays_gateway_object() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/orders")
                    .header_exists("authorization")
                    .json_body_partial(r#"{"amount": 50000, "currency": "INR"}"#);
                then.status(200).json_body(json!({
                    "id": "order_abc123",
                    "entity": "order",
                    "amount": 50000,
                    "currency": "INR",
                    "receipt": "receipt_order_1_0",
                    "status": "created"
                }));
            })
            .await;

        let gateway = test_gateway(&server.base_url());
        let order = gateway.create_order(test_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(order.id, "order_abc123");
        assert_eq!(
            order.extra.get("status").and_then(|v| v.as_str()),
            Some("created")
        );
        assert_eq!(
            order.extra.get("amount").and_then(|v| v.as_i64()),
            Some(50000)
        );
    }

    #[tokio::test]
    async fn create_order_maps_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/orders");
                then.status(400).json_body(json!({
                    "error": {
                        "code": "BAD_REQUEST_ERROR",
                        "description": "Currency is not supported"
                    }
                }));
            })
            .await;

        let gateway = test_gateway(&server.base_url());
        let err = gateway.create_order(test_request()).await.unwrap_err();

        match err {
            GatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Currency is not supported");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_order_maps_undecodable_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/orders");
                then.status(200).body("not json");
            })
            .await;

        let gateway = test_gateway(&server.base_url());
        let err = gateway.create_order(test_request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}

//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Razorpay orders API.
//! Only order creation goes through this client; the payment itself
//! happens in the provider's widget, and the signed confirmation callback
//! is verified in the domain layer.
//!
//! # Configuration
//!
//! - `key_id` - Razorpay API key id (rzp_live_... or rzp_test_...)
//! - `key_secret` - API key secret; also the HMAC secret for callbacks

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::ports::{GatewayError, PaymentGateway, ProviderOrder};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    key_id: String,
    key_secret: SecretString,
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay orders API client.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Order object as returned by `POST /v1/orders`.
///
/// Razorpay returns more fields (receipt, status, attempts); we only keep
/// what the checkout flow needs to correlate the callback.
#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    amount: u64,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayErrorBody,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
    code: String,
    description: String,
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
    ) -> Result<ProviderOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&json!({
                "amount": amount_minor,
                "currency": currency,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Razorpay order request failed");
                GatewayError::network(e.to_string())
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GatewayError::authentication(
                "Razorpay rejected the API credentials",
            ));
        }
        if !status.is_success() {
            let description = match response.json::<RazorpayErrorResponse>().await {
                Ok(body) => format!("{}: {}", body.error.code, body.error.description),
                Err(_) => format!("HTTP {}", status),
            };
            tracing::error!(status = %status, error = %description, "Razorpay returned an error");
            return Err(GatewayError::provider(description));
        }

        let order: RazorpayOrderResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::provider(format!("Malformed order response: {}", e)))?;

        Ok(ProviderOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_response_deserializes_from_provider_shape() {
        let body = r#"{
            "id": "order_IluGWxBm9U8zJ8",
            "entity": "order",
            "amount": 49900,
            "amount_paid": 0,
            "amount_due": 49900,
            "currency": "INR",
            "receipt": null,
            "status": "created",
            "attempts": 0,
            "created_at": 1642662092
        }"#;

        let order: RazorpayOrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(order.id, "order_IluGWxBm9U8zJ8");
        assert_eq!(order.amount, 49_900);
        assert_eq!(order.currency, "INR");
    }

    #[test]
    fn error_response_deserializes_from_provider_shape() {
        let body = r#"{
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "The amount must be atleast INR 1.00",
                "source": "business",
                "step": "payment_initiation",
                "reason": "input_validation_failed"
            }
        }"#;

        let err: RazorpayErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(err.error.code, "BAD_REQUEST_ERROR");
        assert!(err.error.description.contains("amount"));
    }

    #[test]
    fn base_url_override_is_applied() {
        let config = RazorpayConfig::new("rzp_test_key", "secret")
            .with_base_url("http://localhost:9090");
        assert_eq!(config.api_base_url, "http://localhost:9090");
    }
}

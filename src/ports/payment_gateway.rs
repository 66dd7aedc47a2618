//! Payment gateway port for external order creation.
//!
//! Defines the contract for the payment provider's orders API. The
//! provider mints an order for a given amount; the user then pays against
//! it out-of-band and the provider calls back with a signed confirmation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Currency for every order. The platform bills in a single fixed
/// currency; this is a contract constant, not configuration.
pub const ORDER_CURRENCY: &str = "INR";

/// Port for the payment provider's order-creation API.
///
/// No retry or backoff: a failed call is surfaced immediately and the
/// checkout attempt is abandoned.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Mints a provider-side order for `amount_minor` smallest currency
    /// units in `currency`.
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
    ) -> Result<ProviderOrder, GatewayError>;
}

/// A provider-side payment order.
///
/// Ephemeral: correlates the eventual callback, never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOrder {
    /// Opaque provider order id (e.g. `order_Nf3...`).
    pub id: String,
    /// Amount in smallest currency units.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
}

/// Errors from the payment gateway.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    pub message: String,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Network connectivity failure reaching the provider.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    /// The provider rejected our API credentials.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Authentication, message)
    }

    /// The provider returned an error response.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Provider, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        DomainError::new(ErrorCode::UpstreamPaymentError, err.message)
    }
}

/// Gateway error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    Network,
    Authentication,
    Provider,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Network => "network_error",
            GatewayErrorCode::Authentication => "authentication_error",
            GatewayErrorCode::Provider => "provider_error",
        };
        write!(f, "{}", s)
    }
}

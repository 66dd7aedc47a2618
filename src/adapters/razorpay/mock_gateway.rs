//! Mock payment gateway for testing.
//!
//! Configurable implementation of `PaymentGateway` for unit and
//! integration tests: error injection plus call tracking.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{GatewayError, PaymentGateway, ProviderOrder};

/// Mock payment gateway.
///
/// Returns sequentially numbered `order_test_N` ids and records every
/// request so tests can assert on the amount and currency sent upstream.
#[derive(Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Recorded (amount_minor, currency) per create_order call.
    requests: Vec<(u64, String)>,
    /// Error to return on the next call, if injected.
    next_error: Option<GatewayError>,
    /// Counter for minted order ids.
    order_seq: u64,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects an error for the next `create_order` call.
    pub fn fail_next(&self, error: GatewayError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Returns the recorded requests.
    pub fn requests(&self) -> Vec<(u64, String)> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
    ) -> Result<ProviderOrder, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        state.order_seq += 1;
        state.requests.push((amount_minor, currency.to_string()));
        Ok(ProviderOrder {
            id: format!("order_test_{}", state.order_seq),
            amount: amount_minor,
            currency: currency.to_string(),
        })
    }
}

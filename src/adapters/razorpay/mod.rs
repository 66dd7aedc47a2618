//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for the Razorpay orders API.
//!
//! # Security
//!
//! - API credentials are handled via `secrecy::SecretString`
//! - Callback signatures (HMAC-SHA256) are verified in the domain layer,
//!   not here; this adapter only creates orders

mod mock_gateway;
mod razorpay_adapter;

pub use mock_gateway::MockPaymentGateway;
pub use razorpay_adapter::{RazorpayConfig, RazorpayGateway};

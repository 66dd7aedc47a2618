//! Adapters - Concrete implementations of ports.
//!
//! - `http` - Inbound axum routers and handlers
//! - `razorpay` - Payment gateway client and its mock
//! - `postgres` - Durable sqlx stores
//! - `memory` - In-memory stores for tests and local development

pub mod http;
pub mod memory;
pub mod postgres;
pub mod razorpay;

//! Checkout orchestration handlers.
//!
//! Coordinates order creation, payment confirmation, and enrollment into
//! one consistent flow:
//!
//! 1. `create_order` mints a provider order for the course price
//! 2. the client pays out-of-band and submits the signed callback
//! 3. `confirm_payment` verifies the signature and grants enrollment
//!
//! `enroll_direct` is the unpaid path (free courses, admin grants) and
//! `list_enrolled` backs the student dashboard.

mod confirm_payment;
mod create_order;
mod enroll_direct;
mod list_enrolled;

pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};
pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use enroll_direct::{DirectEnrollCommand, DirectEnrollHandler};
pub use list_enrolled::{ListEnrolledHandler, ListEnrolledQuery};

//! Authorization policy for mutating course operations.
//!
//! Every mutating operation consults [`authorize`] with an explicit
//! [`CourseAction`] rather than matching on role strings at the call site.
//! The caller's identity arrives as explicit request context; there is no
//! ambient session lookup in this layer.

use super::{DomainError, ErrorCode, Role};

/// Mutating actions subject to the authorization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    /// Create a payment-provider order for a course.
    Checkout,
    /// Submit a signed payment confirmation.
    ConfirmPayment,
    /// Enroll without going through payment.
    EnrollWithoutPayment {
        /// Whether the target course has price zero.
        course_is_free: bool,
    },
}

/// Decides whether `role` may perform `action`.
///
/// Checkout and payment confirmation are open to every authenticated role.
/// Unpaid enrollment is restricted to free courses, except for admins who
/// may grant administrative enrollments into priced courses.
pub fn authorize(role: Role, action: CourseAction) -> Result<(), DomainError> {
    match action {
        CourseAction::Checkout | CourseAction::ConfirmPayment => Ok(()),
        CourseAction::EnrollWithoutPayment { course_is_free } => {
            if course_is_free || role.is_admin() {
                Ok(())
            } else {
                Err(DomainError::new(
                    ErrorCode::Forbidden,
                    "Enrollment in a priced course requires payment",
                )
                .with_detail("role", role.as_str()))
            }
        }
    }
}

//! Enrollment and checkout error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | CourseNotFound | 404 |
//! | VerificationFailed | 400 |
//! | AlreadyEnrolled | 400 |
//! | Forbidden | 403 |
//! | UpstreamPayment | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, UserId};

/// Errors from the checkout and enrollment flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// The referenced course does not exist.
    CourseNotFound(CourseId),

    /// The payment callback signature did not match.
    VerificationFailed,

    /// A grant for this (user, course) pair already exists.
    ///
    /// Only the direct enrollment path surfaces this; payment confirmation
    /// treats the duplicate as success.
    AlreadyEnrolled {
        user_id: UserId,
        course_id: CourseId,
    },

    /// The authorization policy rejected the operation.
    Forbidden { reason: String },

    /// The payment gateway call failed; the attempt was abandoned with no
    /// local state created.
    UpstreamPayment { reason: String },

    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl EnrollmentError {
    pub fn course_not_found(course_id: CourseId) -> Self {
        EnrollmentError::CourseNotFound(course_id)
    }

    pub fn verification_failed() -> Self {
        EnrollmentError::VerificationFailed
    }

    pub fn already_enrolled(user_id: UserId, course_id: CourseId) -> Self {
        EnrollmentError::AlreadyEnrolled { user_id, course_id }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        EnrollmentError::Forbidden {
            reason: reason.into(),
        }
    }

    pub fn upstream_payment(reason: impl Into<String>) -> Self {
        EnrollmentError::UpstreamPayment {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        EnrollmentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EnrollmentError::CourseNotFound(_) => ErrorCode::CourseNotFound,
            EnrollmentError::VerificationFailed => ErrorCode::PaymentVerificationFailed,
            EnrollmentError::AlreadyEnrolled { .. } => ErrorCode::AlreadyEnrolled,
            EnrollmentError::Forbidden { .. } => ErrorCode::Forbidden,
            EnrollmentError::UpstreamPayment { .. } => ErrorCode::UpstreamPaymentError,
            EnrollmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            EnrollmentError::CourseNotFound(id) => format!("Course not found: {}", id),
            EnrollmentError::VerificationFailed => "Payment verification failed".to_string(),
            EnrollmentError::AlreadyEnrolled { course_id, .. } => {
                format!("Already enrolled in course {}", course_id)
            }
            EnrollmentError::Forbidden { reason } => reason.clone(),
            EnrollmentError::UpstreamPayment { reason } => {
                format!("Payment provider error: {}", reason)
            }
            EnrollmentError::Infrastructure(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for EnrollmentError {}

impl From<DomainError> for EnrollmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => EnrollmentError::Forbidden {
                reason: err.message,
            },
            _ => EnrollmentError::Infrastructure(err.message),
        }
    }
}

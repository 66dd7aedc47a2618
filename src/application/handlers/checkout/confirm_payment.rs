//! ConfirmPaymentHandler - verifies the provider callback and grants
//! enrollment.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::enrollment::{signature, EnrollmentError, GrantOutcome};
use crate::domain::foundation::{authorize, CourseAction, CourseId, Role, UserId};
use crate::ports::UserStore;

/// Command carrying the provider's signed callback fields.
///
/// `course_id` is asserted by the client, not bound into the provider
/// signature; see DESIGN.md for the residual trust-boundary risk.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub course_id: CourseId,
    pub user_id: UserId,
    pub role: Role,
}

/// Result of a successful confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentResult {
    pub outcome: GrantOutcome,
}

/// Handler for payment confirmation callbacks.
///
/// Safe to retry with the same payload: the grant is idempotent, and a
/// duplicate confirmation reports success just like the first.
pub struct ConfirmPaymentHandler {
    users: Arc<dyn UserStore>,
    callback_secret: SecretString,
}

impl ConfirmPaymentHandler {
    pub fn new(users: Arc<dyn UserStore>, callback_secret: SecretString) -> Self {
        Self {
            users,
            callback_secret,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPaymentCommand,
    ) -> Result<ConfirmPaymentResult, EnrollmentError> {
        authorize(cmd.role, CourseAction::ConfirmPayment)?;

        // 1. Verify the callback signature. On mismatch nothing is mutated.
        let authentic = signature::verify(
            &cmd.order_id,
            &cmd.payment_id,
            &cmd.signature,
            self.callback_secret.expose_secret(),
        );
        if !authentic {
            tracing::warn!(
                order_id = %cmd.order_id,
                user_id = %cmd.user_id,
                course_id = %cmd.course_id,
                "Payment callback signature mismatch"
            );
            return Err(EnrollmentError::verification_failed());
        }

        // 2. Grant enrollment. The store's conditional append makes this
        //    idempotent; a duplicate submission is still a success.
        let outcome = self.users.enroll(&cmd.user_id, &cmd.course_id).await?;

        tracing::info!(
            order_id = %cmd.order_id,
            payment_id = %cmd.payment_id,
            user_id = %cmd.user_id,
            course_id = %cmd.course_id,
            newly_enrolled = outcome.is_new(),
            "Payment confirmed, enrollment granted"
        );

        Ok(ConfirmPaymentResult { outcome })
    }
}

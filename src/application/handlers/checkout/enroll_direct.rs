//! DirectEnrollHandler - enrollment without payment.
//!
//! Covers two cases with one policy: anyone may enroll in a free course,
//! and an admin may grant an administrative enrollment into a priced one.
//! Unlike payment confirmation, a duplicate request here is rejected.

use std::sync::Arc;

use crate::domain::enrollment::EnrollmentError;
use crate::domain::foundation::{authorize, CourseAction, CourseId, Role, UserId};
use crate::ports::{CourseStore, UserStore};

/// Command to enroll without a payment.
#[derive(Debug, Clone)]
pub struct DirectEnrollCommand {
    pub course_id: CourseId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for unpaid enrollment.
pub struct DirectEnrollHandler {
    courses: Arc<dyn CourseStore>,
    users: Arc<dyn UserStore>,
}

impl DirectEnrollHandler {
    pub fn new(courses: Arc<dyn CourseStore>, users: Arc<dyn UserStore>) -> Self {
        Self { courses, users }
    }

    pub async fn handle(&self, cmd: DirectEnrollCommand) -> Result<(), EnrollmentError> {
        let course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or(EnrollmentError::CourseNotFound(cmd.course_id))?;

        authorize(
            cmd.role,
            CourseAction::EnrollWithoutPayment {
                course_is_free: course.is_free(),
            },
        )?;

        let outcome = self.users.enroll(&cmd.user_id, &cmd.course_id).await?;
        if !outcome.is_new() {
            // Direct enrollment is not a retried callback; a duplicate is a
            // client error, not an idempotent success.
            return Err(EnrollmentError::already_enrolled(cmd.user_id, cmd.course_id));
        }

        tracing::info!(
            user_id = %cmd.user_id,
            course_id = %cmd.course_id,
            role = %cmd.role,
            "Direct enrollment granted"
        );

        Ok(())
    }
}

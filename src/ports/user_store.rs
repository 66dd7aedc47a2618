//! User store port, including the enrollment ledger.

use async_trait::async_trait;

use crate::domain::enrollment::GrantOutcome;
use crate::domain::foundation::{CourseId, DomainError, UserId};
use crate::domain::user::User;

/// Port for user lookups and enrollment grants.
///
/// # Concurrency contract
///
/// `enroll` MUST be implemented as a single atomic conditional append at
/// the storage layer (e.g. an insert that ignores an existing key), never
/// as a read followed by a separate write. Two racing calls for the same
/// never-enrolled (user, course) pair must leave exactly one grant and
/// both must succeed, one reporting `NewlyEnrolled` and the other
/// `AlreadyEnrolled`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Grants enrollment for (user, course), idempotently.
    ///
    /// Returns `UserNotFound` as an error if the user does not exist.
    async fn enroll(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<GrantOutcome, DomainError>;

    /// Returns true if the user holds a grant for the course.
    async fn is_enrolled(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<bool, DomainError>;

    /// Lists the course ids the user is enrolled in.
    async fn enrolled_courses(&self, user_id: &UserId) -> Result<Vec<CourseId>, DomainError>;
}

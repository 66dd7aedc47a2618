//! Access gate for protected course content.

use std::sync::Arc;

use crate::domain::course::Course;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserStore;

/// The sole authority consulted before serving lecture videos or notes.
///
/// Stateless predicate, evaluated per request:
/// free course => open to everyone, including anonymous callers;
/// priced course => open only to enrolled users.
///
/// Course metadata (title, description, thumbnail, lecture titles) is not
/// gated; catalog browsing stays anonymous.
pub struct AccessGate {
    users: Arc<dyn UserStore>,
}

impl AccessGate {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Decides whether protected content of `course` may be served to
    /// `user_id` (`None` for anonymous callers).
    pub async fn can_access(
        &self,
        user_id: Option<&UserId>,
        course: &Course,
    ) -> Result<bool, DomainError> {
        if course.is_free() {
            return Ok(true);
        }
        match user_id {
            None => Ok(false),
            Some(id) => self.users.is_enrolled(id, &course.id).await,
        }
    }
}

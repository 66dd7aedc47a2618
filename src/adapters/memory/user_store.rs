//! In-Memory User Store Adapter
//!
//! Stores users and enrollment grants in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::enrollment::GrantOutcome;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserStore;

/// In-memory user store with enrollment ledger semantics.
///
/// The grant is a conditional insert into the user's enrollment set,
/// performed entirely under one write lock: the check and the append are
/// a single critical section, so racing duplicate grants cannot both
/// insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn enroll(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<GrantOutcome, DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(user_id).ok_or_else(|| {
            DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", user_id))
        })?;

        Ok(if user.enrolled_courses.insert(*course_id) {
            GrantOutcome::NewlyEnrolled
        } else {
            GrantOutcome::AlreadyEnrolled
        })
    }

    async fn is_enrolled(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .map(|u| u.is_enrolled(course_id))
            .unwrap_or(false))
    }

    async fn enrolled_courses(&self, user_id: &UserId) -> Result<Vec<CourseId>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .map(|u| u.enrolled_courses.iter().copied().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;

    fn student(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), "Test Student", Role::Student)
    }

    #[tokio::test]
    async fn enroll_is_idempotent() {
        let store = InMemoryUserStore::new();
        store.insert(student("u-1")).await;
        let user_id = UserId::new("u-1").unwrap();
        let course_id = CourseId::new();

        let first = store.enroll(&user_id, &course_id).await.unwrap();
        let second = store.enroll(&user_id, &course_id).await.unwrap();

        assert_eq!(first, GrantOutcome::NewlyEnrolled);
        assert_eq!(second, GrantOutcome::AlreadyEnrolled);
        assert_eq!(store.enrolled_courses(&user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn enroll_unknown_user_fails() {
        let store = InMemoryUserStore::new();
        let result = store
            .enroll(&UserId::new("ghost").unwrap(), &CourseId::new())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn concurrent_duplicate_grants_leave_one_entry() {
        let store = InMemoryUserStore::new();
        store.insert(student("u-1")).await;
        let user_id = UserId::new("u-1").unwrap();
        let course_id = CourseId::new();

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            let user_id = user_id.clone();
            tasks.push(tokio::spawn(async move {
                store.enroll(&user_id, &course_id).await.unwrap()
            }));
        }

        let mut fresh = 0;
        for task in tasks {
            if task.await.unwrap().is_new() {
                fresh += 1;
            }
        }

        // Exactly one racer created the grant; the rest saw it existing.
        assert_eq!(fresh, 1);
        assert_eq!(store.enrolled_courses(&user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn is_enrolled_false_for_unknown_user() {
        let store = InMemoryUserStore::new();
        let enrolled = store
            .is_enrolled(&UserId::new("ghost").unwrap(), &CourseId::new())
            .await
            .unwrap();
        assert!(!enrolled);
    }
}

//! ListEnrolledHandler - query for a user's purchased courses.

use std::sync::Arc;

use crate::domain::course::Course;
use crate::domain::enrollment::EnrollmentError;
use crate::domain::foundation::UserId;
use crate::ports::{CourseStore, UserStore};

/// Query for the courses a user is enrolled in.
#[derive(Debug, Clone)]
pub struct ListEnrolledQuery {
    pub user_id: UserId,
}

/// Handler for the student dashboard listing.
pub struct ListEnrolledHandler {
    courses: Arc<dyn CourseStore>,
    users: Arc<dyn UserStore>,
}

impl ListEnrolledHandler {
    pub fn new(courses: Arc<dyn CourseStore>, users: Arc<dyn UserStore>) -> Self {
        Self { courses, users }
    }

    pub async fn handle(&self, query: ListEnrolledQuery) -> Result<Vec<Course>, EnrollmentError> {
        let ids = self.users.enrolled_courses(&query.user_id).await?;
        let courses = self.courses.find_by_ids(&ids).await?;
        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Price;
    use crate::domain::enrollment::GrantOutcome;
    use crate::domain::foundation::{CourseId, DomainError, Role};
    use crate::domain::user::User;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockCourseStore {
        courses: Vec<Course>,
    }

    #[async_trait]
    impl CourseStore for MockCourseStore {
        async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
            Ok(self.courses.iter().find(|c| &c.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<Course>, DomainError> {
            Ok(self.courses.clone())
        }

        async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError> {
            Ok(self
                .courses
                .iter()
                .filter(|c| ids.contains(&c.id))
                .cloned()
                .collect())
        }
    }

    struct MockUserStore {
        grants: Mutex<HashSet<(UserId, CourseId)>>,
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(Some(User::new(id.clone(), "Test", Role::Student)))
        }

        async fn enroll(
            &self,
            user_id: &UserId,
            course_id: &CourseId,
        ) -> Result<GrantOutcome, DomainError> {
            self.grants
                .lock()
                .unwrap()
                .insert((user_id.clone(), *course_id));
            Ok(GrantOutcome::NewlyEnrolled)
        }

        async fn is_enrolled(
            &self,
            user_id: &UserId,
            course_id: &CourseId,
        ) -> Result<bool, DomainError> {
            Ok(self
                .grants
                .lock()
                .unwrap()
                .contains(&(user_id.clone(), *course_id)))
        }

        async fn enrolled_courses(&self, user_id: &UserId) -> Result<Vec<CourseId>, DomainError> {
            Ok(self
                .grants
                .lock()
                .unwrap()
                .iter()
                .filter(|(u, _)| u == user_id)
                .map(|(_, c)| *c)
                .collect())
        }
    }

    fn course(title: &str) -> Course {
        Course::new(
            CourseId::new(),
            title,
            "",
            "programming",
            Price::new(499),
            UserId::new("teacher-1").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_only_enrolled_courses() {
        let purchased = course("Purchased");
        let other = course("Not purchased");
        let purchased_id = purchased.id;

        let user_id = UserId::new("student-1").unwrap();
        let mut grants = HashSet::new();
        grants.insert((user_id.clone(), purchased_id));

        let handler = ListEnrolledHandler::new(
            Arc::new(MockCourseStore {
                courses: vec![purchased, other],
            }),
            Arc::new(MockUserStore {
                grants: Mutex::new(grants),
            }),
        );

        let result = handler.handle(ListEnrolledQuery { user_id }).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, purchased_id);
    }

    #[tokio::test]
    async fn empty_for_user_with_no_grants() {
        let handler = ListEnrolledHandler::new(
            Arc::new(MockCourseStore {
                courses: vec![course("Anything")],
            }),
            Arc::new(MockUserStore {
                grants: Mutex::new(HashSet::new()),
            }),
        );

        let result = handler
            .handle(ListEnrolledQuery {
                user_id: UserId::new("student-1").unwrap(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}

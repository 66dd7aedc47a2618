//! Course store port.

use async_trait::async_trait;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError};

/// Port for course catalog reads.
///
/// A missing course is `Ok(None)`, not an error; callers decide whether
/// absence is a 404.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Looks up a single course by id.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Lists every published course, newest first.
    async fn list(&self) -> Result<Vec<Course>, DomainError>;

    /// Fetches the courses for a set of ids, skipping ids that no longer
    /// resolve (a granted course may have been deleted by an admin).
    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError>;
}

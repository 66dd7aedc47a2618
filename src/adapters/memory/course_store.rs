//! In-Memory Course Store Adapter
//!
//! Stores the course catalog in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError};
use crate::ports::CourseStore;

/// In-memory course catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseStore {
    courses: Arc<RwLock<HashMap<CourseId, Course>>>,
}

impl InMemoryCourseStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with a course
    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id, course);
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.courses.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        let mut courses: Vec<Course> = self.courses.read().await.values().cloned().collect();
        // Newest first, matching the catalog contract.
        courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(courses)
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError> {
        let courses = self.courses.read().await;
        Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }
}

//! User aggregate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, Role, UserId};

/// A platform user with their set of enrollment grants.
///
/// `enrolled_courses` is a set: membership matters, order does not, and a
/// course id can appear at most once. The set only ever grows in this
/// system (there is no refund or unenroll flow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub enrolled_courses: HashSet<CourseId>,
}

impl User {
    /// Creates a user with no enrollments.
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            enrolled_courses: HashSet::new(),
        }
    }

    /// Returns true if the user holds a grant for `course_id`.
    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }
}

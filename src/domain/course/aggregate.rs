//! Course aggregate: lectures, live classes, and catalog metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, Timestamp, UserId, ValidationError};

use super::Price;

/// A published course: catalog metadata plus its ordered content.
///
/// Owned by exactly one instructor. Ownership is enforced at mutation time,
/// not by the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub thumbnail: Option<String>,
    pub instructor: UserId,
    /// Ordered sequence of lectures; order is the presentation order.
    pub lectures: Vec<Lecture>,
    /// Ordered schedule of live sessions.
    pub live_classes: Vec<LiveClass>,
    pub created_at: Timestamp,
}

impl Course {
    /// Creates a new course with empty content.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        instructor: UserId,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            category: category.into(),
            price,
            thumbnail: None,
            instructor,
            lectures: Vec::new(),
            live_classes: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Returns true when the course is free and the access gate admits
    /// everyone.
    pub fn is_free(&self) -> bool {
        self.price.is_free()
    }

    /// Returns true if `user_id` owns this course.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.instructor == user_id
    }
}

/// A single video lecture within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub title: String,
    /// External video reference (hosting platform id), never a raw URL.
    pub video_id: String,
    /// Free-preview flag: the video is viewable without enrollment.
    #[serde(default)]
    pub is_free: bool,
    /// Optional notes: a resource link or free-form text, distinguished at
    /// render time by prefix, not stored as a typed field.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Lecture {
    pub fn new(title: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_id: video_id.into(),
            is_free: false,
            notes: None,
        }
    }

    pub fn with_free_preview(mut self) -> Self {
        self.is_free = true;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Classifies the notes for rendering: link vs free text.
    pub fn notes_kind(&self) -> Option<NotesKind> {
        self.notes.as_deref().map(|notes| {
            if notes.starts_with("http://") || notes.starts_with("https://") {
                NotesKind::Link
            } else {
                NotesKind::Text
            }
        })
    }
}

/// Render-time classification of lecture notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesKind {
    /// The notes are a downloadable resource URL.
    Link,
    /// The notes are free-form text.
    Text,
}

/// A scheduled live session attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveClass {
    pub topic: String,
    pub date: NaiveDate,
    /// Display time, kept as the instructor entered it (e.g. "18:30 IST").
    pub time: String,
    pub meeting_link: String,
}

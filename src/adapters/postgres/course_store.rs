//! PostgreSQL implementation of CourseStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::course::{Course, Lecture, LiveClass, Price};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::CourseStore;

/// PostgreSQL implementation of the CourseStore port.
///
/// Lectures and live classes are stored as JSONB documents on the course
/// row; they are always read and written with their course, never queried
/// independently.
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    /// Creates a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a course.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: String,
    category: String,
    price: i32,
    thumbnail: Option<String>,
    instructor: String,
    lectures: serde_json::Value,
    live_classes: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<CourseRow> for Course {
    type Error = DomainError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let price = u32::try_from(row.price).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Negative price in row: {}", row.price),
            )
        })?;

        let lectures: Vec<Lecture> = serde_json::from_value(row.lectures).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid lectures JSON: {}", e))
        })?;
        let live_classes: Vec<LiveClass> =
            serde_json::from_value(row.live_classes).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid live_classes JSON: {}", e),
                )
            })?;

        Ok(Course {
            id: CourseId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            category: row.category,
            price: Price::new(price),
            thumbnail: row.thumbnail,
            instructor: UserId::new(row.instructor).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid instructor: {}", e))
            })?,
            lectures,
            live_classes,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn storage_error(err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, err.to_string())
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, category, price, thumbnail,
                   instructor, lectures, live_classes, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Course::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, category, price, thumbnail,
                   instructor, lectures, live_classes, created_at
            FROM courses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, category, price, thumbnail,
                   instructor, lectures, live_classes, created_at
            FROM courses
            WHERE id = ANY($1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter().map(Course::try_from).collect()
    }
}

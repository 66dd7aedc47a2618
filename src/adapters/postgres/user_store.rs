//! PostgreSQL implementation of UserStore.
//!
//! Enrollment grants live in an `enrollments` table keyed by
//! (user_id, course_id). The grant itself is a single
//! `INSERT ... ON CONFLICT DO NOTHING`: the database makes the
//! check-and-append atomic, so racing duplicate confirmations cannot
//! produce two rows or a lost update.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::enrollment::GrantOutcome;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Role, UserId};
use crate::domain::user::User;
use crate::ports::UserStore;

/// Postgres foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL implementation of the UserStore port.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Creates a new store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid role value: {}", row.role),
            )
        })?;
        let id = UserId::new(row.id)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
        Ok(User::new(id, row.name, role))
    }
}

fn storage_error(err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, err.to_string())
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, role FROM users WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        let Some(row) = row else { return Ok(None) };
        let mut user = User::try_from(row)?;

        let enrolled: Vec<(Uuid,)> =
            sqlx::query_as("SELECT course_id FROM enrollments WHERE user_id = $1")
                .bind(id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(storage_error)?;
        user.enrolled_courses = enrolled
            .into_iter()
            .map(|(course_id,)| CourseId::from_uuid(course_id))
            .collect();

        Ok(Some(user))
    }

    async fn enroll(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<GrantOutcome, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (user_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, course_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_str())
        .bind(course_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                DomainError::new(
                    ErrorCode::UserNotFound,
                    format!("User not found: {}", user_id),
                )
            }
            _ => storage_error(e),
        })?;

        Ok(if result.rows_affected() == 1 {
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
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id.as_str())
        .bind(course_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.is_some())
    }

    async fn enrolled_courses(&self, user_id: &UserId) -> Result<Vec<CourseId>, DomainError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT course_id FROM enrollments WHERE user_id = $1 ORDER BY granted_at",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|(course_id,)| CourseId::from_uuid(course_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_conversion_parses_role() {
        let row = UserRow {
            id: "u-1".to_string(),
            name: "Asha".to_string(),
            role: "student".to_string(),
        };
        let user = User::try_from(row).unwrap();
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn user_row_conversion_rejects_unknown_role() {
        let row = UserRow {
            id: "u-1".to_string(),
            name: "Asha".to_string(),
            role: "superuser".to_string(),
        };
        assert!(User::try_from(row).is_err());
    }
}

//! PostgreSQL store adapters.
//!
//! Implements `CourseStore` and `UserStore` with sqlx connection pooling.
//! The enrollment grant uses the database's conflict handling as the
//! atomic conditional append required by the concurrency contract.

mod course_store;
mod user_store;

pub use course_store::PostgresCourseStore;
pub use user_store::PostgresUserStore;

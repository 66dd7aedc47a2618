//! Foundation types shared across the domain.
//!
//! - `ids` - Strongly-typed identifiers
//! - `errors` - Domain error types and codes
//! - `role` - Closed role set
//! - `authorization` - Policy for mutating operations
//! - `timestamp` - UTC point-in-time value object

mod authorization;
mod errors;
mod ids;
mod role;
mod timestamp;

pub use authorization::{authorize, CourseAction};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CourseId, UserId};
pub use role::Role;
pub use timestamp::Timestamp;

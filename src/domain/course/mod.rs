//! Course domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Course aggregate, Lecture, LiveClass
//! - `price` - Price value object and minor-unit conversion

mod aggregate;
mod price;

pub use aggregate::{Course, Lecture, LiveClass, NotesKind};
pub use price::Price;

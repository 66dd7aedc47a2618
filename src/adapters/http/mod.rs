//! Inbound HTTP adapters.

pub mod courses;

//! Courseloft - E-Learning Marketplace Backend
//!
//! Instructors publish courses of video lectures and scheduled live
//! classes; students browse the catalog, pay through an external payment
//! provider, and stream purchased content. Payment confirmation and the
//! content access gate are the core subsystems.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Domain types and pure logic for the Scout discovery platform.
//!
//! This crate has no I/O: it defines the shared error taxonomy, id and
//! timestamp aliases, role constants, the project moderation state machine,
//! and field-level validation used by both the db and api layers.

pub mod catalog;
pub mod engagement;
pub mod error;
pub mod moderation;
pub mod roles;
pub mod types;

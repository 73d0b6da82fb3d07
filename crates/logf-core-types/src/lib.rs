//! Core types shared across logf facilities
//!
//! This crate provides foundational types used by both configuration
//! resolution and message emission:
//!
//! - **Severity levels**: `Level` with name/numeric parsing
//! - **Correlation**: `CallId`, the short token linking enter/exit messages
//! - **Schema constants**: Canonical message prefixes and override keys

pub mod correlation;
pub mod level;
pub mod schema;

pub use correlation::CallId;
pub use level::{Level, ParseLevelError};

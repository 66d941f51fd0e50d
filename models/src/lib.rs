//! Shared view-models and REST contract for the buddy matching backend.
//!
//! This crate owns the JSON representation used by both `client` and `cli`.
//! It performs no I/O: callers execute the [`endpoints::Endpoint`] values it
//! builds with whatever HTTP stack their target supports.

pub mod display;
pub mod endpoints;
pub mod error;
pub mod types;
pub mod validation;

pub use error::ApiError;
pub use types::*;

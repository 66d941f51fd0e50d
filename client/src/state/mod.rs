//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui`, per-page view models) so
//! pages depend on small focused models. Everything here except `remote`
//! is plain data with pure functions, testable without a browser.

pub mod catalog;
pub mod directory;
pub mod matches;
pub mod remote;
pub mod session;
pub mod ui;

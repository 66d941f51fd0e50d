//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and view state and delegates rendering details
//! to `components`. Guarded pages wrap their content in `RequireSession` or
//! `RequireHr`.

pub mod analytics;
pub mod buddy_detail;
pub mod catalog;
pub mod dashboard;
pub mod employee_detail;
pub mod employees;
pub mod gamification;
pub mod login;
pub mod match_detail;
pub mod matches;
pub mod matching;
pub mod messages;

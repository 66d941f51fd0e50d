//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, badges, forms and page chrome. Pages own the
//! fetches; components receive loaded values as props and report user
//! actions back through callbacks.

pub mod achievements;
pub mod buddy_card;
pub mod buddy_profile_form;
pub mod compatibility_breakdown;
pub mod employee_card;
pub mod feedback;
pub mod level_progress;
pub mod match_actions;
pub mod match_list;
pub mod match_status_badge;
pub mod nav_bar;
pub mod role_guard;
pub mod stat_card;
pub mod status;
pub mod tag_list;

//! Required-field checks run before a request is sent.
//!
//! These mirror only the obvious form rules. The backend stays the authority
//! on everything else (uniqueness, capacity, who may accept a match).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::types::{
    AwardPointsRequest, BuddyProfileRequest, CreateEmployeeRequest, CreateMatchRequest, FeedbackRequest,
    SendMessageRequest,
};

pub const MAX_COMMENT_CHARS: usize = 2000;
pub const MAX_ACTIVE_BUDDIES_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// A single failed rule, keyed by the JSON field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule a payload failed, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn require(&mut self, field: &'static str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
        }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client-side checks for an outgoing payload.
pub trait Validate {
    /// # Errors
    ///
    /// Returns every violated rule.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for CreateEmployeeRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("firstName", &self.first_name, "First name");
        errors.require("lastName", &self.last_name, "Last name");
        errors.require("email", &self.email, "Email");
        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.push("email", "Email must look like name@example.com");
        }
        errors.require("title", &self.title, "Title");
        errors.require("unit", &self.unit, "Unit");
        errors.require("location", &self.location, "Location");
        errors.require("startDate", &self.start_date, "Start date");
        errors.into_result()
    }
}

impl Validate for BuddyProfileRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("bio", &self.bio, "Bio");
        if !MAX_ACTIVE_BUDDIES_RANGE.contains(&self.max_active_buddies) {
            errors.push(
                "maxActiveBuddies",
                format!(
                    "Max active buddies must be between {} and {}",
                    MAX_ACTIVE_BUDDIES_RANGE.start(),
                    MAX_ACTIVE_BUDDIES_RANGE.end()
                ),
            );
        }
        errors.into_result()
    }
}

impl Validate for CreateMatchRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.buddy_id == self.newcomer_id {
            errors.push("buddyId", "A newcomer cannot be their own buddy");
        }
        errors.into_result()
    }
}

impl Validate for FeedbackRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if !(1..=5).contains(&self.rating) {
            errors.push("rating", "Rating must be between 1 and 5");
        }
        if let Some(comment) = &self.comment {
            if comment.chars().count() > MAX_COMMENT_CHARS {
                errors.push(
                    "comment",
                    format!("Comment must be at most {MAX_COMMENT_CHARS} characters"),
                );
            }
        }
        errors.into_result()
    }
}

impl Validate for AwardPointsRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.points == 0 {
            errors.push("points", "Points must be greater than zero");
        }
        errors.require("reason", &self.reason, "Reason");
        errors.into_result()
    }
}

impl Validate for SendMessageRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("content", &self.content, "Message");
        errors.into_result()
    }
}

fn looks_like_email(raw: &str) -> bool {
    raw.trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
}

/// Split a comma/semicolon separated form field into trimmed, de-duplicated
/// tags (case-insensitive, first spelling wins).
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in raw.split([',', ';']).map(str::trim).filter(|t| !t.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            out.push(tag.to_owned());
        }
    }
    out
}

/// Inverse of [`split_tags`] for pre-filling inputs.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// `None` for blank input, trimmed text otherwise.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

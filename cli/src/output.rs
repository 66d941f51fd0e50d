//! Result printing: pretty JSON by default, aligned text tables on request.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use clap::ValueEnum;
use models::display::{format_rating, format_score};
use models::{
    BuddyMatch, BuddyMatchRecommendation, BuddyProfile, ConversationSummary, Employee, Feedback, LeaderboardEntry,
    Message, TrendPoint, date_part,
};
use serde::Serialize;

use crate::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// A list row for `--output text`.
pub trait TextRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Print a single value. Text mode has no table for single values, so it
/// prints JSON as well.
pub fn print_value<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_list<T: Serialize + TextRow>(format: OutputFormat, rows: &[T]) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_value(&rows),
        OutputFormat::Text => {
            print!("{}", render_table(rows));
            Ok(())
        }
    }
}

/// Column-aligned table with a header line; `(none)` for an empty list.
pub fn render_table<T: TextRow>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "(none)\n".to_owned();
    }
    let body: Vec<Vec<String>> = rows.iter().map(TextRow::cells).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = render_line(T::HEADERS.iter().copied(), &widths);
    for row in &body {
        out.push_str(&render_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}

impl TextRow for Employee {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "TITLE", "UNIT", "LOCATION", "ROLES"];

    fn cells(&self) -> Vec<String> {
        let roles = [
            self.is_hr().then_some("hr"),
            self.is_buddy_guide.then_some("buddy"),
            self.is_newcomer.then_some("newcomer"),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(",");
        vec![
            self.id.to_string(),
            self.full_name(),
            self.title.clone(),
            self.unit.clone(),
            self.location.clone(),
            or_dash(Some(roles.as_str())),
        ]
    }
}

impl TextRow for BuddyProfile {
    const HEADERS: &'static [&'static str] = &["ID", "EMPLOYEE", "NAME", "AVAILABILITY", "CAPACITY"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.to_string(),
            self.display_name(),
            self.availability.label().to_owned(),
            models::display::capacity_label(self),
        ]
    }
}

impl TextRow for BuddyMatch {
    const HEADERS: &'static [&'static str] = &["ID", "BUDDY", "NEWCOMER", "STATUS", "SCORE", "CREATED"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.buddy_name(),
            self.newcomer_name(),
            self.status.label().to_owned(),
            format_score(self.compatibility_score),
            or_dash(self.created_at.as_deref().map(date_part)),
        ]
    }
}

impl TextRow for BuddyMatchRecommendation {
    const HEADERS: &'static [&'static str] = &["BUDDY", "NAME", "SCORE", "SHARED TECH", "SHARED INTERESTS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.buddy_id.to_string(),
            self.display_name(),
            format_score(self.compatibility_score),
            or_dash(Some(self.matching_tech_stack.join(", ").as_str())),
            or_dash(Some(self.matching_interests.join(", ").as_str())),
        ]
    }
}

impl TextRow for LeaderboardEntry {
    const HEADERS: &'static [&'static str] = &["RANK", "BUDDY", "NAME", "LEVEL", "POINTS", "STREAK", "COMPLETED"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.buddy_id.to_string(),
            self.buddy_name.clone(),
            self.level.label().to_owned(),
            self.total_points.to_string(),
            self.current_streak.to_string(),
            self.completed_matches.to_string(),
        ]
    }
}

impl TextRow for Feedback {
    const HEADERS: &'static [&'static str] = &["ID", "MATCH", "FROM", "TYPE", "RATING", "COMMENT"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.match_id.to_string(),
            self.submitted_by_name
                .clone()
                .unwrap_or_else(|| self.submitted_by_id.to_string()),
            self.feedback_type.label().to_owned(),
            self.rating.to_string(),
            or_dash(self.comment.as_deref()),
        ]
    }
}

impl TextRow for TrendPoint {
    const HEADERS: &'static [&'static str] = &["PERIOD", "CREATED", "COMPLETED", "AVG SCORE", "AVG RATING"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.period.clone(),
            self.matches_created.to_string(),
            self.matches_completed.to_string(),
            format_score(self.average_compatibility_score),
            format_rating(self.average_rating),
        ]
    }
}

impl TextRow for ConversationSummary {
    const HEADERS: &'static [&'static str] = &["MATCH", "WITH", "UNREAD", "LAST MESSAGE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.match_id.to_string(),
            self.other_participant_name.clone(),
            self.unread_count.to_string(),
            or_dash(self.last_message.as_deref()),
        ]
    }
}

impl TextRow for Message {
    const HEADERS: &'static [&'static str] = &["ID", "FROM", "SENT", "READ", "CONTENT"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.sender_name.clone().unwrap_or_else(|| self.sender_id.to_string()),
            or_dash(self.sent_at.as_deref().map(date_part)),
            if self.is_read { "yes" } else { "no" }.to_owned(),
            self.content.clone(),
        ]
    }
}

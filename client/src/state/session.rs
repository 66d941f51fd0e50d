//! Demo-mode session: which employee the browser is acting as.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication. The login page lists employees and the chosen
//! one is stored in a context-provided `RwSignal<SessionState>`. Route guards,
//! the navigation bar and role-dependent actions all read it. Nothing is
//! persisted, so a reload returns to `/login`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use models::{BuddyMatch, Employee, FeedbackType, MatchStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<Employee>,
}

impl SessionState {
    pub fn sign_in(&mut self, employee: Employee) {
        self.user = Some(employee);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_hr(&self) -> bool {
        self.user.as_ref().is_some_and(Employee::is_hr)
    }
}

/// A top-level navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub hr_only: bool,
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { href: "/", label: "Dashboard", hr_only: false },
    NavItem { href: "/employees", label: "Employees", hr_only: false },
    NavItem { href: "/buddies", label: "Buddies", hr_only: false },
    NavItem { href: "/matching", label: "Matching", hr_only: true },
    NavItem { href: "/matches", label: "Matches", hr_only: false },
    NavItem { href: "/gamification", label: "Leaderboard", hr_only: false },
    NavItem { href: "/analytics", label: "Analytics", hr_only: true },
    NavItem { href: "/messages", label: "Messages", hr_only: false },
    NavItem { href: "/login", label: "Switch user", hr_only: false },
];

/// Links visible to `user`. Nothing but the switcher when signed out.
pub fn nav_items(user: Option<&Employee>) -> Vec<NavItem> {
    let Some(user) = user else {
        return NAV_ITEMS.iter().copied().filter(|i| i.href == "/login").collect();
    };
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| !item.hr_only || user.is_hr())
        .collect()
}

/// Whether `href` is the active link for `path`. `/` only matches exactly.
pub fn is_active_link(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Accept/reject is offered to the match's buddy and to HR while pending.
pub fn can_respond(user: &Employee, m: &BuddyMatch) -> bool {
    m.status.allows_response() && (user.id == m.buddy_id || user.is_hr())
}

/// A buddy guide edits their own profile; HR edits anyone's.
pub fn can_manage_profile(user: &Employee, employee: &Employee) -> bool {
    employee.is_buddy_guide && (user.id == employee.id || user.is_hr())
}

/// Feedback direction for a participant, `None` for anyone else.
pub fn feedback_type_for(user: &Employee, m: &BuddyMatch) -> Option<FeedbackType> {
    if user.id == m.newcomer_id {
        Some(FeedbackType::NewcomerToBuddy)
    } else if user.id == m.buddy_id {
        Some(FeedbackType::BuddyToNewcomer)
    } else {
        None
    }
}

/// Participants rate each other once the match is underway or finished.
pub fn can_leave_feedback(user: &Employee, m: &BuddyMatch) -> bool {
    matches!(m.status, MatchStatus::Active | MatchStatus::Completed) && feedback_type_for(user, m).is_some()
}

/// HR can see every match; everyone else only the ones they are part of.
pub fn can_view_match(user: &Employee, m: &BuddyMatch) -> bool {
    user.is_hr() || m.involves(user.id)
}

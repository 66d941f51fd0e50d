//! Employee directory filtering for the profile browsing page.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use models::Employee;

use crate::util::query::{matches_all_terms, search_terms};

/// Which slice of the directory to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectoryScope {
    #[default]
    All,
    BuddyGuides,
    Newcomers,
}

impl DirectoryScope {
    pub const ALL: [Self; 3] = [Self::All, Self::BuddyGuides, Self::Newcomers];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Everyone",
            Self::BuddyGuides => "Buddy guides",
            Self::Newcomers => "Newcomers",
        }
    }

    fn includes(self, employee: &Employee) -> bool {
        match self {
            Self::All => true,
            Self::BuddyGuides => employee.is_buddy_guide,
            Self::Newcomers => employee.is_newcomer,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    /// Matches name, unit, team, title and location.
    pub query: String,
    pub scope: DirectoryScope,
}

impl DirectoryFilter {
    /// Matching employees sorted by last then first name.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let terms = search_terms(&self.query);
        let mut out: Vec<Employee> = employees
            .iter()
            .filter(|e| self.scope.includes(e))
            .filter(|e| {
                matches_all_terms(
                    &terms,
                    [
                        e.first_name.as_str(),
                        e.last_name.as_str(),
                        e.unit.as_str(),
                        e.team.as_deref().unwrap_or_default(),
                        e.title.as_str(),
                        e.location.as_str(),
                    ],
                )
            })
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.last_name.to_lowercase(), e.first_name.to_lowercase()));
        out
    }
}

//! Lead qualification: which of name, location and project type the
//! visitor has already shared.
//!
//! Recomputed from the whole transcript on every turn; nothing is carried
//! between requests.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{
    contains_any, COMMON_FIRST_NAMES, DOMAIN, LOCATIONS, NAME_INTRODUCTIONS, OFF_TOPIC,
    PROJECT_TYPES,
};

/// "my name is X", "i'm X", ... with X captured.
static NAME_INTRODUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = NAME_INTRODUCTIONS.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!(r"\b(?:{}) (\w+)", alternatives.join("|")))
        .expect("valid name introduction regex")
});

/// Any common first name as a whole word.
static COMMON_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", COMMON_FIRST_NAMES.join("|")))
        .expect("valid common name regex")
});

/// Facts gathered about the visitor so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Qualification {
    pub has_name: bool,
    pub has_location: bool,
    pub has_project_type: bool,
}

impl Qualification {
    /// Detect qualification facts in the lower-cased conversation history.
    pub fn from_history(history: &str) -> Self {
        Self {
            has_name: mentions_name(history),
            has_location: mentions_location(history),
            has_project_type: mentions_project_type(history),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.has_name && self.has_location && self.has_project_type
    }
}

/// `true` if the text introduces a name or contains a common first name.
///
/// This is a heuristic: "this is great" reads as an introduction and a
/// street called "Mark Street" reads as a name.
pub fn mentions_name(text: &str) -> bool {
    NAME_INTRODUCTION_RE.is_match(text) || COMMON_NAME_RE.is_match(text)
}

pub fn mentions_location(text: &str) -> bool {
    contains_any(text, LOCATIONS)
}

pub fn mentions_project_type(text: &str) -> bool {
    contains_any(text, PROJECT_TYPES)
}

/// Off-topic means no pool-related keyword at all and at least one
/// unrelated-subject keyword.
pub fn is_off_topic(text: &str) -> bool {
    !contains_any(text, DOMAIN) && contains_any(text, OFF_TOPIC)
}

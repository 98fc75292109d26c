//! Lead-quality analysis.
//!
//! There is no scoring model behind this yet; every conversation receives
//! the same placeholder assessment so the front-end contract is stable.

use serde::Serialize;

/// Assessment of a chat conversation as a sales lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadAnalysis {
    /// Lead quality on a 1-10 scale.
    pub score: u8,
    pub interest_level: &'static str,
    pub project_type: &'static str,
    pub urgency: &'static str,
    pub budget_indication: &'static str,
}

impl LeadAnalysis {
    /// The fixed assessment returned for every conversation.
    pub fn placeholder() -> Self {
        Self {
            score: 7,
            interest_level: "medium",
            project_type: "pool_construction",
            urgency: "medium",
            budget_indication: "unknown",
        }
    }
}

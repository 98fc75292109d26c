//! Keyword tables used by the sales chat classifier.
//!
//! All entries are lower-case; callers lower-case the text they match.

// ---------------------------------------------------------------------------
// Topic guard
// ---------------------------------------------------------------------------

/// Any of these anywhere in the conversation keeps it on-topic.
pub const DOMAIN: &[&str] = &[
    "pool", "swim", "water", "spa", "renovation", "construction", "maintenance",
    "cleaning", "chemical", "pump", "filter", "concrete", "infinity", "edge",
    "waterfall", "fountain", "landscaping", "backyard", "outdoor", "deck",
    "primo", "quote", "consultation", "perth", "build", "design", "install",
];

/// Subjects the assistant declines to discuss.
pub const OFF_TOPIC: &[&str] = &[
    "weather", "politics", "news", "sports", "food", "restaurant", "movie",
    "music", "book", "travel", "job", "career", "dating", "relationship",
    "health", "medical", "doctor", "school", "education", "car", "finance",
    "insurance", "real estate", "mortgage", "investment",
];

// ---------------------------------------------------------------------------
// Lead qualification
// ---------------------------------------------------------------------------

/// Phrases that introduce a name; the captured word is the name.
pub const NAME_INTRODUCTIONS: &[&str] = &[
    "my name is",
    "i'm",
    "im",
    "call me",
    "this is",
    "name's",
    "i am",
];

pub const COMMON_FIRST_NAMES: &[&str] = &[
    "sarah", "john", "mike", "lisa", "david", "emma", "james", "anna",
    "robert", "maria", "michael", "jessica", "william", "ashley", "richard",
    "jennifer", "thomas", "amanda", "daniel", "melissa", "paul", "nicole",
    "mark", "stephanie", "anthony", "elizabeth", "steven", "helen", "andrew",
];

/// Perth-area places and generic locative phrases.
pub const LOCATIONS: &[&str] = &[
    "perth", "fremantle", "cottesloe", "scarborough", "kardinya", "applecross",
    "nedlands", "subiaco", "leederville", "mount lawley", "victoria park",
    "south perth", "canning vale", "joondalup", "wanneroo", "rockingham",
    "mandurah", "suburb", "live in", "located in", "from", "area",
];

pub const PROJECT_TYPES: &[&str] = &[
    "new pool", "build", "construction", "renovation", "upgrade", "repair",
    "maintenance", "service", "cleaning", "new", "existing", "current",
];

// ---------------------------------------------------------------------------
// Topical categories (matched against the latest user message)
// ---------------------------------------------------------------------------

pub const CONSTRUCTION: &[&str] = &["new pool", "build", "construction", "luxury"];

pub const RENOVATION: &[&str] = &["renovation", "upgrade", "renovate", "repair"];

pub const PRICING: &[&str] = &["price", "cost", "budget", "quote", "expensive", "cheap"];

pub const TIMELINE: &[&str] = &["how long", "timeline", "when", "time", "schedule"];

pub const MAINTENANCE: &[&str] = &["maintenance", "cleaning", "chemical", "service"];

pub const SERVICE_AREA: &[&str] = &["perth", "area", "location", "where", "kardinya"];

pub const WATER_FEATURES: &[&str] = &["spa", "fountain", "waterfall", "feature"];

pub const DESIGN: &[&str] = &["design", "style", "look", "modern", "contemporary"];

pub const PERMITS: &[&str] = &["permit", "approval", "council", "legal", "regulation"];

/// An empty message also counts as a greeting.
pub const GREETING: &[&str] = &["hello", "hi", "hey", "start"];

pub const CONSULTATION: &[&str] = &["contact", "call", "consultation", "visit", "meet"];

pub const THANKS: &[&str] = &["thank", "thanks"];

// ---------------------------------------------------------------------------
// Degraded replies
// ---------------------------------------------------------------------------

pub const FALLBACK_CONSTRUCTION: &[&str] = &["build", "new pool"];

pub const FALLBACK_PRICING: &[&str] = &["price", "cost"];

/// `true` if any keyword occurs as a substring of `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lower_case() {
        let tables: &[&[&str]] = &[
            DOMAIN, OFF_TOPIC, NAME_INTRODUCTIONS, COMMON_FIRST_NAMES, LOCATIONS,
            PROJECT_TYPES, CONSTRUCTION, RENOVATION, PRICING, TIMELINE, MAINTENANCE,
            SERVICE_AREA, WATER_FEATURES, DESIGN, PERMITS, GREETING, CONSULTATION, THANKS,
        ];
        for table in tables {
            for keyword in *table {
                assert_eq!(*keyword, keyword.to_lowercase(), "'{keyword}' must be lower-case");
            }
        }
    }

    #[test]
    fn contains_any_is_substring_based() {
        assert!(contains_any("what would it cost?", PRICING));
        assert!(contains_any("swimming lessons", DOMAIN));
        assert!(!contains_any("", PRICING));
    }
}

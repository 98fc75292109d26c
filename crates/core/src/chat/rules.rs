//! The ordered rule table behind the sales assistant.
//!
//! [`RULES`] is evaluated top to bottom and the first rule whose trigger
//! fires produces the reply. The final rule always fires, so evaluation
//! always yields exactly one reply.

use super::keywords::{self, contains_any};
use super::qualification::{is_off_topic, Qualification};
use super::ChatMessage;

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

pub mod replies {
    pub const OFF_TOPIC: &str = "I'm here specifically to help with pool construction, renovations, and maintenance services at Primo Pools. How can I assist you with your pool project today?";

    pub const ASK_NAME: &str = "To provide you with the most accurate information and potentially schedule a consultation, may I have your first name?";

    pub const ASK_SUBURB: &str = "Thanks! What suburb are you located in? This helps us understand your local council requirements and site conditions.";

    pub const ASK_PROJECT_TYPE: &str = "Perfect! Are you looking at building a new pool, renovating an existing pool, or exploring maintenance services?";

    pub const CONSTRUCTION_ASK_NAME: &str = "Excellent! I'd love to help you with your new pool project. Primo Pools specializes in luxury concrete pools, infinity edge designs, and custom water features. To provide you with specific recommendations, what's your first name?";

    pub const CONSTRUCTION_DETAILS: &str = "Perfect! New pool construction is our specialty. We create custom concrete pools, infinity edges, and integrated water features. What size pool area are you considering, and do you have any specific design features in mind like spas or waterfalls?";

    pub const RENOVATION_ASK_NAME: &str = "Pool renovations are a fantastic way to breathe new life into your backyard! We offer equipment upgrades, surface refinishing, energy-efficient systems, and structural modifications. To provide you with specific renovation recommendations, what's your first name?";

    pub const RENOVATION_DETAILS: &str = "Perfect! Pool renovations can transform your existing pool. What specific aspects are you looking to upgrade - equipment, surface finishes, adding water features, or structural modifications?";

    pub const PRICING: &str = "Pool costs vary significantly based on size, features, site conditions, and design complexity. Rather than providing estimates that might not reflect your specific situation, we prefer to offer accurate pricing through our complimentary consultation process. Our team will visit your property, discuss your requirements, and provide a detailed quote tailored to your project.";

    pub const TIMELINE: &str = "Pool construction timelines typically range from 8-16 weeks depending on design complexity, permits, and weather conditions. Perth's climate allows for year-round construction, though we do experience seasonal demand. During your consultation, we'll provide a realistic timeline based on your specific project and current scheduling.";

    pub const MAINTENANCE: &str = "Proper pool maintenance is essential for longevity and enjoyment! We offer comprehensive maintenance services including regular cleaning, chemical balancing, equipment servicing, and seasonal preparation. Many of our clients prefer our maintenance packages to ensure their pools stay pristine year-round.";

    pub const SERVICE_AREA: &str = "Primo Pools proudly serves Perth and the surrounding metropolitan areas. We're based in Kardinya and work throughout the region, from coastal suburbs to the hills. Our local expertise means we understand Perth's unique soil conditions, council requirements, and climate considerations that affect pool construction.";

    pub const WATER_FEATURES: &str = "Water features add incredible ambiance to any pool! We design and install spas, waterfalls, fountains, jets, and other custom water elements. These features can be integrated into new pool construction or added to existing pools during renovation. Each water feature is custom-designed to complement your pool's style and your landscape.";

    pub const DESIGN: &str = "Pool design is where creativity meets functionality! We work with various styles from modern geometric designs to naturalistic lagoon-style pools. Our design process includes 3D renderings so you can visualize your pool before construction begins. We consider your home's architecture, landscape, and personal preferences to create a cohesive outdoor living space.";

    pub const PERMITS: &str = "We handle all permits and council approvals as part of our service! Pool construction in Perth requires various permits and compliance with local regulations. Our experienced team manages this process from start to finish, ensuring your pool meets all safety standards and building codes. This is included in our comprehensive service.";

    pub const GREETING: &str = "Hello! I'm your Primo Pools design consultant. I'm here to help you create the perfect pool for your Perth property. Whether you're considering a new luxury pool, renovating an existing one, or exploring water features and landscaping, I'm here to guide you. What type of pool project interests you most?";

    pub const CONSULTATION: &str = "I'd love to arrange a consultation for you! Our team offers complimentary on-site consultations where we assess your property, discuss your vision, and provide expert recommendations. You can contact us directly at (08) 9417 6356 or through our contact form. We're located at 35 Mannion Way, Kardinya, and serve all of Perth's metropolitan area.";

    pub const THANKS: &str = "You're very welcome! I'm here whenever you need more information about pool construction, renovations, or maintenance. Don't hesitate to reach out when you're ready to start planning your dream pool. Primo Pools is here to make your backyard transformation exceptional!";

    pub const QUALIFIED_CLOSING: &str = "Excellent! Based on our conversation, I'd love to schedule you for a complimentary on-site consultation where our team can assess your property and provide detailed recommendations. Would you prefer a weekday or weekend appointment? Our consultations typically take 45-60 minutes and include a full site assessment and design discussion.";

    pub const FALLBACK: &str = "I'm here to help you explore pool options with Primo Pools! We specialize in luxury concrete pools, renovations, water features, and landscaping throughout Perth. Whether you're considering a new pool, upgrading an existing one, or have questions about our services, I'm here to help. What aspect of pool ownership interests you most?";

    // Degraded replies, used when a responder fails.

    pub const DEGRADED_CONSTRUCTION: &str = "I'd love to help you with your new pool project! Primo Pools specializes in luxury concrete pools, infinity edge designs, and custom water features. Would you like to schedule a complimentary consultation to discuss your vision?";

    pub const DEGRADED_PRICING: &str = "Pool costs vary based on size, features, and design complexity. We provide accurate pricing through our complimentary consultation process where our team visits your property and provides a detailed quote tailored to your project.";

    pub const DEGRADED_GENERIC: &str = "I'm here to help you with your pool project! While our AI system is currently updating, I can still provide information about Primo Pools' services. What would you like to know about pool construction, renovations, or maintenance?";
}

// ---------------------------------------------------------------------------
// Turn
// ---------------------------------------------------------------------------

/// Qualification questions are only asked once the transcript is longer
/// than this.
pub const QUALIFICATION_MIN_MESSAGES: usize = 2;

/// Everything the rules look at, derived once per request.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Lower-cased text of the latest user message (empty if none).
    pub latest: String,
    /// Lower-cased text of the whole transcript, space-joined.
    pub history: String,
    pub message_count: usize,
    pub qualification: Qualification,
}

impl Turn {
    pub fn from_transcript(transcript: &[ChatMessage]) -> Self {
        let latest = transcript
            .iter()
            .rev()
            .find(|m| m.role.is_user())
            .map(|m| m.content.to_lowercase())
            .unwrap_or_default();
        let history = transcript
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let qualification = Qualification::from_history(&history);

        Self {
            latest,
            history,
            message_count: transcript.len(),
            qualification,
        }
    }

    fn qualifying(&self) -> bool {
        self.message_count > QUALIFICATION_MIN_MESSAGES
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// When a rule fires.
pub enum Trigger {
    /// Custom predicate over the turn.
    When(fn(&Turn) -> bool),
    /// Any keyword occurs in the latest user message.
    Latest(&'static [&'static str]),
    Always,
}

impl Trigger {
    pub fn fires(&self, turn: &Turn) -> bool {
        match self {
            Trigger::When(predicate) => predicate(turn),
            Trigger::Latest(keywords) => contains_any(&turn.latest, keywords),
            Trigger::Always => true,
        }
    }
}

/// What a rule answers.
pub enum Reply {
    Fixed(&'static str),
    /// Reply chosen from the turn (e.g. by qualification state).
    Choose(fn(&Turn) -> &'static str),
}

impl Reply {
    pub fn render(&self, turn: &Turn) -> &'static str {
        match self {
            Reply::Fixed(text) => text,
            Reply::Choose(choose) => choose(turn),
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub reply: Reply,
}

/// Precedence order of the assistant's rules; first match wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "off_topic",
        trigger: Trigger::When(off_topic),
        reply: Reply::Fixed(replies::OFF_TOPIC),
    },
    Rule {
        name: "ask_name",
        trigger: Trigger::When(needs_name),
        reply: Reply::Fixed(replies::ASK_NAME),
    },
    Rule {
        name: "ask_suburb",
        trigger: Trigger::When(needs_location),
        reply: Reply::Fixed(replies::ASK_SUBURB),
    },
    Rule {
        name: "ask_project_type",
        trigger: Trigger::When(needs_project_type),
        reply: Reply::Fixed(replies::ASK_PROJECT_TYPE),
    },
    Rule {
        name: "construction",
        trigger: Trigger::Latest(keywords::CONSTRUCTION),
        reply: Reply::Choose(construction_reply),
    },
    Rule {
        name: "renovation",
        trigger: Trigger::Latest(keywords::RENOVATION),
        reply: Reply::Choose(renovation_reply),
    },
    Rule {
        name: "pricing",
        trigger: Trigger::Latest(keywords::PRICING),
        reply: Reply::Fixed(replies::PRICING),
    },
    Rule {
        name: "timeline",
        trigger: Trigger::Latest(keywords::TIMELINE),
        reply: Reply::Fixed(replies::TIMELINE),
    },
    Rule {
        name: "maintenance",
        trigger: Trigger::Latest(keywords::MAINTENANCE),
        reply: Reply::Fixed(replies::MAINTENANCE),
    },
    Rule {
        name: "service_area",
        trigger: Trigger::Latest(keywords::SERVICE_AREA),
        reply: Reply::Fixed(replies::SERVICE_AREA),
    },
    Rule {
        name: "water_features",
        trigger: Trigger::Latest(keywords::WATER_FEATURES),
        reply: Reply::Fixed(replies::WATER_FEATURES),
    },
    Rule {
        name: "design",
        trigger: Trigger::Latest(keywords::DESIGN),
        reply: Reply::Fixed(replies::DESIGN),
    },
    Rule {
        name: "permits",
        trigger: Trigger::Latest(keywords::PERMITS),
        reply: Reply::Fixed(replies::PERMITS),
    },
    Rule {
        name: "greeting",
        trigger: Trigger::When(greeting),
        reply: Reply::Fixed(replies::GREETING),
    },
    Rule {
        name: "consultation",
        trigger: Trigger::Latest(keywords::CONSULTATION),
        reply: Reply::Fixed(replies::CONSULTATION),
    },
    Rule {
        name: "thanks",
        trigger: Trigger::Latest(keywords::THANKS),
        reply: Reply::Fixed(replies::THANKS),
    },
    Rule {
        name: "qualified",
        trigger: Trigger::When(qualified),
        reply: Reply::Fixed(replies::QUALIFIED_CLOSING),
    },
    Rule {
        name: "fallback",
        trigger: Trigger::Always,
        reply: Reply::Fixed(replies::FALLBACK),
    },
];

fn off_topic(turn: &Turn) -> bool {
    is_off_topic(&turn.history)
}

fn needs_name(turn: &Turn) -> bool {
    turn.qualifying() && !turn.qualification.has_name
}

fn needs_location(turn: &Turn) -> bool {
    let q = turn.qualification;
    turn.qualifying() && q.has_name && !q.has_location
}

fn needs_project_type(turn: &Turn) -> bool {
    let q = turn.qualification;
    turn.qualifying() && q.has_name && q.has_location && !q.has_project_type
}

fn greeting(turn: &Turn) -> bool {
    turn.latest.is_empty() || contains_any(&turn.latest, keywords::GREETING)
}

fn qualified(turn: &Turn) -> bool {
    turn.qualification.is_complete()
}

/// Without a name, ask for one; once fully qualified, offer the consultation.
///
/// The closing branch is what lets a visitor who has given a name and a
/// suburb and then asks about a new pool receive the consultation offer
/// rather than the construction details. Every fully qualified transcript
/// must end in that offer, whichever topic rule matched last.
fn construction_reply(turn: &Turn) -> &'static str {
    let q = turn.qualification;
    if !q.has_name {
        replies::CONSTRUCTION_ASK_NAME
    } else if q.is_complete() {
        replies::QUALIFIED_CLOSING
    } else {
        replies::CONSTRUCTION_DETAILS
    }
}

/// Same shape as [`construction_reply`], so a qualified renovation enquiry
/// also ends in the consultation offer.
fn renovation_reply(turn: &Turn) -> &'static str {
    let q = turn.qualification;
    if !q.has_name {
        replies::RENOVATION_ASK_NAME
    } else if q.is_complete() {
        replies::QUALIFIED_CLOSING
    } else {
        replies::RENOVATION_DETAILS
    }
}

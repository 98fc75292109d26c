use async_trait::async_trait;

use super::rules::{replies, Turn, RULES};
use super::{ChatMessage, ChatResponder};
use crate::error::CoreError;

/// The reply chosen for a transcript and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub rule: &'static str,
    pub reply: &'static str,
}

/// Keyword-driven sales assistant. Stateless; one instance can serve any
/// number of conversations concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesBot;

impl SalesBot {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the rule table against a transcript.
    pub fn decide(&self, transcript: &[ChatMessage]) -> Decision {
        let turn = Turn::from_transcript(transcript);
        RULES
            .iter()
            .find(|rule| rule.trigger.fires(&turn))
            .map_or(
                Decision {
                    rule: "fallback",
                    reply: replies::FALLBACK,
                },
                |rule| Decision {
                    rule: rule.name,
                    reply: rule.reply.render(&turn),
                },
            )
    }

    pub fn reply(&self, transcript: &[ChatMessage]) -> String {
        self.decide(transcript).reply.to_string()
    }
}

#[async_trait]
impl ChatResponder for SalesBot {
    async fn respond(&self, transcript: &[ChatMessage]) -> Result<String, CoreError> {
        Ok(self.reply(transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(texts: &[&str]) -> Vec<ChatMessage> {
        texts.iter().map(|t| ChatMessage::user(*t)).collect()
    }

    fn decide(texts: &[&str]) -> Decision {
        SalesBot::new().decide(&users(texts))
    }

    #[test]
    fn hi_gets_greeting() {
        assert_eq!(decide(&["hi"]).reply, replies::GREETING);
    }

    #[test]
    fn empty_transcript_gets_greeting() {
        let decision = SalesBot::new().decide(&[]);
        assert_eq!(decision.rule, "greeting");
    }

    #[test]
    fn off_topic_beats_greeting() {
        let decision = decide(&["hi", "who won the sports final?"]);
        assert_eq!(decision.reply, replies::OFF_TOPIC);
    }

    #[test]
    fn off_topic_considers_the_whole_transcript() {
        // An earlier off-topic message still counts when nothing pool-related
        // has been said.
        let decision = decide(&["tell me about politics", "hello"]);
        assert_eq!(decision.rule, "off_topic");
    }

    #[test]
    fn domain_keyword_anywhere_keeps_conversation_on_topic() {
        let decision = decide(&["i have a pool", "what's the weather like?"]);
        assert_ne!(decision.rule, "off_topic");
    }

    #[test]
    fn short_transcripts_never_ask_for_name_via_qualification() {
        for transcript in [&["hello"][..], &["hello", "what's the price?"][..]] {
            let decision = decide(transcript);
            assert_ne!(decision.rule, "ask_name");
            assert_ne!(decision.reply, replies::ASK_NAME);
        }
    }

    #[test]
    fn third_message_without_name_asks_for_name() {
        let decision = decide(&["hello", "how much?", "what does it cost"]);
        assert_eq!(decision.reply, replies::ASK_NAME);
    }

    #[test]
    fn named_without_location_asks_for_suburb() {
        let decision = decide(&["hello", "my name is priya", "what does it cost"]);
        assert_eq!(decision.reply, replies::ASK_SUBURB);
    }

    #[test]
    fn named_and_located_without_project_asks_for_type() {
        let decision = decide(&["hello", "i'm priya", "we live in joondalup"]);
        assert_eq!(decision.reply, replies::ASK_PROJECT_TYPE);
    }

    #[test]
    fn fully_qualified_transcript_gets_consultation_offer() {
        let decision = decide(&["I'm John", "I live in Cottesloe", "I want a new pool"]);
        assert_eq!(decision.reply, replies::QUALIFIED_CLOSING);
    }

    #[test]
    fn qualified_renovation_enquiry_gets_consultation_offer() {
        let decision = decide(&["I'm John", "I live in Cottesloe", "Looking at a renovation"]);
        assert_eq!(decision.rule, "renovation");
        assert_eq!(decision.reply, replies::QUALIFIED_CLOSING);
    }

    #[test]
    fn qualified_and_no_topic_gets_consultation_offer() {
        let decision = decide(&["I'm John", "I live in Cottesloe", "We need a new one, ok"]);
        assert_eq!(decision.rule, "qualified");
    }

    #[test]
    fn cost_question_gets_pricing() {
        assert_eq!(decide(&["how much does it cost?"]).reply, replies::PRICING);
        assert_eq!(decide(&["Is it EXPENSIVE"]).reply, replies::PRICING);
    }

    #[test]
    fn qualified_visitor_asking_cost_gets_pricing() {
        let decision = decide(&["I'm John", "I live in Cottesloe, new pool", "what's the cost?"]);
        assert_eq!(decision.reply, replies::PRICING);
    }

    #[test]
    fn construction_without_name_asks_for_name_first() {
        assert_eq!(
            decide(&["i want to build a pool"]).reply,
            replies::CONSTRUCTION_ASK_NAME
        );
    }

    #[test]
    fn construction_with_name_gives_details() {
        assert_eq!(
            decide(&["i'm sarah, i want to build a pool"]).reply,
            replies::CONSTRUCTION_DETAILS
        );
    }

    #[test]
    fn renovation_variants() {
        assert_eq!(decide(&["we need a repair"]).reply, replies::RENOVATION_ASK_NAME);
        assert_eq!(
            decide(&["i'm sarah, we need a repair"]).reply,
            replies::RENOVATION_DETAILS
        );
    }

    #[test]
    fn topical_categories_follow_precedence() {
        let cases = [
            ("how long does it take?", "timeline"),
            ("do you do cleaning?", "maintenance"),
            ("where are you based?", "service_area"),
            ("can you add a fountain?", "water_features"),
            ("i like a modern style", "design"),
            ("do i need a permit?", "permits"),
            ("hey", "greeting"),
            ("can someone call me", "consultation"),
            ("thanks!", "thanks"),
        ];
        for (text, expected) in cases {
            assert_eq!(decide(&[text]).rule, expected, "message: {text}");
        }
    }

    #[test]
    fn construction_outranks_pricing() {
        assert_eq!(decide(&["what does a new pool cost?"]).rule, "construction");
    }

    #[test]
    fn unmatched_message_gets_fallback() {
        let decision = decide(&["ok"]);
        assert_eq!(decision.rule, "fallback");
        assert_eq!(decision.reply, replies::FALLBACK);
    }

    #[test]
    fn identical_transcripts_get_identical_replies() {
        let bot = SalesBot::new();
        let transcript = users(&["hello", "i'm mike from fremantle", "renovation please"]);
        assert_eq!(bot.reply(&transcript), bot.reply(&transcript));
    }

    #[test]
    fn every_reply_is_non_empty() {
        let bot = SalesBot::new();
        for transcript in [
            users(&[]),
            users(&[""]),
            users(&["ok", "ok", "ok"]),
            users(&["music"]),
        ] {
            assert!(!bot.reply(&transcript).is_empty());
        }
    }

    #[test]
    fn assistant_messages_count_towards_length() {
        let transcript = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Hello! How can I help?"),
            ChatMessage::user("what does it cost"),
        ];
        assert_eq!(SalesBot::new().decide(&transcript).reply, replies::ASK_NAME);
    }

    #[tokio::test]
    async fn responder_never_fails() {
        let reply = SalesBot::new()
            .respond(&[ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(reply, replies::GREETING);
    }
}

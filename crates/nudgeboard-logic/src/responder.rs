//! Scripted keyword-match chat responder.
//!
//! The "bot" is a fixed lookup: a query either contains one of a small set
//! of known keywords (case-insensitive substring check) or it gets the
//! generic fallback. Stateless, no language understanding.

use serde::{Deserialize, Serialize};

/// Keywords answered with the coaching reply.
const COACHING_KEYWORDS: &[&str] = &["training", "compliance", "policy"];

/// Keywords answered with the nudging reply.
const NUDGE_KEYWORDS: &[&str] = &["nudge", "alert"];

const COACHING_REPLY: &str =
    "Remember to review overdue employees weekly and point them at the right training module.";
const NUDGE_REPLY: &str =
    "Use the dashboard filters to find overdue employees, then send them a friendly nudge.";
const FALLBACK_REPLY: &str = "Sorry, I can only answer compliance-related questions.";

/// Which script a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyKind {
    Coaching,
    Nudging,
    Fallback,
}

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub kind: ReplyKind,
    pub text: &'static str,
}

fn contains_any(query_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query_lower.contains(k))
}

/// Answer a free-text query with one of the two scripted replies, or the
/// fallback when no keyword matches.
pub fn respond(query: &str) -> BotReply {
    let lower = query.to_lowercase();
    if contains_any(&lower, COACHING_KEYWORDS) {
        BotReply {
            kind: ReplyKind::Coaching,
            text: COACHING_REPLY,
        }
    } else if contains_any(&lower, NUDGE_KEYWORDS) {
        BotReply {
            kind: ReplyKind::Nudging,
            text: NUDGE_REPLY,
        }
    } else {
        BotReply {
            kind: ReplyKind::Fallback,
            text: FALLBACK_REPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coaching_keywords_match() {
        assert_eq!(respond("when is the next training?").kind, ReplyKind::Coaching);
        assert_eq!(respond("what is our compliance rate").kind, ReplyKind::Coaching);
        assert_eq!(respond("where is the policy doc").kind, ReplyKind::Coaching);
    }

    #[test]
    fn nudge_keywords_match() {
        assert_eq!(respond("how do I send a nudge?").kind, ReplyKind::Nudging);
        assert_eq!(respond("set up an alert please").kind, ReplyKind::Nudging);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(respond("TRAINING schedule?").kind, ReplyKind::Coaching);
        assert_eq!(respond("Send A NUDGE").kind, ReplyKind::Nudging);
    }

    #[test]
    fn substring_containment_not_word_match() {
        // "retraining" contains "training"
        assert_eq!(respond("retraining budget").kind, ReplyKind::Coaching);
    }

    #[test]
    fn unknown_query_gets_fallback() {
        let reply = respond("what's for lunch?");
        assert_eq!(reply.kind, ReplyKind::Fallback);
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[test]
    fn empty_query_gets_fallback() {
        assert_eq!(respond("").kind, ReplyKind::Fallback);
    }

    #[test]
    fn stateless_same_reply_every_time() {
        assert_eq!(respond("nudge"), respond("nudge"));
    }
}

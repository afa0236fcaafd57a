//! Display ordering for chat messages.
//!
//! Messages sort by timestamp ascending. The user/assistant pair of a turn
//! can land on the exact same timestamp (near-simultaneous writes), so an
//! exact-timestamp tie places `user` before `ai`. Equal (timestamp, sender)
//! pairs keep their input order.

use personachat_types::chat::{ChatMessage, Sender};

fn sender_rank(sender: Sender) -> u8 {
    match sender {
        Sender::User => 0,
        Sender::Ai => 1,
    }
}

/// Sort messages into display order: timestamp ascending, ties user-first.
///
/// The sort is stable, so messages that compare equal stay in the order
/// the storage layer returned them.
pub fn order_for_display(mut messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    messages.sort_by_key(|m| (m.timestamp, sender_rank(m.sender)));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn msg(sender: Sender, content: &str, offset_secs: i64) -> ChatMessage {
        ChatMessage {
            id: Uuid::now_v7(),
            session_id: Uuid::nil(),
            sender,
            content: content.to_string(),
            timestamp: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn test_orders_by_timestamp_ascending() {
        let ordered = order_for_display(vec![
            msg(Sender::Ai, "second", 10),
            msg(Sender::User, "first", 0),
            msg(Sender::User, "third", 20),
        ]);
        let contents: Vec<&str> = ordered.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn test_exact_timestamp_tie_puts_user_first() {
        let ts = Utc::now();
        let ai = ChatMessage {
            timestamp: ts,
            ..msg(Sender::Ai, "reply", 0)
        };
        let user = ChatMessage {
            timestamp: ts,
            ..msg(Sender::User, "question", 0)
        };

        let ordered = order_for_display(vec![ai, user]);
        assert_eq!(ordered[0].sender, Sender::User);
        assert_eq!(ordered[1].sender, Sender::Ai);
    }

    #[test]
    fn test_stable_within_equal_timestamp_and_sender() {
        let ts = Utc::now();
        let make = |content: &str| ChatMessage {
            timestamp: ts,
            ..msg(Sender::User, content, 0)
        };

        let ordered = order_for_display(vec![make("a"), make("b"), make("c")]);
        let contents: Vec<&str> = ordered.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(order_for_display(Vec::new()).is_empty());
    }

    #[test]
    fn test_interleaved_turns_keep_pairing() {
        // Two turns where each pair shares a timestamp.
        let t0 = Utc::now();
        let t1 = t0 + Duration::seconds(30);
        let mk = |sender, content: &str, ts| ChatMessage {
            timestamp: ts,
            ..msg(sender, content, 0)
        };

        let ordered = order_for_display(vec![
            mk(Sender::Ai, "reply-2", t1),
            mk(Sender::Ai, "reply-1", t0),
            mk(Sender::User, "ask-2", t1),
            mk(Sender::User, "ask-1", t0),
        ]);
        let contents: Vec<&str> = ordered.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["ask-1", "reply-1", "ask-2", "reply-2"]);
    }
}

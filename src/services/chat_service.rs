use crate::database::{MongoDb, CHAT_HISTORY};
use crate::models::ChatExchange;
use crate::services::completion_service::CompletionClient;
use mongodb::bson::DateTime as BsonDateTime;

/// Ordered keyword table, scanned top to bottom; the first keyword found
/// as a substring of the lowercased message wins. Order matters: "hi" is
/// checked before "diet plans", so a message containing both gets the
/// "hi" reply.
const KEYWORD_REPLIES: &[(&str, &str)] = &[
    (
        "hello",
        "Hello! Welcome to FitLife. How can I help you on your fitness journey today?",
    ),
    (
        "hi",
        "Hi there! Ask me about workout splits, diet plans, or fitness advice.",
    ),
    (
        "workout splits",
        "Popular workout splits include push/pull/legs, upper/lower, and full-body routines. Pick one that fits your weekly schedule and stick with it!",
    ),
    (
        "diet plans",
        "We build personalized diet plans! Fill in the diet plan form with your goal and preferences and we'll email you a plan.",
    ),
    (
        "fitness advice",
        "Consistency beats intensity: train regularly, progress gradually, eat enough protein, and get your sleep.",
    ),
];

pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble answering right now. Please try again in a moment.";

/// First-match lookup over the keyword table. Expects the already
/// lowercased message.
pub fn keyword_reply(lowered: &str) -> Option<&'static str> {
    KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, reply)| *reply)
}

/// Computes the bot response for one chat turn and appends the exchange
/// to the chat history. This flow never surfaces an error to the caller:
/// an upstream failure degrades to the fallback reply, and a history
/// write failure is logged without touching the response.
pub async fn respond(db: &MongoDb, completion: &CompletionClient, message: &str) -> String {
    let lowered = message.to_lowercase();

    let response = match keyword_reply(&lowered) {
        Some(reply) => reply.to_string(),
        None => match completion.complete(&lowered).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("⚠️  Completion API unavailable, using fallback reply: {}", e);
                FALLBACK_REPLY.to_string()
            }
        },
    };

    let exchange = ChatExchange {
        user_message: message.to_string(),
        bot_response: response.clone(),
        timestamp: BsonDateTime::now(),
    };

    if let Err(e) = db
        .collection::<ChatExchange>(CHAT_HISTORY)
        .insert_one(&exchange)
        .await
    {
        log::error!("❌ Failed to record chat exchange: {}", e);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_matches_fixed_reply() {
        let reply = keyword_reply("hello").unwrap();
        assert!(reply.contains("Welcome to FitLife"));
    }

    #[test]
    fn test_first_match_wins_over_later_keywords() {
        // "hi" precedes "diet plans" in the table and is a substring here,
        // so it must win even though "diet plans" also appears.
        let reply = keyword_reply("hi there, tell me about diet plans").unwrap();
        assert_eq!(reply, keyword_reply("hi").unwrap());
        assert_ne!(reply, keyword_reply("diet plans are great").unwrap());
    }

    #[test]
    fn test_substring_match_inside_longer_message() {
        let reply = keyword_reply("could you give me some fitness advice please");
        assert!(reply.unwrap().contains("Consistency"));
    }

    #[test]
    fn test_unmatched_message_returns_none() {
        assert!(keyword_reply("tell me about protein timing").is_none());
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        // Each keyword queried alone must produce its own reply.
        let mut seen = std::collections::HashSet::new();
        for keyword in ["workout splits", "diet plans", "fitness advice"] {
            let reply = keyword_reply(keyword).unwrap();
            assert!(seen.insert(reply), "duplicate reply for '{}'", keyword);
        }
    }
}

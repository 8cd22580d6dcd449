pub mod store;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::{MemoryStore, MessageStore};

const SHOWN: &str = "shown";

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("invalid show condition for message {id}: {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },
    #[error("unknown message action: {0}")]
    UnknownAction(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub id: String,
    #[serde(default)]
    pub date_start: Option<i64>,
    pub date_end: i64,
    pub content: String,
    /// Case-insensitive patterns matched against path + query string.
    #[serde(default)]
    pub show_condition: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Remind,
    Dismiss,
}

impl std::str::FromStr for MessageAction {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remind" => Ok(MessageAction::Remind),
            "dismiss" => Ok(MessageAction::Dismiss),
            other => Err(MessageError::UnknownAction(other.to_string())),
        }
    }
}

pub fn message_key(id: &str) -> String {
    format!("portalMessageKey-{id}")
}

/// Picks the first message that is live, matches the location and has not
/// been marked in either store.
pub fn shown_message<'a>(
    messages: &'a [UserMessage],
    now_ms: i64,
    location: &str,
    persistent: &dyn MessageStore,
    session: &dyn MessageStore,
) -> Result<Option<&'a UserMessage>, MessageError> {
    for message in messages {
        let key = message_key(&message.id);
        if persistent.get(&key).is_some() || session.get(&key).is_some() {
            continue;
        }
        if now_ms > message.date_end {
            continue;
        }
        if message.date_start.is_some_and(|start| now_ms < start) {
            continue;
        }
        if !matches_location(message, location)? {
            continue;
        }
        return Ok(Some(message));
    }
    Ok(None)
}

pub fn dismiss(message: &UserMessage, persistent: &mut dyn MessageStore) {
    persistent.set(&message_key(&message.id), SHOWN);
}

pub fn remind(message: &UserMessage, session: &mut dyn MessageStore) {
    session.set(&message_key(&message.id), SHOWN);
}

pub fn apply_action(
    action: MessageAction,
    message: &UserMessage,
    persistent: &mut dyn MessageStore,
    session: &mut dyn MessageStore,
) {
    match action {
        MessageAction::Remind => remind(message, session),
        MessageAction::Dismiss => dismiss(message, persistent),
    }
}

fn matches_location(message: &UserMessage, location: &str) -> Result<bool, MessageError> {
    let Some(patterns) = &message.show_condition else {
        return Ok(true);
    };
    for pattern in patterns {
        if compile(&message.id, pattern)?.is_match(location) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn compile(id: &str, pattern: &str) -> Result<Regex, MessageError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| MessageError::Pattern {
            id: id.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/messages/mod.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// A message observed in one of the controlling account's conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub body: String,
    /// Authored by the controlling account.
    pub from_me: bool,
    /// Platform-specific sender id.
    pub from: String,
    /// Platform-specific recipient id.
    pub to: String,
}

impl ChatMessage {
    /// A message the controlling account sent to `to`.
    pub fn outgoing(own_id: &str, to: &str, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            from_me: true,
            from: own_id.to_string(),
            to: to.to_string(),
        }
    }

    /// A message `from` sent to the controlling account.
    pub fn incoming(from: &str, own_id: &str, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            from_me: false,
            from: from.to_string(),
            to: own_id.to_string(),
        }
    }

    /// The other party of the conversation, whichever way the message went.
    pub fn contact(&self) -> &str {
        if self.from_me { &self.to } else { &self.from }
    }
}

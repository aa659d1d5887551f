//! Per-message routing decisions.
//!
//! Classification is a pure function of the message, the current preference
//! map and the configured default language. Every message gets exactly one
//! [`Decision`]; only `SetDefault` and `SetOverride` lead to a mutation.

use crate::preferences::Preferences;
use crate::relay::ChatMessage;

/// Leading words of the preference command, matched case-insensitively.
pub const COMMAND_WORDS: [&str; 2] = ["set", "language"];

/// Language argument that always means "the default language".
pub const DEFAULT_ALIAS: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A reply produced by this bot; ignored.
    Echo,
    /// `set language` without a language.
    InvalidCommand,
    /// Reset `contact` to the default language.
    SetDefault { contact: String },
    /// Translate the conversation with `contact` into `language`.
    SetOverride { contact: String, language: String },
    Translate { target_language: String },
    NoOp,
}

impl Decision {
    pub const fn mutates_preferences(&self) -> bool {
        matches!(self, Self::SetDefault { .. } | Self::SetOverride { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    default_language: String,
    marker: String,
}

impl Router {
    pub fn new(default_language: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into().to_lowercase(),
            marker: marker.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Whether `message` is one of the bot's own replies.
    pub fn is_echo(&self, message: &ChatMessage) -> bool {
        message.body.starts_with(&self.marker)
    }

    pub fn classify(&self, message: &ChatMessage, preferences: &Preferences) -> Decision {
        if self.is_echo(message) {
            return Decision::Echo;
        }

        if message.from_me && is_command(&message.body) {
            return self.classify_command(message);
        }

        let contact = message.contact();
        let target_language = match preferences.get(contact) {
            Some(_) if !message.from_me => Some(self.default_language.as_str()),
            Some(preferred) => Some(preferred.as_str()),
            None => None,
        };

        match target_language {
            // Unreachable while default-valued entries are never stored; kept
            // so an outgoing message is never "translated" into our own language.
            Some(target) if target != self.default_language || !message.from_me => {
                Decision::Translate {
                    target_language: target.to_string(),
                }
            }
            _ => Decision::NoOp,
        }
    }

    fn classify_command(&self, message: &ChatMessage) -> Decision {
        let Some(language) = message.body.split_whitespace().nth(2) else {
            return Decision::InvalidCommand;
        };

        let language = language.to_lowercase();
        let contact = message.to.clone();

        if language == self.default_language || language == DEFAULT_ALIAS {
            Decision::SetDefault { contact }
        } else {
            Decision::SetOverride { contact, language }
        }
    }
}

/// True when the first two words are `set language`, in any case.
fn is_command(body: &str) -> bool {
    let mut words = body.split_whitespace();
    COMMAND_WORDS
        .iter()
        .all(|expected| words.next().is_some_and(|w| w.eq_ignore_ascii_case(expected)))
}

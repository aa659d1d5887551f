//! Texts of the replies the bot posts in a conversation.
//!
//! Every reply starts with the marker so the router recognises it as an echo
//! when the chat platform reports it back as a new message.

/// Default leading marker of bot replies.
pub const DEFAULT_MARKER: &str = "🤖";

/// Default bold delimiter wrapped around translations and confirmations.
pub const DEFAULT_STYLING: &str = "*";

const USAGE: &str = "Invalid format. Use 'set language [language_code]' to set or \
                     'set language default' to reset to default.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyFormat {
    marker: String,
    styling: String,
}

impl Default for ReplyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_STYLING)
    }
}

impl ReplyFormat {
    pub fn new(marker: impl Into<String>, styling: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            styling: styling.into(),
        }
    }

    fn styled(&self, text: &str) -> String {
        format!("{} {s}{text}{s}", self.marker, s = self.styling)
    }

    fn plain(&self, text: &str) -> String {
        format!("{} {text}", self.marker)
    }

    pub fn translation(&self, translated: &str) -> String {
        self.styled(translated)
    }

    pub fn language_set(&self, language: &str) -> String {
        self.styled(&format!("Language set to {language}."))
    }

    pub fn language_reset(&self) -> String {
        self.styled("Language set to default.")
    }

    pub fn usage(&self) -> String {
        self.plain(USAGE)
    }

    pub fn translation_failed(&self) -> String {
        self.plain("Error in translation. Please try again later.")
    }

    pub fn preferences_unavailable(&self) -> String {
        self.plain("Could not read language preferences. Please try again later.")
    }

    pub fn preference_not_saved(&self) -> String {
        self.plain("Could not save the language preference. Please try again later.")
    }
}

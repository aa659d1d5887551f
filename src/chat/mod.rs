//! Console chat transport for the relay.
//!
//! Stands in for a chat platform client: it produces message events one at a
//! time and posts the relay's replies back into the conversation.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, OWN_ID, SessionConfig};
pub use ui::print_preferences;

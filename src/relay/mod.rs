//! The relay core: classify each observed message and act on it.
//!
//! Data flow per message: load preferences, classify with the [`Router`],
//! then either persist a preference change, translate, or do nothing, and
//! hand the reply text back to the chat transport.

mod dispatcher;
mod message;
mod reply;
pub mod router;

pub use dispatcher::{Outcome, Relay};
pub use message::ChatMessage;
pub use reply::{DEFAULT_MARKER, DEFAULT_STYLING, ReplyFormat};
pub use router::{Decision, Router};

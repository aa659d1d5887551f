use crate::preferences::{PreferenceStore, set_language};
use crate::translation::Translator;

use super::{ChatMessage, Decision, ReplyFormat, Router};

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// `None` when preferences could not be loaded and nothing was classified.
    pub decision: Option<Decision>,
    /// Text to post in reply to the message, if any.
    pub reply: Option<String>,
}

impl Outcome {
    const fn silent(decision: Decision) -> Self {
        Self {
            decision: Some(decision),
            reply: None,
        }
    }

    const fn replied(decision: Decision, reply: String) -> Self {
        Self {
            decision: Some(decision),
            reply: Some(reply),
        }
    }
}

/// Handles chat messages one at a time.
///
/// Preferences are reloaded from the store for every message and saved right
/// after a command changes them; nothing is cached in between. No error
/// escapes [`Relay::handle`]: failures become a reply plus a log entry.
pub struct Relay {
    router: Router,
    replies: ReplyFormat,
    store: Box<dyn PreferenceStore>,
    translator: Box<dyn Translator>,
}

impl Relay {
    pub fn new(
        router: Router,
        replies: ReplyFormat,
        store: Box<dyn PreferenceStore>,
        translator: Box<dyn Translator>,
    ) -> Self {
        Self {
            router,
            replies,
            store,
            translator,
        }
    }

    pub const fn router(&self) -> &Router {
        &self.router
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub async fn handle(&self, message: &ChatMessage) -> Outcome {
        tracing::info!(from = %message.from, to = %message.to, from_me = message.from_me, body = %message.body, "received message");

        // Checked before touching the store so a failing store cannot feed
        // its own error replies back into the loop.
        if self.router.is_echo(message) {
            tracing::debug!("skipping already translated message");
            return Outcome::silent(Decision::Echo);
        }

        let mut preferences = match self.store.load() {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "failed to load language preferences");
                return Outcome {
                    decision: None,
                    reply: Some(self.replies.preferences_unavailable()),
                };
            }
        };

        let decision = self.router.classify(message, &preferences);
        tracing::debug!(
            ?decision,
            mutates_preferences = decision.mutates_preferences(),
            "classified message"
        );

        match &decision {
            Decision::Echo | Decision::NoOp => Outcome::silent(decision),
            Decision::InvalidCommand => {
                tracing::info!(body = %message.body, "invalid set language command");
                let reply = self.replies.usage();
                Outcome::replied(decision, reply)
            }
            Decision::SetDefault { contact } => {
                let default_language = self.router.default_language();
                set_language(&mut preferences, contact, default_language, default_language);
                let reply = match self.store.save(&preferences) {
                    Ok(()) => {
                        tracing::info!(contact = %contact, "language preference set to default");
                        self.replies.language_reset()
                    }
                    Err(e) => {
                        tracing::error!(contact = %contact, error = %e, "failed to save language preference");
                        self.replies.preference_not_saved()
                    }
                };
                Outcome::replied(decision, reply)
            }
            Decision::SetOverride { contact, language } => {
                set_language(
                    &mut preferences,
                    contact,
                    language,
                    self.router.default_language(),
                );
                let reply = match self.store.save(&preferences) {
                    Ok(()) => {
                        tracing::info!(contact = %contact, language = %language, "language preference set");
                        self.replies.language_set(language)
                    }
                    Err(e) => {
                        tracing::error!(contact = %contact, error = %e, "failed to save language preference");
                        self.replies.preference_not_saved()
                    }
                };
                Outcome::replied(decision, reply)
            }
            Decision::Translate { target_language } => {
                let reply = match self
                    .translator
                    .translate(&message.body, target_language)
                    .await
                {
                    Ok(translated) => {
                        let reply = self.replies.translation(&translated);
                        tracing::info!(target_language = %target_language, reply = %reply, "translation sent");
                        reply
                    }
                    Err(e) => {
                        tracing::error!(target_language = %target_language, error = %e, "translation failed");
                        self.replies.translation_failed()
                    }
                };
                Outcome::replied(decision, reply)
            }
        }
    }
}

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::relay::{ChatMessage, Relay};
use crate::ui::Spinner;

/// Id of the controlling account in console conversations.
pub const OWN_ID: &str = "me";

/// Settings shown by `/config`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub default_language: String,
    pub preferences_path: PathBuf,
    /// Conversation the session starts in.
    pub contact: String,
    /// Show a spinner while a message is relayed.
    pub spinner: bool,
}

/// A console stand-in for a chat client's message-event stream.
///
/// Lines typed are messages we send to the current contact; `/incoming`
/// lines are messages the contact sends to us. Every reply the relay produces
/// is shown and then observed again as a new outgoing message, the way chat
/// platforms report a bot's own replies.
pub struct ChatSession {
    config: SessionConfig,
    relay: Relay,
    contact: String,
}

impl ChatSession {
    pub fn new(config: SessionConfig, relay: Relay) -> Self {
        let contact = config.contact.clone();
        Self {
            config,
            relay,
            contact,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.contact);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(&format!(
                    "Message to {}, /incoming <text> to receive, /help for commands",
                    self.contact
                ))
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        let message = ChatMessage::outgoing(OWN_ID, &self.contact, text);
                        self.deliver(message).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config, &self.contact),
            SlashCommand::Contact(None) => ui::print_contact(&self.contact),
            SlashCommand::Contact(Some(contact)) => {
                self.contact = contact;
                ui::print_contact(&self.contact);
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Incoming(None) => ui::print_error("Usage: /incoming <text>"),
            SlashCommand::Incoming(Some(text)) => {
                let message = ChatMessage::incoming(&self.contact, OWN_ID, text);
                self.deliver(message).await;
            }
            SlashCommand::Prefs => match self.relay.store().load() {
                Ok(preferences) => {
                    ui::print_preferences(&preferences, self.relay.router().default_language());
                }
                Err(e) => ui::print_error(&e.to_string()),
            },
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    /// Hands one message to the relay, then feeds each reply back in as the
    /// platform would, until the relay stays silent.
    async fn deliver(&self, message: ChatMessage) {
        let mut pending = Some(message);

        while let Some(message) = pending.take() {
            let outcome = {
                let spinner = Spinner::new("Relaying...", self.config.spinner);
                let outcome = self.relay.handle(&message).await;
                spinner.stop();
                outcome
            };

            if let Some(reply) = outcome.reply {
                ui::print_reply(&reply);
                pending = Some(ChatMessage::outgoing(OWN_ID, message.contact(), reply));
            }
        }
    }
}

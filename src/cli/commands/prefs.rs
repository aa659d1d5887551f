//! Preference management command handler.

use anyhow::{Result, bail};

use crate::chat::print_preferences;
use crate::config::RelaySettings;
use crate::preferences::{PreferenceStore, set_language};
use crate::translation::resolve_language;
use crate::ui::Style;

use super::open_store;
use crate::cli::PrefsCommand;

/// Runs a `prefs` subcommand against the configured store.
pub fn run_prefs(command: Option<PrefsCommand>, settings: &RelaySettings) -> Result<()> {
    let store = open_store(settings)?;

    match command.unwrap_or(PrefsCommand::List) {
        PrefsCommand::List => {
            print_preferences(&store.load()?, &settings.default_language);
        }
        PrefsCommand::Set { contact, language } => {
            set_contact_language(store.as_ref(), settings, &contact, &language)?;
        }
        PrefsCommand::Clear { contact } => {
            let mut preferences = store.load()?;
            if preferences.remove(&contact).is_none() {
                bail!("No language override stored for '{contact}'");
            }
            store.save(&preferences)?;
            println!(
                "{} Cleared override for {}",
                Style::success("✓"),
                Style::contact(&contact)
            );
        }
    }

    Ok(())
}

/// Same normalization as the in-chat `set language` command.
fn set_contact_language(
    store: &dyn PreferenceStore,
    settings: &RelaySettings,
    contact: &str,
    language: &str,
) -> Result<()> {
    let language = language.to_lowercase();
    if resolve_language(&language).is_none() {
        tracing::warn!(language = %language, "language is not in the supported list, storing it anyway");
    }

    let mut preferences = store.load()?;
    set_language(
        &mut preferences,
        contact,
        &language,
        &settings.default_language,
    );
    store.save(&preferences)?;

    if preferences.contains_key(contact) {
        println!(
            "{} {} now gets {}",
            Style::success("✓"),
            Style::contact(contact),
            Style::language(&language)
        );
    } else {
        println!(
            "{} {} uses the default language ({})",
            Style::success("✓"),
            Style::contact(contact),
            Style::language(&settings.default_language)
        );
    }
    Ok(())
}

//! Console relay UI components.

use crate::preferences::Preferences;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(contact: &str) {
    println!(
        "{} {} - Console Relay",
        Style::header("linguabot"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint(format!(
            "Chatting with {contact}. Type 'set language <code>' to pick their language."
        ))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_reply(reply: &str) {
    println!("{}", Style::reply(reply));
    println!();
}

pub fn print_contact(contact: &str) {
    println!(
        "{} Now chatting with {}",
        Style::success("✓"),
        Style::contact(contact)
    );
    println!();
}

pub fn print_config(config: &SessionConfig, contact: &str) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}     {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}     {}",
        Style::label("language"),
        Style::language(&config.default_language)
    );
    println!(
        "  {}  {}",
        Style::label("preferences"),
        Style::secondary(config.preferences_path.display())
    );
    println!(
        "  {}      {}",
        Style::label("contact"),
        Style::contact(contact)
    );
    println!();
}

pub fn print_preferences(preferences: &Preferences, default_language: &str) {
    println!(
        "{} {}",
        Style::header("Language preferences"),
        Style::secondary(format!("(default: {default_language})"))
    );
    if preferences.is_empty() {
        println!("  {}", Style::secondary("No overrides set."));
    }
    for (contact, language) in preferences {
        println!("  {}  {}", Style::contact(contact), Style::language(language));
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/incoming <text>", "Receive a message from the current contact"),
        ("/contact <id>   ", "Switch to another conversation"),
        ("/prefs          ", "Show stored language preferences"),
        ("/config         ", "Show relay configuration"),
        ("/help           ", "Show this help"),
        ("/quit           ", "Exit the relay"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!(
        "\n  {}",
        Style::hint("Plain text is sent to the current contact; 'set language <code>' and 'set language default' manage their language.")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

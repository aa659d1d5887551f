//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Configuration", "Language preferences")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Labels/keys (e.g., "provider", "contact")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Supplementary info (e.g., endpoints, file paths, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Contact ids
    pub fn contact<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Language codes and names
    pub fn language<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Replies posted by the bot
    pub fn reply<T: Display>(text: T) -> String {
        format!("{}", text.magenta())
    }

    /// Configured values (e.g., provider and model names)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Slash commands (e.g., "/incoming", "/prefs")
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}

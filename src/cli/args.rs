use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linguabot")]
#[command(about = "Chat relay bot that translates conversations per contact")]
#[command(version)]
pub struct Args {
    /// Config file (default: ~/.config/linguabot/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Preferences file or database
    #[arg(long, global = true)]
    pub preferences: Option<PathBuf>,

    /// Your own language; contacts with no override are left untranslated
    #[arg(short = 'l', long = "default-language", global = true)]
    pub default_language: Option<String>,

    /// Only log warnings and errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log debug details
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Provider name (from config file)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Contact the console session starts chatting with
    #[arg(long, default_value = "contact")]
    pub contact: String,

    /// Disable the translation cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes and names
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Inspect or edit stored language preferences
    Prefs {
        #[command(subcommand)]
        command: Option<PrefsCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Show all language overrides
    List,
    /// Set the language used with a contact
    Set {
        /// Contact id (e.g. 34600111222@c.us)
        contact: String,
        /// Language code or name; the default language clears the override
        language: String,
    },
    /// Remove a contact's override
    Clear {
        /// Contact id
        contact: String,
    },
}

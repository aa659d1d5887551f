use anyhow::Result;
use clap::Parser;

use linguabot::cli::commands::prefs::run_prefs;
use linguabot::cli::commands::providers::print_providers;
use linguabot::cli::commands::run::{RunOptions, run_relay};
use linguabot::cli::commands::load_config_file;
use linguabot::cli::{Args, Command};
use linguabot::config::{ResolveOptions, resolve_relay_settings};
use linguabot::logging::{self, Verbosity};
use linguabot::preferences::PreferenceError;
use linguabot::translation::print_languages;
use linguabot::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    let resolve = ResolveOptions {
        default_language: args.default_language,
        provider: args.provider,
        model: args.model,
        preferences: args.preferences,
        no_cache: args.no_cache,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            let config_file = load_config_file(args.config.as_deref())?;
            print_providers(&config_file, provider.as_deref())?;
        }
        Some(Command::Prefs { command }) => {
            let config_file = load_config_file(args.config.as_deref())?;
            let settings = resolve_relay_settings(&resolve, &config_file)?;
            run_prefs(command, &settings)?;
        }
        None => {
            let options = RunOptions {
                config: args.config,
                resolve,
                contact: args.contact,
                quiet: args.quiet,
            };
            run_relay(options).await?;
        }
    }

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    if matches!(
        error.downcast_ref::<PreferenceError>(),
        Some(PreferenceError::Malformed { .. })
    ) {
        exitcode::DATAERR
    } else if is_config_error(error) {
        exitcode::CONFIG
    } else {
        exitcode::SOFTWARE
    }
}

fn is_config_error(error: &anyhow::Error) -> bool {
    let message = error.to_string();
    message.starts_with("Invalid configuration")
        || message.starts_with("Missing required configuration")
        || message.starts_with("Provider '")
        || message.starts_with("Failed to parse config file")
}

//! Provider listing command handler.

use anyhow::Result;

use crate::config::ConfigFile;
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists all configured providers with their endpoints and models.
pub fn print_providers(config: &ConfigFile, specific_provider: Option<&str>) -> Result<()> {
    if config.providers.is_empty() {
        println!("No providers configured.");
        println!("Add providers to ~/.config/linguabot/config.toml");
        return Ok(());
    }

    let default_provider = config.relay.provider.as_deref();
    let default_suffix = |name: &str| {
        if default_provider == Some(name) {
            format!(" {}", Style::secondary("(default)"))
        } else {
            String::new()
        }
    };

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        println!(
            "Provider: {}{}",
            Style::value(provider_name),
            default_suffix(provider_name)
        );
        println!("  endpoint = {}", provider.endpoint);
        if provider.requires_api_key() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  api_key  = {}",
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.models.is_empty() {
            println!("  models   = (none configured)");
        } else {
            println!("  models:");
            for model in &provider.models {
                println!("    - {model}");
            }
        }
    } else {
        println!("{}\n", Style::header("Configured providers"));
        let mut names: Vec<&String> = config.providers.keys().collect();
        names.sort();
        for name in names {
            let provider = &config.providers[name];
            println!("  {}{}", Style::value(name), default_suffix(name));
            println!("    endpoint: {}", Style::secondary(&provider.endpoint));
            if !provider.models.is_empty() {
                println!("    models: {}", provider.models.join(", "));
            }
        }
    }

    Ok(())
}

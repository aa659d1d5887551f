use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show relay configuration"),
    ("/contact", "Switch to the conversation with another contact"),
    ("/help", "Show available commands"),
    ("/incoming", "Receive a message from the current contact"),
    ("/prefs", "Show stored language preferences"),
    ("/quit", "Exit the relay"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    /// Switch conversation; `None` shows the current one.
    Contact(Option<String>),
    Help,
    /// Text the current contact sends to us.
    Incoming(Option<String>),
    Prefs,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A message we send to the current contact.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    match name {
        "config" => Input::Command(SlashCommand::Config),
        "contact" | "to" => Input::Command(SlashCommand::Contact(argument)),
        "help" => Input::Command(SlashCommand::Help),
        "incoming" | "in" => Input::Command(SlashCommand::Incoming(argument)),
        "prefs" => Input::Command(SlashCommand::Prefs),
        "quit" | "exit" | "q" => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(cmd.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  set language spanish "),
            Input::Text("set language spanish".to_string())
        );
    }

    #[test]
    fn test_parse_incoming_keeps_inner_spacing() {
        assert_eq!(
            parse_input("/incoming ¿Qué  tal?"),
            Input::Command(SlashCommand::Incoming(Some("¿Qué  tal?".to_string())))
        );
        assert_eq!(
            parse_input("/in"),
            Input::Command(SlashCommand::Incoming(None))
        );
    }

    #[test]
    fn test_parse_contact_command() {
        assert_eq!(
            parse_input("/contact 34600111222@c.us"),
            Input::Command(SlashCommand::Contact(Some("34600111222@c.us".to_string())))
        );
        assert_eq!(
            parse_input("/contact"),
            Input::Command(SlashCommand::Contact(None))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/prefs"), Input::Command(SlashCommand::Prefs));
        for quit in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(quit), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/translate now"),
            Input::Command(SlashCommand::Unknown("translate now".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        assert_eq!(completer.get_suggestions("/").unwrap().len(), SLASH_COMMANDS.len());

        let suggestions = completer.get_suggestions("/c").unwrap();
        assert_eq!(suggestions.len(), 2); // /config, /contact

        let suggestions = completer.get_suggestions("/i").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/incoming"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/prefs  Show stored language preferences".to_string();
        let completion = completer.get_completion("/p", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/prefs".to_string()));
    }
}

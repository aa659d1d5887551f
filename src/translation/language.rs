//! Supported languages and resolution of user-supplied language names.
//!
//! Contacts pick a language with free text (`set language es` or
//! `set language spanish`); both forms resolve to the same entry here.

use anyhow::Result;

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Resolves a language code or English name to its display name.
///
/// Matching ignores ASCII case, so `es`, `ES`, `spanish` and `Spanish`
/// all resolve to `"Spanish"`.
pub fn resolve_language(input: &str) -> Option<&'static str> {
    let input = input.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, name)| code.eq_ignore_ascii_case(input) || name.eq_ignore_ascii_case(input))
        .map(|(_, name)| *name)
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages (ISO 639-1 code or name)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::language(code), Style::secondary(name));
    }
}

/// Validates that the given language code or name is supported.
///
/// # Errors
///
/// Returns an error if the language is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if resolve_language(lang).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language: '{lang}'\n\n\
             Use an ISO 639-1 code or an English name: en, es, french, german, ...\n\
             Run 'linguabot languages' to see all supported languages."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_by_code() {
        assert_eq!(resolve_language("es"), Some("Spanish"));
        assert_eq!(resolve_language("zh-TW"), Some("Chinese (Traditional)"));
    }

    #[test]
    fn test_resolve_language_by_name() {
        assert_eq!(resolve_language("spanish"), Some("Spanish"));
        assert_eq!(resolve_language("English"), Some("English"));
    }

    #[test]
    fn test_resolve_language_ignores_case() {
        assert_eq!(resolve_language("JA"), Some("Japanese"));
        assert_eq!(resolve_language("zh-tw"), Some("Chinese (Traditional)"));
        assert_eq!(resolve_language("  french "), Some("French"));
    }

    #[test]
    fn test_resolve_language_unknown() {
        assert_eq!(resolve_language("klingon"), None);
        assert_eq!(resolve_language(""), None);
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("english").is_ok());
        assert!(validate_language("de").is_ok());
        assert!(validate_language("default").is_err());
    }
}

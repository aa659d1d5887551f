pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator relaying a chat conversation. \
     Translate the following chat message to {target_language}. \
     Output only the translated message without any explanations, quotes or notes. \
     Keep emoji, line breaks and inline formatting as they are.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}

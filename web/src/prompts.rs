use bingo_core::PromptPool;

const DEFAULT_PROMPTS: &str = include_str!("../assets/prompts.toml");

/// Prompt pool shipped with the app.
pub(crate) fn default_pool() -> Result<PromptPool, toml::de::Error> {
    toml::from_str(DEFAULT_PROMPTS)
}

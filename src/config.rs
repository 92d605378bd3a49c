use thiserror::Error;

use crate::{
    constants::{DEFAULT_COMMAND_PREFIX, DEFAULT_TTS_LANGUAGE},
    services::speech::SpeechOptions,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DISCORD_BOT_TOKEN is not set. Create a .env file with DISCORD_BOT_TOKEN=your_token_here")]
    MissingToken,
}

/// Configuration loaded from environment variables
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub speech: SpeechOptions,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let command_prefix =
            lookup("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let language = lookup("TTS_LANGUAGE").unwrap_or_else(|| DEFAULT_TTS_LANGUAGE.to_string());
        let slow = lookup("TTS_SLOW").is_some_and(|value| value.eq_ignore_ascii_case("true"));

        Ok(Self {
            discord_token,
            command_prefix,
            speech: SpeechOptions { language, slow },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.speech.language, "en");
        assert!(!config.speech.slow);
    }

    #[test]
    fn test_custom_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("COMMAND_PREFIX", "#"),
            ("TTS_LANGUAGE", "fr"),
            ("TTS_SLOW", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.command_prefix, "#");
        assert_eq!(config.speech.language, "fr");
        assert!(config.speech.slow);
    }

    #[test]
    fn test_slow_flag_only_accepts_true() {
        for value in ["yes", "1", "false", ""] {
            let config = Config::from_lookup(lookup_from(&[
                ("DISCORD_BOT_TOKEN", "abc"),
                ("TTS_SLOW", value),
            ]))
            .unwrap();
            assert!(!config.speech.slow, "{value:?} should not enable slow speech");
        }
    }

    #[test]
    fn test_missing_token() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingToken)
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "")])),
            Err(ConfigError::MissingToken)
        ));
    }
}

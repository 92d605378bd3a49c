use poise::serenity_prelude::GuildId;

/// Validation error types
#[derive(Debug)]
pub enum ValidationError {
    NotInGuild,
    VoiceNotInitialized,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotInGuild => write!(f, "This command must be used in a server"),
            ValidationError::VoiceNotInitialized => {
                write!(f, "Voice client was not registered with the gateway client")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Extract guild ID from context, returning error if not in a guild
pub fn require_guild(guild_id: Option<GuildId>) -> Result<GuildId, ValidationError> {
    guild_id.ok_or(ValidationError::NotInGuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_guild() {
        assert!(require_guild(None).is_err());
        assert!(require_guild(Some(GuildId::new(123))).is_ok());
    }
}

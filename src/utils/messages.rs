/// Pure functions for formatting replies (Discord-agnostic)
use crate::constants::{OWNER_ONLY, UNEXPECTED_ERROR};

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Build an error message for command usage in wrong context
pub fn build_context_error(required_context: &str) -> String {
    format_error(&format!("This command must be used {}", required_context))
}

/// Build the reply to `hello`
pub fn build_greeting(mention: &str) -> String {
    format!("Hello, {}! 👋", mention)
}

/// Build the reply to a successful `join`
pub fn build_joined(channel_name: &str) -> String {
    format!("Joined {}!", channel_name)
}

/// Failures reported by the command framework rather than a command body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchFailure {
    NotOwner,
    MissingArgument(String),
    UnknownCommand,
    Unexpected,
}

/// Reply sent for a framework-level failure, `None` when it is ignored
pub fn dispatch_error_reply(failure: &DispatchFailure) -> Option<String> {
    match failure {
        DispatchFailure::NotOwner => Some(format_error(OWNER_ONLY)),
        DispatchFailure::MissingArgument(name) => {
            Some(format_error(&format!("Missing argument: `{}`", name)))
        }
        DispatchFailure::UnknownCommand => None,
        DispatchFailure::Unexpected => Some(format_error(UNEXPECTED_ERROR)),
    }
}

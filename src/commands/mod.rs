// Command modules
mod admin;
mod basic;
mod tts;
mod voice;

use crate::models::{Data, Error};

// Re-export all commands
pub use admin::restart;
pub use basic::{echo, hello, ping, pong};
pub use tts::say;
pub use voice::{join, leave};

/// Every command the bot registers
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        hello(),
        ping(),
        pong(),
        echo(),
        restart(),
        join(),
        say(),
        leave(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> poise::Command<Data, Error> {
        commands()
            .into_iter()
            .find(|command| command.name == name)
            .unwrap_or_else(|| panic!("'{}' not registered", name))
    }

    #[test]
    fn test_all_commands_registered() {
        for name in ["hello", "ping", "🏓", "echo", "restart", "join", "say", "leave"] {
            find(name);
        }
        assert_eq!(commands().len(), 8);
    }

    #[test]
    fn test_commands_are_prefix_commands() {
        for command in commands() {
            assert!(
                command.prefix_action.is_some(),
                "'{}' should be a prefix command",
                command.name
            );
        }
    }

    #[test]
    fn test_command_help_text() {
        let cases = [
            ("echo", "Repeats the user's message."),
            ("join", "Joins the voice channel you are in."),
            ("🏓", "Pong"),
            ("restart", "Restarts the bot. Owner only."),
            ("say", "Speaks text in your voice channel."),
            ("leave", "Leaves the voice channel."),
        ];

        for (name, help) in cases {
            assert_eq!(find(name).description.as_deref(), Some(help), "help for '{}'", name);
        }
    }

    #[test]
    fn test_restart_is_owner_only() {
        assert!(find("restart").owners_only);

        for command in commands().iter().filter(|command| command.name != "restart") {
            assert!(!command.owners_only, "'{}' should be public", command.name);
        }
    }

    #[test]
    fn test_text_commands_take_required_argument() {
        for name in ["echo", "say"] {
            let command = find(name);
            assert_eq!(command.parameters.len(), 1);
            assert!(command.parameters[0].required);
        }
    }
}

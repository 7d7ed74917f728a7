use serde::{Deserialize, Serialize};

use crate::form::FormRequest;

/// Inbound platform events, validated at the boundary.
/// The platform adapter converts SDK payloads into these before any core
/// logic runs; unparsable payloads never reach the router.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// A message was posted somewhere the bot can see.
    /// Qualifying only when it lands in the check-in channel and the
    /// author is not a bot.
    MessagePosted {
        author_id: String,
        channel_id: String,
        is_bot: bool,
    },
    /// A registered slash command was invoked.
    CommandInvoked { command: Command, user_id: String },
    /// The daily check-in form was submitted, answers keyed by question
    /// index.
    FormSubmitted {
        user_id: String,
        answers: Vec<String>,
    },
}

/// The two commands the bot registers with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Streak,
    Daily,
}

/// Outbound actions, serialized one per line for the platform adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundAction {
    SendChannelMessage {
        channel_id: String,
        content: String,
    },
    Reply {
        user_id: String,
        content: String,
        ephemeral: bool,
    },
    ShowForm {
        user_id: String,
        form: FormRequest,
    },
    /// Emitted once at startup, before any event is accepted.
    RegisterCommands {
        application_id: String,
        guild_id: String,
        commands: Vec<CommandSpec>,
    },
}

/// One command registration entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
}

/// The command set the bot registers at startup.
pub fn command_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "streak".to_string(),
            description: "View your current check-in streak".to_string(),
        },
        CommandSpec {
            name: "daily".to_string(),
            description: "Answer the daily check-in questions".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_events_roundtrip_tagged_json() {
        let event = InboundEvent::MessagePosted {
            author_id: "u1".into(),
            channel_id: "c1".into(),
            is_bot: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"message_posted\""));

        let parsed: InboundEvent = serde_json::from_str(&json).unwrap();
        match parsed {
            InboundEvent::MessagePosted { author_id, .. } => assert_eq!(author_id, "u1"),
            other => panic!("Expected MessagePosted, got {other:?}"),
        }
    }

    #[test]
    fn command_parses_lowercase() {
        let event: InboundEvent = serde_json::from_str(
            r#"{"type":"command_invoked","command":"daily","user_id":"u2"}"#,
        )
        .unwrap();
        match event {
            InboundEvent::CommandInvoked { command, user_id } => {
                assert_eq!(command, Command::Daily);
                assert_eq!(user_id, "u2");
            }
            other => panic!("Expected CommandInvoked, got {other:?}"),
        }
    }

    #[test]
    fn command_specs_cover_both_commands() {
        let specs = command_specs();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["streak", "daily"]);
    }
}

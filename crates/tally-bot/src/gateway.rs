//! Gateway wiring for the bot shell.
//!
//! The SDK adapter on the other side of stdout owns login, interaction
//! tokens, widget rendering and rate limits. Everything the bot wants done
//! on the platform goes out as one JSON action per line; when a webhook
//! URL is stored, plain channel posts skip the adapter and go direct.

use std::io::Write;

use tally_core::error::GatewayError;
use tally_core::form::FormRequest;
use tally_core::{ChatGateway, OutboundAction, WebhookGateway};

/// Emits every outbound action as a JSON line on stdout for the adapter.
pub struct AdapterGateway;

impl AdapterGateway {
    pub fn emit(&self, action: &OutboundAction) -> Result<(), GatewayError> {
        let line = serde_json::to_string(action)
            .map_err(|e| GatewayError::Adapter(e.to_string()))?;

        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{line}")
            .and_then(|()| lock.flush())
            .map_err(|e| GatewayError::Adapter(e.to_string()))
    }
}

impl ChatGateway for AdapterGateway {
    fn send_channel_message(&self, channel_id: &str, content: &str) -> Result<(), GatewayError> {
        self.emit(&OutboundAction::SendChannelMessage {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        })
    }

    fn reply(&self, user_id: &str, content: &str, ephemeral: bool) -> Result<(), GatewayError> {
        self.emit(&OutboundAction::Reply {
            user_id: user_id.to_string(),
            content: content.to_string(),
            ephemeral,
        })
    }

    fn show_form(&self, user_id: &str, form: &FormRequest) -> Result<(), GatewayError> {
        self.emit(&OutboundAction::ShowForm {
            user_id: user_id.to_string(),
            form: form.clone(),
        })
    }
}

/// Adapter gateway with direct webhook channel sends when configured.
pub struct BotGateway {
    adapter: AdapterGateway,
    webhook: Option<WebhookGateway>,
}

impl BotGateway {
    pub fn new(webhook: Option<WebhookGateway>) -> Self {
        Self {
            adapter: AdapterGateway,
            webhook,
        }
    }

    pub fn adapter(&self) -> &AdapterGateway {
        &self.adapter
    }
}

impl ChatGateway for BotGateway {
    fn send_channel_message(&self, channel_id: &str, content: &str) -> Result<(), GatewayError> {
        match &self.webhook {
            Some(webhook) => webhook.send_channel_message(channel_id, content),
            None => self.adapter.send_channel_message(channel_id, content),
        }
    }

    fn reply(&self, user_id: &str, content: &str, ephemeral: bool) -> Result<(), GatewayError> {
        self.adapter.reply(user_id, content, ephemeral)
    }

    fn show_form(&self, user_id: &str, form: &FormRequest) -> Result<(), GatewayError> {
        self.adapter.show_form(user_id, form)
    }
}

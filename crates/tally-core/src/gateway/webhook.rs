//! Webhook gateway -- post channel messages via a platform webhook.
//!
//! A webhook is bound to a single channel on creation, so
//! `send_channel_message` ignores the channel id argument: the URL *is*
//! the channel. Replies and forms need an interaction token and are the
//! SDK adapter's job; this gateway refuses them.

use reqwest::Client;
use serde_json::json;
use tokio::runtime::Handle;

use crate::error::GatewayError;
use crate::form::FormRequest;
use crate::gateway::keyring_store;
use crate::gateway::traits::ChatGateway;

const WEBHOOK_URL_PREFIX: &str = "https://discord.com/api/webhooks/";

pub struct WebhookGateway {
    webhook_url: String,
    handle: Handle,
    client: Client,
}

impl WebhookGateway {
    /// Load the stored webhook URL from the OS keyring (empty if absent).
    pub fn new(handle: Handle) -> Self {
        let webhook_url = keyring_store::get(keyring_store::WEBHOOK_URL_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self::with_url(webhook_url, handle)
    }

    /// Build with an explicit URL, bypassing the keyring.
    pub fn with_url(webhook_url: String, handle: Handle) -> Self {
        Self {
            webhook_url,
            handle,
            client: Client::new(),
        }
    }

    /// Persist a user-provided webhook URL to the OS keyring and update
    /// in-memory state. Rejects URLs that are not platform webhooks.
    pub fn set_credentials(&mut self, webhook_url: &str) -> Result<(), GatewayError> {
        if !webhook_url.starts_with(WEBHOOK_URL_PREFIX) {
            return Err(GatewayError::Credentials(format!(
                "Invalid webhook URL: must start with {WEBHOOK_URL_PREFIX}"
            )));
        }
        keyring_store::set(keyring_store::WEBHOOK_URL_KEY, webhook_url)
            .map_err(|e| GatewayError::Credentials(e.to_string()))?;
        self.webhook_url = webhook_url.to_string();
        Ok(())
    }

    /// Remove the stored webhook URL.
    pub fn disconnect(&mut self) -> Result<(), GatewayError> {
        keyring_store::delete(keyring_store::WEBHOOK_URL_KEY)
            .map_err(|e| GatewayError::Credentials(e.to_string()))?;
        self.webhook_url.clear();
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    fn post_message(&self, content: &str) -> Result<(), GatewayError> {
        if self.webhook_url.is_empty() {
            return Err(GatewayError::NotConfigured("webhook URL"));
        }

        let body = json!({ "content": content });
        let resp = self
            .handle
            .block_on(self.client.post(&self.webhook_url).json(&body).send())?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        if status.as_u16() == 404 {
            // The webhook's channel was deleted out from under us.
            return Err(GatewayError::ChannelNotFound);
        }
        let body = self.handle.block_on(resp.text()).unwrap_or_default();
        Err(GatewayError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

impl ChatGateway for WebhookGateway {
    fn send_channel_message(&self, _channel_id: &str, content: &str) -> Result<(), GatewayError> {
        self.post_message(content)
    }

    fn reply(&self, _user_id: &str, _content: &str, _ephemeral: bool) -> Result<(), GatewayError> {
        Err(GatewayError::Unsupported("reply"))
    }

    fn show_form(&self, _user_id: &str, _form: &FormRequest) -> Result<(), GatewayError> {
        Err(GatewayError::Unsupported("show_form"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::Runtime;

    fn runtime() -> Runtime {
        Runtime::new().unwrap()
    }

    #[test]
    fn unconfigured_gateway_refuses_to_send() {
        let rt = runtime();
        let gateway = WebhookGateway::with_url(String::new(), rt.handle().clone());
        match gateway.send_channel_message("c1", "hello") {
            Err(GatewayError::NotConfigured(_)) => {}
            other => panic!("Expected NotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn successful_post_returns_ok() {
        let rt = runtime();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/webhooks/1/abc")
            .match_header("content-type", "application/json")
            .with_status(204)
            .create();

        let url = format!("{}/api/webhooks/1/abc", server.url());
        let gateway = WebhookGateway::with_url(url, rt.handle().clone());
        gateway.send_channel_message("c1", "hello").unwrap();
        mock.assert();
    }

    #[test]
    fn http_error_surfaces_status_and_body() {
        let rt = runtime();
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/webhooks/1/abc")
            .with_status(500)
            .with_body("boom")
            .create();

        let url = format!("{}/api/webhooks/1/abc", server.url());
        let gateway = WebhookGateway::with_url(url, rt.handle().clone());
        match gateway.send_channel_message("c1", "hello") {
            Err(GatewayError::Http { status: 500, body }) => assert_eq!(body, "boom"),
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn missing_webhook_maps_to_channel_not_found() {
        let rt = runtime();
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/webhooks/1/abc")
            .with_status(404)
            .create();

        let url = format!("{}/api/webhooks/1/abc", server.url());
        let gateway = WebhookGateway::with_url(url, rt.handle().clone());
        match gateway.send_channel_message("c1", "hello") {
            Err(GatewayError::ChannelNotFound) => {}
            other => panic!("Expected ChannelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn replies_and_forms_are_unsupported() {
        let rt = runtime();
        let gateway = WebhookGateway::with_url("x".to_string(), rt.handle().clone());
        assert!(matches!(
            gateway.reply("u1", "hi", true),
            Err(GatewayError::Unsupported("reply"))
        ));
    }
}

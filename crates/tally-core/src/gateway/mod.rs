//! Chat platform gateway.
//!
//! The bot core never talks to the platform SDK directly. Outbound traffic
//! goes through the [`ChatGateway`] trait: the shell binary bridges it to
//! the SDK adapter process, and [`WebhookGateway`] covers the one action a
//! bare webhook can perform (posting to the check-in channel).

pub mod traits;
pub mod webhook;

pub use traits::ChatGateway;
pub use webhook::WebhookGateway;

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "tally";

    /// Keyring entry holding the platform bot token (consumed by the SDK
    /// adapter, not by this process).
    pub const BOT_TOKEN_KEY: &str = "bot_token";
    /// Keyring entry holding the check-in channel webhook URL.
    pub const WEBHOOK_URL_KEY: &str = "webhook_url";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

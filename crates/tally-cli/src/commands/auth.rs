use clap::Subcommand;
use tally_core::gateway::keyring_store;
use tally_core::gateway::WebhookGateway;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the check-in channel webhook URL in the OS keyring
    SetWebhook { url: String },
    /// Store the platform bot token in the OS keyring
    SetToken { token: String },
    /// Show which credentials are stored
    Status,
    /// Remove all stored credentials
    Clear,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetWebhook { url } => {
            let runtime = tokio::runtime::Runtime::new()?;
            let mut gateway = WebhookGateway::new(runtime.handle().clone());
            gateway.set_credentials(&url)?;
            println!("webhook URL stored");
        }
        AuthAction::SetToken { token } => {
            keyring_store::set(keyring_store::BOT_TOKEN_KEY, &token)?;
            println!("bot token stored");
        }
        AuthAction::Status => {
            let webhook = keyring_store::get(keyring_store::WEBHOOK_URL_KEY)?.is_some();
            let token = keyring_store::get(keyring_store::BOT_TOKEN_KEY)?.is_some();
            println!("webhook URL: {}", if webhook { "stored" } else { "not set" });
            println!("bot token:   {}", if token { "stored" } else { "not set" });
        }
        AuthAction::Clear => {
            keyring_store::delete(keyring_store::WEBHOOK_URL_KEY)?;
            keyring_store::delete(keyring_store::BOT_TOKEN_KEY)?;
            println!("credentials cleared");
        }
    }
    Ok(())
}

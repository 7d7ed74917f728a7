use crate::error::GatewayError;
use crate::form::FormRequest;

/// Outbound side of the chat platform.
///
/// Methods are synchronous: implementations own any blocking at the
/// network boundary, so callers (the router) never hold a suspension
/// point between reading and committing the streak store.
pub trait ChatGateway: Send + Sync {
    /// Post a message to a channel.
    fn send_channel_message(&self, channel_id: &str, content: &str) -> Result<(), GatewayError>;

    /// Reply to the user who triggered the current event. `ephemeral`
    /// replies are visible only to that user.
    fn reply(&self, user_id: &str, content: &str, ephemeral: bool) -> Result<(), GatewayError>;

    /// Display the check-in form to a user.
    fn show_form(&self, user_id: &str, form: &FormRequest) -> Result<(), GatewayError>;
}

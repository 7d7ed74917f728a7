//! Event router.
//!
//! One synchronous dispatch function per inbound event kind. The router
//! owns the streak store; every `get`-then-`commit` sequence completes
//! before any gateway call is made, so duplicate same-user events arriving
//! back to back can never observe a half-applied mutation.
//!
//! Failure policy: a failed store write or platform send is logged with
//! full detail and, where a reply channel exists, reported to the
//! triggering user as a generic failure. Internal detail never reaches
//! end users.

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::GatewayError;
use crate::events::{Command, InboundEvent};
use crate::form::CheckinForm;
use crate::gateway::ChatGateway;
use crate::streak::{advance, today, StreakAction, StreakStore};

/// The one reply users see when anything goes wrong on their behalf.
pub const GENERIC_FAILURE_REPLY: &str = "Something went wrong, please try again later.";

pub struct Router {
    check_in_channel_id: String,
    form: CheckinForm,
    store: StreakStore,
}

impl Router {
    pub fn new(config: &Config, store: StreakStore) -> Self {
        Self {
            check_in_channel_id: config.platform.check_in_channel_id.clone(),
            form: CheckinForm::new(config.checkin.questions.clone()),
            store,
        }
    }

    pub fn store(&self) -> &StreakStore {
        &self.store
    }

    /// Dispatch one inbound event to completion.
    ///
    /// Never returns an error: everything recoverable is handled here, and
    /// nothing past startup is unrecoverable.
    pub fn dispatch(&mut self, event: InboundEvent, gateway: &dyn ChatGateway) {
        self.dispatch_on(event, today(), gateway)
    }

    /// Dispatch with an explicit event date.
    ///
    /// The calendar date is normalized exactly once, here at the boundary;
    /// [`dispatch`](Self::dispatch) derives it from the canonical UTC
    /// clock.
    pub fn dispatch_on(
        &mut self,
        event: InboundEvent,
        event_date: chrono::NaiveDate,
        gateway: &dyn ChatGateway,
    ) {
        match event {
            InboundEvent::MessagePosted {
                author_id,
                channel_id,
                is_bot,
            } => self.handle_message(&author_id, &channel_id, is_bot, event_date, gateway),
            InboundEvent::CommandInvoked { command, user_id } => {
                self.handle_command(command, &user_id, gateway)
            }
            InboundEvent::FormSubmitted { user_id, answers } => {
                self.handle_form_submitted(&user_id, &answers, event_date, gateway)
            }
        }
    }

    /// A qualifying message is the streak trigger: advance the engine,
    /// commit, then announce. Duplicate same-day messages are a silent
    /// no-op.
    fn handle_message(
        &mut self,
        author_id: &str,
        channel_id: &str,
        is_bot: bool,
        event_date: chrono::NaiveDate,
        gateway: &dyn ChatGateway,
    ) {
        if is_bot || channel_id != self.check_in_channel_id {
            return;
        }

        let (record, action) = advance(self.store.get(author_id), event_date);
        if action == StreakAction::Unchanged {
            return;
        }

        let streak = record.streak;
        if let Err(e) = self.store.commit(author_id, record) {
            // Memory stays authoritative; disk is stale until the next
            // successful commit.
            error!(user = author_id, error = %e, "streak store write failed");
        }
        info!(user = author_id, streak, ?action, %event_date, "streak updated");

        let content = format!("<@{author_id}>, your streak is **{streak}** days! Keep it up!");
        if let Err(e) = gateway.send_channel_message(channel_id, &content) {
            warn!(user = author_id, error = %e, "failed to announce streak");
        }
    }

    fn handle_command(&self, command: Command, user_id: &str, gateway: &dyn ChatGateway) {
        match command {
            Command::Streak => {
                let content = match self.store.get(user_id) {
                    Some(record) => format!(
                        "<@{user_id}>, your current streak is **{}** days! Keep it up!",
                        record.streak
                    ),
                    None => {
                        "You don't have a streak yet! Check in today to start one.".to_string()
                    }
                };
                if let Err(e) = gateway.reply(user_id, &content, false) {
                    warn!(user = user_id, error = %e, "failed to reply to streak command");
                }
            }
            Command::Daily => {
                if let Err(e) = gateway.show_form(user_id, &self.form.request()) {
                    warn!(user = user_id, error = %e, "failed to show check-in form");
                    self.reply_generic_failure(user_id, gateway);
                }
            }
        }
    }

    /// Repost the submitted answers to the check-in channel. The form
    /// itself never advances the streak -- the repost is authored by the
    /// bot, and only the user's own channel message qualifies.
    fn handle_form_submitted(
        &self,
        user_id: &str,
        answers: &[String],
        event_date: chrono::NaiveDate,
        gateway: &dyn ChatGateway,
    ) {
        if let Err(e) = self.form.validate(answers) {
            warn!(user = user_id, error = %e, "invalid check-in submission");
            self.reply_generic_failure(user_id, gateway);
            return;
        }

        // Pre-mutation streak for context; 0 if they have no record yet.
        let streak = self.store.get(user_id).map(|r| r.streak).unwrap_or(0);
        let message = self.form.compose(user_id, streak, event_date, answers);

        match gateway.send_channel_message(&self.check_in_channel_id, &message) {
            Ok(()) => {
                let confirmation = "Your daily check-in has been posted!";
                if let Err(e) = gateway.reply(user_id, confirmation, true) {
                    warn!(user = user_id, error = %e, "failed to confirm check-in");
                }
            }
            Err(GatewayError::ChannelNotFound) => {
                error!(channel = %self.check_in_channel_id, "check-in channel not found");
                self.reply_generic_failure(user_id, gateway);
            }
            Err(e) => {
                error!(user = user_id, error = %e, "failed to post check-in");
                self.reply_generic_failure(user_id, gateway);
            }
        }
    }

    fn reply_generic_failure(&self, user_id: &str, gateway: &dyn ChatGateway) {
        if let Err(e) = gateway.reply(user_id, GENERIC_FAILURE_REPLY, true) {
            warn!(user = user_id, error = %e, "failed to deliver failure reply");
        }
    }
}

//! # Tally Core Library
//!
//! Core business logic for Tally, a chat-platform bot that tracks per-user
//! daily check-in streaks and reposts a structured daily check-in form to
//! the designated channel. Operations are CLI-first: everything the bot
//! shell does is available through the standalone CLI binary, with the bot
//! being a thin event-loop layer over this library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure calendar-date state machine deciding whether a
//!   streak increments, resets, or stays unchanged
//! - **Streak Store**: write-through JSON persistence of streak records
//! - **Form Handler**: validation and composition of the daily check-in
//! - **Event Router**: tagged inbound events in, gateway calls out
//! - **Gateway**: trait boundary to the platform SDK adapter, plus a
//!   webhook implementation for direct channel posts
//!
//! ## Key Components
//!
//! - [`streak::advance`]: the streak continuity decision
//! - [`StreakStore`]: durable streak persistence
//! - [`Router`]: event dispatch
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod gateway;
pub mod router;
pub mod streak;

pub use config::Config;
pub use error::{ConfigError, CoreError, GatewayError, StoreError, ValidationError};
pub use events::{command_specs, Command, CommandSpec, InboundEvent, OutboundAction};
pub use form::{CheckinForm, FormInput, FormRequest};
pub use gateway::{ChatGateway, WebhookGateway};
pub use router::Router;
pub use streak::{advance, today, StreakAction, StreakRecord, StreakStore};

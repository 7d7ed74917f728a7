//! Streak tracking.
//!
//! Split into the pure decision logic ([`engine`]) and the durable
//! write-through store ([`store`]). The engine never touches disk; the
//! store never makes decisions.

pub mod engine;
pub mod store;

pub use engine::{advance, today, StreakAction, StreakRecord};
pub use store::StreakStore;

//! Streak continuity state machine.
//!
//! Given a user's last-checked-in date and the event date, decide whether
//! the streak increments, resets, or stays unchanged. Pure calendar
//! arithmetic -- persistence is the caller's job (see
//! [`store`](super::store)).
//!
//! All dates are calendar dates in UTC. Deriving the date once at the
//! boundary ([`today`]) keeps the duplicate-check and the "yesterday"
//! comparison on the same clock, so a DST shift in the host's local zone
//! cannot split one day into two.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One user's streak state. Exists only after the first qualifying event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    /// Consecutive qualifying days, always >= 1.
    pub streak: u32,
    /// Last date this user produced a qualifying event (UTC calendar date).
    pub last_event_date: NaiveDate,
}

/// What `advance` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakAction {
    /// First qualifying event ever for this user.
    Created,
    /// Event on the day after the last one.
    Incremented,
    /// Gap of two or more days (or a stored date in the future).
    Reset,
    /// Duplicate event on an already-counted day. Never mutates state.
    Unchanged,
}

/// Today's calendar date on the canonical (UTC) clock.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Compute the next streak state for a qualifying event on `event_date`.
///
/// Total over its input domain: every `(record, date)` pair maps to exactly
/// one of the four actions.
pub fn advance(
    existing: Option<&StreakRecord>,
    event_date: NaiveDate,
) -> (StreakRecord, StreakAction) {
    let Some(record) = existing else {
        return (
            StreakRecord {
                streak: 1,
                last_event_date: event_date,
            },
            StreakAction::Created,
        );
    };

    if record.last_event_date == event_date {
        return (record.clone(), StreakAction::Unchanged);
    }

    if record.last_event_date.succ_opt() == Some(event_date) {
        return (
            StreakRecord {
                streak: record.streak.saturating_add(1),
                last_event_date: event_date,
            },
            StreakAction::Incremented,
        );
    }

    // Gap of >= 2 days, or last_event_date in the future from clock skew:
    // re-anchor to the event date and start over.
    (
        StreakRecord {
            streak: 1,
            last_event_date: event_date,
        },
        StreakAction::Reset,
    )
}

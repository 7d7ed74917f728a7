use std::collections::BTreeMap;

use chrono::NaiveDate;
use clap::Subcommand;
use tally_core::streak::{advance, today, StreakStore};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show one user's streak record
    Show { user_id: String },
    /// List all streak records
    List,
    /// Record a qualifying event for a user (defaults to today, UTC)
    Record {
        user_id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StreakStore::open_default()?;

    match action {
        StreakAction::Show { user_id } => match store.get(&user_id) {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => println!("no streak recorded for {user_id}"),
        },
        StreakAction::List => {
            // BTreeMap for stable output order.
            let records: BTreeMap<_, _> = store.iter().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        StreakAction::Record { user_id, date } => {
            let event_date = date.unwrap_or_else(today);
            let (record, action) = advance(store.get(&user_id), event_date);
            store.commit(&user_id, record.clone())?;
            println!(
                "{}",
                serde_json::json!({ "action": action, "record": record })
            );
        }
    }
    Ok(())
}

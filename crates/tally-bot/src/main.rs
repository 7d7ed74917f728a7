//! Tally bot shell.
//!
//! Single-threaded event loop: one JSON-encoded inbound event per line on
//! stdin, outbound actions as JSON lines on stdout. Each event is fully
//! dispatched -- store mutation and all gateway calls complete -- before
//! the next line is read, so no handler ever observes another handler's
//! half-applied state.

use std::io::BufRead;

use tracing::{error, info, warn};

use tally_core::{
    command_specs, ChatGateway, Config, InboundEvent, OutboundAction, Router, StreakStore,
    WebhookGateway,
};

mod gateway;

use gateway::BotGateway;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "fatal");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    // A corrupt store is an operator problem; refuse to start.
    let store = StreakStore::open_default()?;
    info!(records = store.len(), path = %store.path().display(), "streak store loaded");

    let runtime = tokio::runtime::Runtime::new()?;
    let webhook = WebhookGateway::new(runtime.handle().clone());
    let gateway = BotGateway::new(webhook.is_configured().then_some(webhook));

    // Register both commands with the platform before accepting events.
    gateway.adapter().emit(&OutboundAction::RegisterCommands {
        application_id: config.platform.application_id.clone(),
        guild_id: config.platform.guild_id.clone(),
        commands: command_specs(),
    })?;
    info!("commands registered, accepting events");

    let mut router = Router::new(&config, store);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<InboundEvent>(&line) {
            Ok(event) => router.dispatch(event, &gateway),
            Err(e) => warn!(error = %e, "skipping unparsable event line"),
        }
    }

    info!("event stream closed, shutting down");
    Ok(())
}

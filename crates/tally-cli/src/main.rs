use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tally-cli", version, about = "Tally CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Streak inspection and recording
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Daily check-in form
    Daily {
        #[command(subcommand)]
        action: commands::daily::DailyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Credential management for the platform gateway
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Daily { action } => commands::daily::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

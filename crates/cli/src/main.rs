mod commands;
mod config;
mod render;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rocktober")]
#[command(about = "Countdown, details and sharing for Rocktober Fest")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live countdown to doors (Ctrl+C to quit)
    Countdown {
        /// Print the current countdown once and exit
        #[arg(long)]
        once: bool,
    },
    /// Copy the event summary to the clipboard
    Share {
        /// Don't wait for Enter after the confirmation
        #[arg(long)]
        no_wait: bool,
    },
    /// Show the event page
    Info,
    /// Show the rules page
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    rocktober_shared::init_env();

    // The guard must be kept alive for the duration of the program to ensure logs are flushed
    let _guard = rocktober_shared::init_tracing("cli");

    let cli = Cli::parse();
    let config = config::Config::from_env()?;
    let event = config.load_event()?;

    match cli.command {
        Commands::Countdown { once } => {
            commands::countdown::run(&event, config.tick_period(), once).await
        }
        Commands::Share { no_wait } => {
            commands::share::run(&event, config.page_url.clone(), !no_wait).await
        }
        Commands::Info => {
            commands::pages::info(&event);
            Ok(())
        }
        Commands::Rules => {
            commands::pages::rules();
            Ok(())
        }
    }
}

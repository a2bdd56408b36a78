mod config;
mod platform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use engine_logging::LogDestination;
use guestbook_core::SubmitPath;
use log::LevelFilter;

use config::{AppConfig, DEFAULT_CONFIG_FILENAME};

#[derive(Parser)]
#[command(author, version, about = "Sign the ERC-8021 guestbook from the terminal")]
struct AppArgs {
    /// RON config file; missing files fall back to defaults
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal UI (default)
    Ui,
    /// Submit one guestbook entry and wait for the outcome
    Sign {
        /// Use wallet_sendCalls instead of a direct transaction
        #[arg(long)]
        batch: bool,
        /// Leave the ERC-8021 data suffix off
        #[arg(long)]
        no_attribution: bool,
        message: String,
    },
    /// Print the attribution codes and their encoded data suffix
    Attribution,
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match args.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            // The log file comes from the config, so report the load once logging is up.
            let found = AppConfig::read(&args.config)?;
            let log_file = found
                .as_ref()
                .map_or_else(|| AppConfig::default().log_file, |config| config.log_file.clone());
            engine_logging::initialize(LogDestination::File(log_file), level);
            let config = AppConfig::resolve(&args.config, found);
            platform::run_app(&config)
        }
        Command::Sign {
            batch,
            no_attribution,
            message,
        } => {
            engine_logging::initialize(LogDestination::Terminal, level);
            let config = AppConfig::load(&args.config)?;
            let path = if batch {
                SubmitPath::BatchedCall
            } else {
                SubmitPath::DirectTransaction
            };
            platform::run_sign(&config, path, !no_attribution, message)
        }
        Command::Attribution => {
            platform::print_attribution();
            Ok(())
        }
    }
}

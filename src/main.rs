//! msglog - Entry Point

use clap::Parser;
use msglog::message_log::{LogLimits, MessageLog};
use msglog::model::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// msglog - bounded message log with a paginated terminal viewer
#[derive(Parser, Debug)]
#[command(name = "msglog")]
#[command(version)]
#[command(about = "Collect messages from a file or stdin and page through them")]
pub struct Args {
    /// File with one message per line (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mirror each incoming message to the log file
    #[arg(long, conflicts_with = "no_echo")]
    pub echo: bool,

    /// Do not mirror incoming messages to the log file
    #[arg(long)]
    pub no_echo: bool,
}

impl Args {
    /// Echo override from the command line, if either flag was given.
    fn echo_override(&self) -> Option<bool> {
        match (self.echo, self.no_echo) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "msglog exited with an error");
            eprintln!("msglog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = msglog::config::load_config_with_precedence(args.config.clone())?;
        let merged = msglog::config::merge_config(config_file);
        let with_env = msglog::config::apply_env_overrides(merged);
        msglog::config::apply_cli_overrides(with_env, args.echo_override())
    };

    msglog::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = msglog::source::detect_input_source(args.file.clone())?;

    let log = MessageLog::new(LogLimits::default()).with_echo(config.echo_to_console);

    msglog::view::run_with_source(input_source, log)?;

    Ok(())
}

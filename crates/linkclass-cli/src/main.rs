use clap::Parser;
use linkclass_core::logging;

mod cli;

use crate::cli::Cli;

/// Quiet by default so results stay the only stdout/stderr noise; parse
/// warnings from the classifier still get through.
const CLI_LOG_FILTER: &str = "warn";

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if cli.log_file {
        if let Err(err) = logging::init_logging(logging::DEFAULT_FILTER) {
            logging::init_logging_stderr(CLI_LOG_FILTER);
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
    } else {
        logging::init_logging_stderr(CLI_LOG_FILTER);
    }

    if let Err(err) = cli.run() {
        eprintln!("linkclass error: {:#}", err);
        std::process::exit(1);
    }
}

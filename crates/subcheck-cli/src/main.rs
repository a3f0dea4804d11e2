use subcheck_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logs go to the state dir; if that is unusable, keep going on stderr.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("subcheck error: {:#}", err);
        std::process::exit(1);
    }
}

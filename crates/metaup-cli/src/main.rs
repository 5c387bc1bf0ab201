use metaup_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("metaup error: {:#}", err);
        std::process::exit(1);
    }
}

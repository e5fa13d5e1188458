use intelliscan_core::fetch::FetchError;
use intelliscan_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; never let it stop a search.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("intelliscan error: {:#}", err);
        if let Some(body) = err.downcast_ref::<FetchError>().and_then(FetchError::diagnostic_body) {
            eprintln!("--- response body ---");
            eprintln!("{}", body);
        }
        std::process::exit(1);
    }
}

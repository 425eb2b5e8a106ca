use std::process::ExitCode;

use dirsize::logging::init_logging;
use dirsize_shared_kernel::ApplicationError;

fn main() -> ExitCode {
    init_logging();

    match dirsize::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.application() {
                Some(ApplicationError::InvalidPath { .. }) => println!("Invalid directory path."),
                _ => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

//! Abstract factory demonstration.
//!
//! Prints the products built by each factory variant.

use creation_patterns::logging::init_logging;
use creation_patterns::services::run_abstract_factory_demo;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let stdout = std::io::stdout();
    if let Err(e) = run_abstract_factory_demo(&mut stdout.lock()) {
        tracing::error!(error = %e, "abstract factory demo failed");
        eprintln!("abstract_factory: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

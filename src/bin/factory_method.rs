//! Factory method demonstration.

use creation_patterns::logging::init_logging;
use creation_patterns::services::run_factory_method_demo;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let stdout = std::io::stdout();
    if let Err(e) = run_factory_method_demo(&mut stdout.lock()) {
        tracing::error!(error = %e, "factory method demo failed");
        eprintln!("factory_method: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

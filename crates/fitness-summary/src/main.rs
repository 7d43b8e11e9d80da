mod bootstrap;

use std::process::ExitCode;

use fitness_core::formatting::format_error_report;
use fitness_core::settings::{Config, Settings};
use fitness_runtime::orchestrator::{ReportOrchestrator, StdoutProgress};
use fitness_runtime::report::Summary;

#[tokio::main]
async fn main() -> ExitCode {
    // Must run before clap reads the environment fallbacks.
    let env_file = bootstrap::load_env_file();
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format_error_report(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = bootstrap::setup_logging(&settings.log_level) {
        eprintln!("Failed to initialise logging: {e}");
    }

    match env_file {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    match run(&settings).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), "report aborted");
            eprintln!("{}", format_error_report(&e));
            ExitCode::FAILURE
        }
    }
}

/// Validate the configuration once, then run the report.
async fn run(settings: &Settings) -> fitness_core::Result<Summary> {
    let config = Config::from_settings(settings)?;
    ReportOrchestrator::new(config).run(&StdoutProgress).await
}

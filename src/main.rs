mod cli;
mod document;
mod gradebook;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use cli::Cli;
use document::GradesError;
use gradebook::GradeBook;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_level.as_deref()) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GradesError> {
    let settings = cli.settings();
    let (text, ending) = document::read(&cli.input)?;
    debug!(input = %cli.input.display(), ?ending, "read grades file");

    let output: Option<&Path> = if cli.update {
        if let Some(ignored) = &cli.output {
            if settings.warnings {
                warn!(
                    "not outputting to '{}' because update flag specified",
                    ignored.display()
                );
            }
        }
        Some(cli.input.as_path())
    } else {
        if let Some(path) = &cli.output {
            if settings.warnings && path.exists() {
                warn!("'{}' will be overwritten", path.display());
            }
        }
        cli.output.as_deref()
    };

    let grades = GradeBook::parse(&text, &settings);
    let report = ending.apply(&grades.report(&settings).to_string());

    match output {
        Some(path) => document::write(path, &report),
        None => document::print(&report),
    }
}

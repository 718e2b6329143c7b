use std::process::ExitCode;

use crate::cli::CliArgs;
use crate::error::ParseNameError;
use crate::name::PackageName;

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Main entry point for the application.
///
/// Parses the identifier and writes the resulting record to stdout as
/// compact JSON. The zero-segment branch is non-fatal: it reports on
/// stderr and still emits an all-absent record, with a failure exit
/// status.
pub fn run(args: &CliArgs) -> Result<ExitCode> {
    match PackageName::parse(args.package()) {
        Ok(package) => {
            tracing::debug!("Parsed package: {package:?}");
            println!("{}", serde_json::to_string(&package)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ ParseNameError::EmptySegments(_)) => {
            tracing::error!("{err}");
            eprintln!("Error: {err}");
            println!("{}", serde_json::to_string(&PackageName::default())?);
            Ok(ExitCode::FAILURE)
        }
    }
}

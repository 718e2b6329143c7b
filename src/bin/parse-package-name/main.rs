use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre;
use parse_package_name::cli::CliArgs;

mod log;

fn main() -> eyre::Result<ExitCode> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    log::init().ok();
    tracing::debug!("Cli args: {args:?}");

    Ok(parse_package_name::app::run(&args)?)
}

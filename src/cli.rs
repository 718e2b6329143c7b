use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version = CliArgs::unstable_version(), about, long_about = None)]
#[command(name = "parse-package-name")]
#[command(next_line_help = true)]
/// Split a package identifier into repo and name
pub struct CliArgs {
    /// The package identifier, for example `@scope/pkg`.
    ///
    /// Taken verbatim and split on `/`.
    package: String,
}

impl CliArgs {
    /// Surface current version together with the current git revision and date, if available
    fn unstable_version() -> &'static str {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        let date = option_env!("GIT_DATE").unwrap_or("no_date");
        let rev = option_env!("GIT_REV").unwrap_or("no_rev");
        // This is a memory leak, only use sparingly.
        Box::leak(format!("{VERSION} - {date} - {rev}").into_boxed_str())
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

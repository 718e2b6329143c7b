use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseNameError {
    /// Splitting the input produced no segments at all.
    ///
    /// `str::split` yields at least one piece for every input, so this is
    /// not reachable through [`crate::PackageName::parse`]; it is kept as
    /// the parser's defensive contract.
    #[error("Invalid package name: {0}")]
    EmptySegments(String),
}

//! Split a slash-delimited package identifier into its `repo` and `name`
//! parts.
//!
//! `@scope/pkg` maps to `{ repo: "@scope", name: "pkg" }`, a bare `lodash`
//! to `{ repo: null, name: "lodash" }`. Everything between the first and
//! the last segment is discarded.

pub mod app;
pub mod cli;
pub mod error;
pub mod name;

pub use name::PackageName;

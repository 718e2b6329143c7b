use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// A package identifier split into its scope and name parts.
///
/// `repo` is the leading scope or organization segment, present only when
/// the input contained at least two `/`-delimited segments. `name` is the
/// final segment. The record is constructed once and never mutated.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageName {
    pub repo: Option<String>,
    pub name: Option<String>,
}

impl PackageName {
    /// Split `input` on every `/` and map the pieces by count.
    ///
    /// The input is taken verbatim: no trimming, no case normalization,
    /// no character validation. One segment means there is no repo part;
    /// with two or more, the first becomes `repo`, the last `name`, and
    /// everything in between is dropped.
    pub fn parse(input: &str) -> Result<Self, ParseNameError> {
        let segments: Vec<&str> = input.split('/').collect();
        match segments.as_slice() {
            // `str::split` always yields at least one piece, this branch
            // only guards the contract.
            [] => Err(ParseNameError::EmptySegments(input.to_owned())),
            [name] => Ok(Self {
                repo: None,
                name: Some((*name).to_owned()),
            }),
            [repo, .., name] => Ok(Self {
                repo: Some((*repo).to_owned()),
                name: Some((*name).to_owned()),
            }),
        }
    }
}

impl std::str::FromStr for PackageName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parsed(input: &str) -> PackageName {
        PackageName::parse(input).unwrap()
    }

    #[rstest]
    #[case("lodash")]
    #[case("@scope")]
    #[case("with space")]
    fn single_segment_has_no_repo(#[case] input: &str) {
        assert_eq!(
            parsed(input),
            PackageName {
                repo: None,
                name: Some(input.to_owned()),
            }
        );
    }

    #[rstest]
    #[case("@scope/pkg", "@scope", "pkg")]
    #[case("org/mid/pkg", "org", "pkg")]
    #[case("a/b/c/d/e/z", "a", "z")]
    #[case("a/", "a", "")]
    #[case("/a", "", "a")]
    #[case("//", "", "")]
    fn multi_segment_keeps_first_and_last(
        #[case] input: &str,
        #[case] repo: &str,
        #[case] name: &str,
    ) {
        assert_eq!(
            parsed(input),
            PackageName {
                repo: Some(repo.to_owned()),
                name: Some(name.to_owned()),
            }
        );
    }

    #[test]
    fn empty_input_is_a_single_empty_segment() {
        assert_eq!(
            parsed(""),
            PackageName {
                repo: None,
                name: Some(String::new()),
            }
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let via_from_str: PackageName = "@scope/pkg".parse().unwrap();
        assert_eq!(via_from_str, parsed("@scope/pkg"));
    }

    #[rstest]
    #[case(PackageName::default(), r#"{"repo":null,"name":null}"#)]
    #[case(parsed("lodash"), r#"{"repo":null,"name":"lodash"}"#)]
    #[case(parsed("@scope/pkg"), r#"{"repo":"@scope","name":"pkg"}"#)]
    fn serializes_to_compact_json(#[case] package: PackageName, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&package).unwrap(), expected);
    }

    // `str::split` never yields zero pieces for any input, including the
    // empty string, so the `EmptySegments` branch is dead code through
    // `parse`. This pins the invariant that makes it so.
    #[test]
    fn zero_segments_is_unreachable_through_split() {
        assert_eq!("".split('/').count(), 1);
        assert!(PackageName::parse("").is_ok());
    }

    #[test]
    fn empty_segments_error_embeds_the_input() {
        let err = ParseNameError::EmptySegments("@scope/pkg".to_owned());
        assert_eq!(err.to_string(), "Invalid package name: @scope/pkg");
    }
}

//! Querying pip for outdated packages

use serde::Deserialize;

use cmd_common::runner::args;

use crate::error::UpdateResult;
use crate::pip::Pip;

/// One entry of `pip list --outdated --format=json`
///
/// Only the name is used; unknown fields (version, latest_version,
/// latest_filetype) are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct OutdatedPackage {
    /// Package name as pip reports it
    pub name: String,
}

/// Build the pip argument vector for the outdated listing
pub fn outdated_args(not_required: bool) -> Vec<String> {
    let mut list_args = args(["list", "--outdated", "--format=json"]);
    if not_required {
        list_args.push("--not-required".to_string());
    }
    list_args
}

/// Parse the captured JSON listing into package names, order preserved
///
/// # Errors
///
/// Invalid JSON or a missing `name` field is a hard error; it means pip's
/// output shape changed.
pub fn parse_outdated(json: &str) -> UpdateResult<Vec<String>> {
    let packages: Vec<OutdatedPackage> = serde_json::from_str(json)?;
    Ok(packages.into_iter().map(|pkg| pkg.name).collect())
}

/// Query pip for the outdated package names
pub async fn outdated_packages(pip: &Pip, not_required: bool) -> UpdateResult<Vec<String>> {
    let output = pip.run_capturing(&outdated_args(not_required)).await?;
    parse_outdated(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpdateError;

    const LISTING: &str = r#"[
        {"name": "requests", "version": "2.31.0", "latest_version": "2.32.3", "latest_filetype": "wheel"},
        {"name": "rich", "version": "13.0.0", "latest_version": "13.9.4", "latest_filetype": "wheel"}
    ]"#;

    #[test]
    fn names_are_extracted_in_pip_order() {
        let names = parse_outdated(LISTING).unwrap();
        assert_eq!(names, vec!["requests".to_string(), "rich".to_string()]);
    }

    #[test]
    fn empty_listing_is_an_empty_vec() {
        assert!(parse_outdated("[]").unwrap().is_empty());
    }

    #[test]
    fn non_json_output_is_a_hard_error() {
        let err = parse_outdated("WARNING: something went sideways").unwrap_err();
        assert!(matches!(err, UpdateError::MalformedListing(_)));
    }

    #[test]
    fn entries_without_a_name_are_a_hard_error() {
        let err = parse_outdated(r#"[{"version": "1.0"}]"#).unwrap_err();
        assert!(matches!(err, UpdateError::MalformedListing(_)));
    }

    #[test]
    fn not_required_restriction_is_appended() {
        assert_eq!(
            outdated_args(false),
            vec!["list", "--outdated", "--format=json"]
        );
        assert_eq!(
            outdated_args(true),
            vec!["list", "--outdated", "--format=json", "--not-required"]
        );
    }
}

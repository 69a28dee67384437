//! Python launcher version selector validation
//!
//! The Windows launcher accepts selectors like `-3` or `-3.12`. The same
//! syntax is accepted here as a positional argument and validated up front,
//! so a typo fails at parse time instead of being handed to the launcher.

use regex::Regex;

/// clap value parser for `-<digit>[.<digits>]` selectors
///
/// `-0` is accepted too; it selects the launcher's version listing rather
/// than an interpreter. Free-threaded specifiers (e.g. `-3.13t`) are not
/// supported.
pub fn parse_version_selector(raw: &str) -> Result<String, String> {
    let pattern = Regex::new(r"^-\d(\.\d+)?$").expect("selector pattern is valid");
    if pattern.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!(
            "invalid Python version selector '{raw}' (expected e.g. -3 or -3.12)"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_dotted_selectors_are_accepted() {
        for raw in ["-3", "-3.12", "-0", "-9.999"] {
            assert_eq!(parse_version_selector(raw).unwrap(), raw);
        }
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        for raw in ["3.12", "-3.12t", "-3.12.1", "-x", "--3", "-3.", "-"] {
            assert!(parse_version_selector(raw).is_err(), "accepted {raw}");
        }
    }
}

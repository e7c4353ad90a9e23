use std::fmt;

use regex::Regex;

use crate::error::{ReleaseNotesError, Result};

/// A release version with major, minor, and patch components.
///
/// Components are kept as the digit strings they were parsed from, so a
/// zero-padded form like `"4.01.0"` round-trips unchanged instead of being
/// normalized. Only `is_patch` reads a component numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: String,
    minor: String,
    patch: String,
}

impl Version {
    /// Parses a version from a strict `X.Y.Z` string.
    ///
    /// Exactly three dot-separated all-digit groups are accepted. Anything
    /// else (missing groups, extra groups, pre-release or build suffixes,
    /// surrounding text) is a version error.
    ///
    /// # Example
    /// ```
    /// use create_release_notes::version::Version;
    ///
    /// assert_eq!(Version::parse("4.1.3").unwrap().to_string(), "4.1.3");
    /// assert!(Version::parse("4.1.3-rc1").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)$")
            .ok()
            .and_then(|re| re.captures(value))
            .map(|caps| Version {
                major: caps[1].to_string(),
                minor: caps[2].to_string(),
                patch: caps[3].to_string(),
            })
            .ok_or_else(|| {
                ReleaseNotesError::version(format!(
                    "'{}' is not in the format X.Y.Z",
                    value
                ))
            })
    }

    /// True iff the patch component is greater than zero.
    pub fn is_patch(&self) -> bool {
        // Digits-only by construction, so any nonzero digit means > 0.
        self.patch.chars().any(|c| c != '0')
    }

    /// The version with its patch component reset to zero, naming the
    /// minor-release line this version belongs to.
    pub fn base_version(&self) -> String {
        format!("{}.{}.0", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::version::Version;

/// Marker line that opens the breaking changes section of the changelog.
/// The trailing newline is part of the literal: the marker must be a full
/// line of its own, not the last line of a file missing a final newline.
pub const CHANGES_MARKER: &str = "Breaking Changes\n";

/// Directory that receives generated release notes, relative to the root.
pub const NOTES_DIR: &str = "blackbox/docs/release_notes";

/// Changelog file name used when `--file` is not given.
pub const DEFAULT_CHANGELOG: &str = "CHANGES.txt";

/// Release date format for `--date` and rendered output.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Resolved paths and literals for one run.
///
/// The fixed values above are bound into a `Config` at startup; tests
/// build one against a scratch directory with [`Config::at_root`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Anchor directory for the changelog and the notes output.
    pub root: PathBuf,

    /// Absolute path of the release notes output directory.
    pub notes_dir: PathBuf,

    /// Exact line that starts the breaking changes section.
    pub marker: String,
}

impl Config {
    /// Builds a configuration anchored at an explicit root directory.
    pub fn at_root(root: PathBuf) -> Self {
        Config {
            notes_dir: root.join(NOTES_DIR),
            root,
            marker: CHANGES_MARKER.to_string(),
        }
    }

    /// Builds the configuration for the installed tool.
    ///
    /// The root is the parent of the directory holding the executable, so a
    /// binary installed under `<root>/devtools/` resolves the changelog and
    /// the notes directory against `<root>`. Falls back to the current
    /// directory when the executable path is too shallow to have one.
    pub fn discover() -> Result<Self> {
        let exe = env::current_exe()?;
        let root = match exe.parent().and_then(Path::parent) {
            Some(dir) => dir.to_path_buf(),
            None => env::current_dir()?,
        };
        Ok(Config::at_root(root))
    }

    /// Resolves the changelog argument against the root.
    ///
    /// Absolute paths are used as given.
    pub fn changelog_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Output file path for a target version: `<notes dir>/<version>.txt`.
    pub fn notes_path(&self, version: &Version) -> PathBuf {
        self.notes_dir.join(format!("{}.txt", version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_root_joins_notes_dir() {
        let config = Config::at_root(PathBuf::from("/repo"));
        assert_eq!(config.root, PathBuf::from("/repo"));
        assert_eq!(
            config.notes_dir,
            PathBuf::from("/repo/blackbox/docs/release_notes")
        );
        assert_eq!(config.marker, "Breaking Changes\n");
    }

    #[test]
    fn test_changelog_path_relative() {
        let config = Config::at_root(PathBuf::from("/repo"));
        assert_eq!(
            config.changelog_path("CHANGES.txt"),
            PathBuf::from("/repo/CHANGES.txt")
        );
    }

    #[test]
    fn test_changelog_path_absolute_passthrough() {
        let config = Config::at_root(PathBuf::from("/repo"));
        assert_eq!(
            config.changelog_path("/elsewhere/CHANGES.txt"),
            PathBuf::from("/elsewhere/CHANGES.txt")
        );
    }

    #[test]
    fn test_notes_path() {
        let config = Config::at_root(PathBuf::from("/repo"));
        let version = Version::parse("4.1.3").unwrap();
        assert_eq!(
            config.notes_path(&version),
            PathBuf::from("/repo/blackbox/docs/release_notes/4.1.3.txt")
        );
    }

    #[test]
    fn test_discover_has_usable_root() {
        let config = Config::discover().unwrap();
        assert!(config.notes_dir.ends_with(NOTES_DIR));
    }
}

//! Release notes preamble rendering.
//!
//! The output is reStructuredText consumed by the docs build, so the exact
//! line content and blank-line spacing are part of the contract. Lines are
//! collected into a vector that the writer joins with `"\n"`; entries that
//! end a paragraph carry their own trailing newline so the join produces
//! the blank line.

use chrono::NaiveDate;

use crate::config::DATE_FORMAT;
use crate::version::Version;

/// Renders the document header for a release.
///
/// Produces the cross-reference anchor, the title block, the release date
/// line, and the upgrade warning for the given target and minimum versions.
pub fn render(target: &Version, minimum: &Version, release_date: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(".. _version_{}:\n", target));

    lines.push("=============".to_string());
    lines.push(format!("Version {}", target));
    lines.push("=============\n".to_string());

    lines.push(format!(
        "Released on {}.\n\n",
        release_date.format(DATE_FORMAT)
    ));

    append_upgrade_warning(&mut lines, target, minimum);
    lines
}

/// Appends the upgrade note and backup warning blocks.
///
/// A patch release can be reached by a rolling upgrade from its own minor
/// line; a new minor or major release cannot be rolled onto at all.
fn append_upgrade_warning(lines: &mut Vec<String>, target: &Version, minimum: &Version) {
    lines.push(".. NOTE::\n".to_string());
    lines.push(format!(
        "   If you are upgrading a cluster, you must be running CrateDB {} or higher",
        minimum
    ));
    lines.push(format!("   before you upgrade to {}.\n", target));

    if target.is_patch() {
        lines.push(
            "   If you want to perform a :ref:`cluster_upgrade`, your current CrateDB version"
                .to_string(),
        );
        lines.push(format!(
            "   number must be :ref:`version_{}` or higher. Any upgrade from a version",
            target.base_version()
        ));
        lines.push("   prior to this will require a full cluster restart.\n".to_string());
    } else {
        lines.push(
            "   You cannot perform a :ref:`cluster_upgrade` to this version. Any upgrade to"
                .to_string(),
        );
        lines.push("   this version will require a full cluster restart.\n".to_string());
    }

    lines.push(".. warning::\n".to_string());
    lines.push("   Before upgrading, you should `back up your data`_.\n".to_string());
    lines.push(
        ".. _back up your data: https://crate.io/a/backing-up-and-restoring-crate/\n\n"
            .to_string(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_render_anchor_and_title() {
        let lines = render(&version("4.1.3"), &version("4.0.0"), date("2022/05/01"));
        assert_eq!(lines[0], ".. _version_4.1.3:\n");
        assert_eq!(lines[1], "=============");
        assert_eq!(lines[2], "Version 4.1.3");
        assert_eq!(lines[3], "=============\n");
        assert_eq!(lines[4], "Released on 2022/05/01.\n\n");
    }

    #[test]
    fn test_render_minimum_version_note() {
        let lines = render(&version("4.1.0"), &version("4.0.0"), date("2022/05/01"));
        let joined = lines.join("\n");
        assert!(joined
            .contains("you must be running CrateDB 4.0.0 or higher\n   before you upgrade to 4.1.0."));
    }

    #[test]
    fn test_render_patch_release_references_base_version() {
        let lines = render(&version("4.1.3"), &version("4.0.0"), date("2022/05/01"));
        let joined = lines.join("\n");
        assert!(joined.contains(":ref:`version_4.1.0` or higher"));
        assert!(joined.contains("Any upgrade from a version\n   prior to this will require a full cluster restart."));
        assert!(!joined.contains("You cannot perform"));
    }

    #[test]
    fn test_render_minor_release_has_no_rolling_upgrade_path() {
        let lines = render(&version("4.1.0"), &version("4.0.0"), date("2022/05/01"));
        let joined = lines.join("\n");
        assert!(joined.contains("You cannot perform a :ref:`cluster_upgrade` to this version."));
        assert!(!joined.contains(":ref:`version_4.1.0` or higher"));
    }

    #[test]
    fn test_render_backup_warning_link() {
        let lines = render(&version("5.0.0"), &version("4.8.0"), date("2023/01/16"));
        let last = lines.last().unwrap();
        assert_eq!(
            last,
            ".. _back up your data: https://crate.io/a/backing-up-and-restoring-crate/\n\n"
        );
    }

    #[test]
    fn test_render_joined_paragraph_breaks() {
        let lines = render(&version("4.1.3"), &version("4.0.0"), date("2022/05/01"));
        let joined = lines.join("\n");
        // Embedded newlines plus the join separator produce the blank lines
        // the docs build relies on.
        assert!(joined.starts_with(
            ".. _version_4.1.3:\n\n=============\nVersion 4.1.3\n=============\n\nReleased on 2022/05/01.\n\n\n.. NOTE::\n\n"
        ));
    }
}

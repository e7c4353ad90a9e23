//! Release notes generation workflow.
//!
//! Sequences the pipeline: render the header, copy the breaking changes
//! section out of the changelog, write the combined document, and report
//! where it landed. Progress output goes through the caller's writer so a
//! closed stdout surfaces as an I/O error instead of a panic.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::changelog;
use crate::config::{Config, DATE_FORMAT};
use crate::error::Result;
use crate::header;
use crate::version::Version;

/// Inputs for one generation run.
///
/// Mirrors the CLI arguments in a format decoupled from clap, so the
/// workflow can be driven from tests.
#[derive(Debug, Clone)]
pub struct NotesRequest {
    /// Version being released.
    pub version: Version,

    /// Minimum version required before upgrading to `version`.
    pub minimum: Version,

    /// Date shown in the "Released on" line.
    pub release_date: NaiveDate,

    /// Changelog file, resolved against the configured root.
    pub changelog: String,
}

/// Generates the release notes document and returns its path.
///
/// The changelog is read before the output file is created, so a missing
/// marker aborts the run without leaving a truncated file behind. The
/// output file `<notes dir>/<version>.txt` is overwritten if it exists.
pub fn create_release_notes(
    request: &NotesRequest,
    config: &Config,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    writeln!(out, "VERSION: {}", request.version)?;
    writeln!(
        out,
        "RELEASE DATE: {}\n",
        request.release_date.format(DATE_FORMAT)
    )?;

    let header_lines = header::render(&request.version, &request.minimum, request.release_date);
    let change_lines = changelog::extract_changes(
        &config.changelog_path(&request.changelog),
        &config.marker,
    )?;

    let path = config.notes_path(&request.version);
    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(header_lines.join("\n").as_bytes())?;
    // Change lines already carry their trailing newlines from the source.
    for line in &change_lines {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    writeln!(out, "Release Notes written at {}.", path.display())?;
    writeln!(
        out,
        "Please check the release notes for any irregularities or specific detail that is needed!"
    )?;

    Ok(path)
}

use std::fs;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};

/// Returns every changelog line from the marker to the end of the file.
///
/// Lines keep their trailing newlines so the section is copied into the
/// release notes byte for byte. The marker comparison is exact, trailing
/// newline included: a marker sitting on the final line of a file without
/// a closing newline does not match.
pub fn extract_changes(path: &Path, marker: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let start = lines
        .iter()
        .position(|line| *line == marker)
        .ok_or_else(|| ReleaseNotesError::MarkerNotFound {
            marker: marker.to_string(),
            path: path.to_path_buf(),
        })?;

    Ok(lines[start..].iter().map(|line| line.to_string()).collect())
}

//! Reading and writing the `.split` marker list.
//!
//! The format is one filename per line. Surrounding whitespace is trimmed
//! and blank lines are skipped on read; duplicates are kept. The list is
//! append-only between `add` invocations and removed after a successful
//! split.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Reserved name of the marker list inside the working directory.
pub const MARKER_FILE: &str = ".split";

/// Location of the marker list for a working directory.
pub fn marker_path(root: &Path) -> PathBuf {
    root.join(MARKER_FILE)
}

/// Open handle to the marker list, held for appending.
pub struct MarkerList {
    path: PathBuf,
    file: File,
}

impl MarkerList {
    /// Open the marker list under `root` for appending, creating it if
    /// absent.
    pub fn open_append(root: &Path) -> Result<Self> {
        let path = marker_path(root);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::OpenMarkers {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    /// Append one marker filename, newline-terminated.
    pub fn append(&mut self, name: &str) -> Result<()> {
        writeln!(self.file, "{name}").map_err(|source| Error::WriteMarker {
            path: self.path.clone(),
            source,
        })
    }
}

/// Read the marker list: one trimmed, non-blank line per marker.
///
/// Absence of the file is a read failure like any other; `split` requires a
/// prior `add`.
pub fn read_markers(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadMarkers {
        path: path.to_path_buf(),
        source,
    })?;
    let markers: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = markers.len(), "markers loaded");
    Ok(markers)
}

/// Remove the marker list after a successful split.
pub fn remove_markers(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| Error::RemoveMarkers {
        path: path.to_path_buf(),
        source,
    })
}

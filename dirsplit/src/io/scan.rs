//! Enumeration of the file universe for a split.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Collect the names of non-directory entries in `dir`, skipping `exclude`.
///
/// The listing order is whatever the OS yields; callers sort. File names
/// must decode as UTF-8: an undecodable name could never match a marker,
/// and silently dropping it would lose the file from the partition result,
/// so it is reported as an enumeration failure instead.
pub fn list_files(dir: &Path, exclude: &str) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).map_err(|source| read_dir_error(dir, source))?;
    for entry in entries {
        let entry = entry.map_err(|source| read_dir_error(dir, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| read_dir_error(dir, source))?;
        if file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|raw| {
            read_dir_error(
                dir,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non-UTF-8 file name {raw:?}"),
                ),
            )
        })?;
        if name == exclude {
            continue;
        }
        files.push(name);
    }
    debug!(dir = %dir.display(), count = files.len(), "file universe scanned");
    Ok(files)
}

fn read_dir_error(dir: &Path, source: io::Error) -> Error {
    Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    }
}

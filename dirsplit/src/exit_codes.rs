//! Stable exit codes for CLI failure classification.
//!
//! Scripts branch on these codes to distinguish failure kinds, so the
//! values must not change between releases.

use crate::error::Error;

/// Command succeeded.
pub const OK: i32 = 0;
/// Marker list could not be opened for append.
pub const OPEN_MARKERS: i32 = 10;
/// Appending a filename to the marker list failed.
pub const WRITE_MARKER: i32 = 11;
/// Working directory could not be enumerated.
pub const READ_DIR: i32 = 12;
/// Marker list could not be read.
pub const READ_MARKERS: i32 = 13;
/// An output directory could not be created.
pub const CREATE_DIR: i32 = 14;
/// Moving a file into its output directory failed.
pub const MOVE_FILE: i32 = 15;
/// An `add` argument does not name an existing regular file.
pub const MISSING_FILE: i32 = 16;
/// An `add` argument names a directory.
pub const IS_DIRECTORY: i32 = 17;
/// Working directory could not be resolved.
pub const CURRENT_DIR: i32 = 18;
/// Marker list exists but holds no usable entries.
pub const EMPTY_MARKERS: i32 = 19;
/// A file in the working directory is named like an output directory.
pub const DIR_COLLISION: i32 = 20;
/// Marker list could not be removed after a successful split.
pub const REMOVE_MARKERS: i32 = 21;

/// Map an error to its process exit code.
pub fn for_error(err: &Error) -> i32 {
    match err {
        Error::OpenMarkers { .. } => OPEN_MARKERS,
        Error::WriteMarker { .. } => WRITE_MARKER,
        Error::ReadDir { .. } => READ_DIR,
        Error::ReadMarkers { .. } => READ_MARKERS,
        Error::CreateDir { .. } => CREATE_DIR,
        Error::MoveFile { .. } => MOVE_FILE,
        Error::MissingFile { .. } => MISSING_FILE,
        Error::IsDirectory { .. } => IS_DIRECTORY,
        Error::CurrentDir { .. } => CURRENT_DIR,
        Error::EmptyMarkers { .. } => EMPTY_MARKERS,
        Error::DirCollision { .. } => DIR_COLLISION,
        Error::RemoveMarkers { .. } => REMOVE_MARKERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn codes_are_distinct_and_nonzero() {
        let codes = [
            OPEN_MARKERS,
            WRITE_MARKER,
            READ_DIR,
            READ_MARKERS,
            CREATE_DIR,
            MOVE_FILE,
            MISSING_FILE,
            IS_DIRECTORY,
            CURRENT_DIR,
            EMPTY_MARKERS,
            DIR_COLLISION,
            REMOVE_MARKERS,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, OK);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn maps_error_kind_to_its_code() {
        let err = Error::EmptyMarkers {
            path: PathBuf::from(".split"),
        };
        assert_eq!(for_error(&err), EMPTY_MARKERS);

        let err = Error::MoveFile {
            path: PathBuf::from("one"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(for_error(&err), MOVE_FILE);
    }
}

//! Crate-level error type with one variant per failure classification.
//!
//! Commands return kind-tagged errors carrying the path involved and the
//! underlying OS cause; the mapping from kind to process exit code lives in
//! [`crate::exit_codes`], at the binary boundary only.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open marker list {}: {source}", path.display())]
    OpenMarkers { path: PathBuf, source: io::Error },

    #[error("failed to append to marker list {}: {source}", path.display())]
    WriteMarker { path: PathBuf, source: io::Error },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read marker list {}: {source}", path.display())]
    ReadMarkers { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to move {}: {source}", path.display())]
    MoveFile { path: PathBuf, source: io::Error },

    #[error("{} is not an existing regular file: {source}", path.display())]
    MissingFile { path: PathBuf, source: io::Error },

    #[error("cannot add directory {}", path.display())]
    IsDirectory { path: PathBuf },

    #[error("failed to resolve working directory: {source}")]
    CurrentDir { source: io::Error },

    #[error("marker list {} has no usable entries", path.display())]
    EmptyMarkers { path: PathBuf },

    #[error("{} collides with an output directory name", path.display())]
    DirCollision { path: PathBuf },

    #[error("failed to remove marker list {}: {source}", path.display())]
    RemoveMarkers { path: PathBuf, source: io::Error },
}

//! Filesystem helpers for dirsplit commands.

pub mod markers;
pub mod scan;

//! Test-only helpers for staging working directories.

use std::fs;
use std::path::Path;

use crate::io::markers::MARKER_FILE;

/// Create an empty file named `name` under `dir`.
pub fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").expect("create file");
}

/// Create an empty file for each name under `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        touch(dir, name);
    }
}

/// Seed a marker list under `dir` with one name per line.
pub fn seed_markers(dir: &Path, names: &[&str]) {
    let mut contents = names.join("\n");
    contents.push('\n');
    fs::write(dir.join(MARKER_FILE), contents).expect("write marker list");
}

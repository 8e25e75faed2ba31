//! The `split` command: partition the working directory at the recorded
//! markers and move each partition into its own numbered directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::partition::partition;
use crate::error::{Error, Result};
use crate::io::markers::{self, MARKER_FILE};
use crate::io::scan::list_files;

/// Prefix of the numbered output directories (`split_0`, `split_1`, ...).
pub const DIR_PREFIX: &str = "split_";

/// Summary of a completed split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Output directories created.
    pub partitions: usize,
    /// Files moved.
    pub files: usize,
}

/// Partition the files under `root` and move them into `split_<i>`
/// directories, consuming the marker list on success.
///
/// Aborts on the first failure without cleanup: already-moved files stay
/// where they are, and the marker list is removed only after every move
/// succeeded. Markers naming no file in the directory are ignored.
pub fn split(root: &Path) -> Result<SplitReport> {
    let mut all_files = list_files(root, MARKER_FILE)?;
    all_files.sort();

    let marker_path = markers::marker_path(root);
    let mut marker_names = markers::read_markers(&marker_path)?;
    if marker_names.is_empty() {
        return Err(Error::EmptyMarkers { path: marker_path });
    }
    marker_names.sort();

    let partitions = partition(&all_files, &marker_names);
    reject_collisions(root, &all_files, partitions.len())?;

    let mut moved = 0;
    for (index, names) in partitions.iter().enumerate() {
        let out_dir = root.join(format!("{DIR_PREFIX}{index}"));
        fs::create_dir_all(&out_dir).map_err(|source| Error::CreateDir {
            path: out_dir.clone(),
            source,
        })?;
        for name in names {
            let from = root.join(name);
            fs::rename(&from, out_dir.join(name)).map_err(|source| Error::MoveFile {
                path: from.clone(),
                source,
            })?;
            moved += 1;
        }
        debug!(dir = %out_dir.display(), files = names.len(), "partition populated");
    }

    markers::remove_markers(&marker_path)?;
    info!(partitions = partitions.len(), files = moved, "split finished");
    Ok(SplitReport {
        partitions: partitions.len(),
        files: moved,
    })
}

/// Refuse to run when a file in the universe is named like an output
/// directory this split would create; the later move would clobber it.
///
/// `all_files` must be sorted. Only indices actually used by this run are
/// reserved: a file named `split_9` is fine when two partitions exist.
fn reject_collisions(root: &Path, all_files: &[String], partition_count: usize) -> Result<()> {
    for index in 0..partition_count {
        let reserved = format!("{DIR_PREFIX}{index}");
        if all_files.binary_search(&reserved).is_ok() {
            return Err(Error::DirCollision {
                path: root.join(reserved),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::markers::marker_path;
    use crate::test_support::{seed_markers, touch, touch_all};

    #[test]
    fn moves_each_partition_into_its_own_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a", "b", "c"]);
        seed_markers(temp.path(), &["b"]);

        let report = split(temp.path()).expect("split");
        assert_eq!(
            report,
            SplitReport {
                partitions: 2,
                files: 3
            }
        );

        assert!(temp.path().join("split_0").join("a").is_file());
        assert!(temp.path().join("split_1").join("b").is_file());
        assert!(temp.path().join("split_1").join("c").is_file());
        assert!(!marker_path(temp.path()).exists());
    }

    #[test]
    fn missing_marker_list_is_a_read_markers_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "a");

        let err = split(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ReadMarkers { .. }));
    }

    #[test]
    fn blank_marker_list_is_an_empty_markers_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "a");
        fs::write(marker_path(temp.path()), "\n   \n").expect("write");

        let err = split(temp.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyMarkers { .. }));
    }

    #[test]
    fn marker_without_matching_file_is_ignored() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a", "b"]);
        seed_markers(temp.path(), &["gone"]);

        let report = split(temp.path()).expect("split");
        assert_eq!(
            report,
            SplitReport {
                partitions: 1,
                files: 2
            }
        );
        assert!(temp.path().join("split_0").join("a").is_file());
        assert!(temp.path().join("split_0").join("b").is_file());
    }

    #[test]
    fn subdirectories_are_not_part_of_the_universe() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a", "b"]);
        fs::create_dir(temp.path().join("subdir")).expect("mkdir");
        seed_markers(temp.path(), &["b"]);

        split(temp.path()).expect("split");
        assert!(temp.path().join("subdir").is_dir());
        assert!(!temp.path().join("split_0").join("subdir").exists());
    }

    #[test]
    fn file_named_like_an_output_directory_is_rejected_up_front() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a", "split_0"]);
        seed_markers(temp.path(), &["a"]);

        let err = split(temp.path()).unwrap_err();
        assert!(matches!(err, Error::DirCollision { .. }));
        // Nothing moved.
        assert!(temp.path().join("a").is_file());
        assert!(temp.path().join("split_0").is_file());
        assert!(marker_path(temp.path()).exists());
    }

    #[test]
    fn file_named_after_an_unused_output_index_is_moved_normally() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a", "split_9"]);
        seed_markers(temp.path(), &["a"]);

        let report = split(temp.path()).expect("split");
        assert_eq!(report.partitions, 1);
        assert!(temp.path().join("split_0").join("split_9").is_file());
    }

    #[test]
    fn pre_existing_output_directory_is_reused() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch_all(temp.path(), &["a"]);
        fs::create_dir(temp.path().join("split_0")).expect("mkdir");
        seed_markers(temp.path(), &["a"]);

        split(temp.path()).expect("split");
        assert!(temp.path().join("split_0").join("a").is_file());
    }
}

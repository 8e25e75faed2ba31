//! Partitioning of a sorted file universe at marker boundaries.

use std::collections::HashSet;

/// Group `all_files` into contiguous partitions, opening a new partition at
/// every filename that appears in `markers`.
///
/// Both slices must be sorted ascending by the caller; the result preserves
/// the order of `all_files`, so concatenating the partitions reproduces the
/// input exactly. Files preceding the first marker form a leading partition
/// of their own. A marker naming no file in `all_files` contributes nothing,
/// and with no matching markers at all the whole universe lands in a single
/// partition. Total over its inputs; never produces an empty partition.
pub fn partition(all_files: &[String], markers: &[String]) -> Vec<Vec<String>> {
    let marker_set: HashSet<&str> = markers.iter().map(String::as_str).collect();

    let mut partitions = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for file in all_files {
        if marker_set.contains(file.as_str()) && !current.is_empty() {
            partitions.push(std::mem::take(&mut current));
        }
        current.push(file.clone());
    }
    if !current.is_empty() {
        partitions.push(current);
    }
    partitions
}

//! The `add` command: record marker filenames in the marker list.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::markers::MarkerList;

/// Validate each name and append it to the marker list under `root`.
///
/// Names are processed in argument order and each append completes before
/// the next name is examined, so a failure partway leaves the earlier
/// appends in place. Every name must refer to an existing non-directory
/// entry.
pub fn add(root: &Path, names: &[String]) -> Result<()> {
    let mut markers = MarkerList::open_append(root)?;
    for name in names {
        let path = root.join(name);
        let metadata = fs::metadata(&path).map_err(|source| Error::MissingFile {
            path: path.clone(),
            source,
        })?;
        if metadata.is_dir() {
            return Err(Error::IsDirectory { path });
        }
        markers.append(name)?;
        debug!(name = %name, "marker recorded");
    }
    Ok(())
}

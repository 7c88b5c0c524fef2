//! Artifact discovery: find directories holding packaged models.

use crate::error::Error;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively enumerate files under `root` ending with `suffix` and return
/// the deduplicated set of their parent directories.
///
/// The artifact's logical unit is the directory that holds the packaged file,
/// not the file itself. The returned order carries no meaning; parallel
/// execution makes completion order nondeterministic regardless.
///
/// Unreadable subtrees are skipped with a warning; only a missing or
/// non-directory `root` is an error.
pub fn locate(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::InvalidPath {
            path: root.to_path_buf(),
        });
    }

    let mut dirs = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry during discovery");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            if let Some(parent) = entry.path().parent() {
                dirs.insert(parent.to_path_buf());
            }
        }
    }
    Ok(dirs.into_iter().collect())
}

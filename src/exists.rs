use std::fs;
use std::io;
use std::path::Path;

use crate::Result;

/// Check whether `path` resolves to any filesystem entry.
///
/// With `follow` set, terminal symlinks are resolved, so a dangling link
/// reports `false`; without it the link entry itself counts as existing.
/// A missing entry is the expected negative outcome, not an error; every
/// other stat failure is returned to the caller.
pub fn exists(path: &Path, follow: bool) -> Result<bool> {
    let metadata = if follow {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };

    match metadata {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => {
            log::debug!("stat failed for {}: {}", path.display(), err);
            Err(err.into())
        }
    }
}

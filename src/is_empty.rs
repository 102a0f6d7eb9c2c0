use std::fs;
use std::io;
use std::path::Path;

use crate::Result;

/// Check whether the directory at `path` contains zero entries.
///
/// Only the top level is consulted: any entry at all, including hidden
/// files, zero-byte files, and empty subdirectories, makes the directory
/// non-empty. With `ignore_missing` set, a directory that does not exist
/// counts as empty. Every other enumeration failure, including `path`
/// being a regular file, is returned to the caller regardless of the
/// policy.
pub fn is_empty(path: &Path, ignore_missing: bool) -> Result<bool> {
    let mut entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound && ignore_missing => {
            log::debug!("missing directory {} treated as empty", path.display());
            return Ok(true);
        }
        Err(err) => {
            log::debug!("read_dir failed for {}: {}", path.display(), err);
            return Err(err.into());
        }
    };

    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(err)) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_new_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_empty(temp_dir.path(), true).unwrap());
        assert!(is_empty(temp_dir.path(), false).unwrap());
    }

    #[test]
    fn test_zero_byte_file_makes_directory_non_empty() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("empty.bin")).unwrap();

        assert!(!is_empty(temp_dir.path(), true).unwrap());
    }

    #[test]
    fn test_hidden_entry_makes_directory_non_empty() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join(".hidden")).unwrap();

        assert!(!is_empty(temp_dir.path(), true).unwrap());
    }

    #[test]
    fn test_empty_subdirectory_makes_directory_non_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        assert!(!is_empty(temp_dir.path(), true).unwrap());
    }

    #[test]
    fn test_missing_directory_follows_policy() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        assert!(is_empty(&missing, true).unwrap());
        assert!(is_empty(&missing, false).is_err());
    }

    #[test]
    fn test_regular_file_is_an_error_under_both_policies() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        File::create(&file_path).unwrap();

        assert!(is_empty(&file_path, true).is_err());
        assert!(is_empty(&file_path, false).is_err());
    }

    #[test]
    fn test_repeated_queries_agree() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("entry")).unwrap();

        for _ in 0..3 {
            assert!(!is_empty(temp_dir.path(), true).unwrap());
        }
    }
}

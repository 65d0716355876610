//! Path enumeration for batch commands.
//!
//! Every command operates on the same file set: the supplied path itself if
//! it is a regular file, or every regular file under it if it is a
//! directory. Enumeration is eager because the commands are batch-oriented;
//! the whole set is known before any digesting starts.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// The supplied top-level path cannot be enumerated.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The path does not exist, or is neither a regular file nor a directory.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Collect the regular files reachable from `path`.
///
/// - A regular file yields exactly itself.
/// - A directory yields every regular file under it, recursively. Symlinks
///   are not followed (walkdir's default); directory entries themselves are
///   excluded. Unreadable subdirectories are logged and skipped so one bad
///   entry does not sink the batch.
///
/// # Errors
///
/// Returns [`WalkError::InvalidPath`] if `path` does not exist or is a
/// special file type. Callers treat this as a no-op, not a crash.
pub fn enumerate(path: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(WalkError::InvalidPath(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", path.display(), e);
            }
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_enumerate_single_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        File::create(&path).unwrap().write_all(b"x").unwrap();

        let files = enumerate(&path).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_enumerate_directory_recursive() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        let sub = dir.path().join("nested/deeper");
        fs::create_dir_all(&sub).unwrap();
        File::create(sub.join("c.txt")).unwrap();

        let mut files = enumerate(dir.path()).unwrap();
        files.sort();
        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|p| p.ends_with("a.txt")));
        assert!(files.iter().any(|p| p.ends_with("b.txt")));
        assert!(files.iter().any(|p| p.ends_with("nested/deeper/c.txt")));
    }

    #[test]
    fn test_enumerate_excludes_directory_entries() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("only_dirs")).unwrap();

        let files = enumerate(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_enumerate_nonexistent_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = enumerate(&missing).unwrap_err();
        assert!(matches!(err, WalkError::InvalidPath(p) if p == missing));
    }

    #[test]
    fn test_invalid_path_message_names_the_path() {
        let err = WalkError::InvalidPath(PathBuf::from("/no/such/place"));
        assert!(err.to_string().contains("/no/such/place"));
    }
}

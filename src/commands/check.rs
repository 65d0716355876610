//! The `check` command: compare current digests to the stored baseline.
//!
//! Read-only: the store is never mutated or saved here.

use super::store_key;
use crate::digest::{digest_file, DigestError};
use crate::error::ExitCode;
use crate::store::HashStore;
use crate::walker;
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Verification status of a single tracked (or untracked) file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The current digest matches the stored baseline.
    Unmodified,
    /// The digests differ, or the file could not be read for comparison.
    Modified,
    /// No baseline exists for this path.
    NotInitialized,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Unmodified => write!(f, "Unmodified"),
            CheckStatus::Modified => write!(f, "Modified (hash mismatch)"),
            CheckStatus::NotInitialized => write!(f, "Not initialized"),
        }
    }
}

/// Verification outcome for one file.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The file that was verified.
    pub path: PathBuf,
    /// Comparison result against the stored baseline.
    pub status: CheckStatus,
    /// Read failure while computing the current digest, if any.
    pub error: Option<DigestError>,
}

/// Compare each file's current digest against the store.
///
/// A tracked file that cannot be read has no current digest; the comparison
/// fails and it reports `Modified`, never a silent `Unmodified`. An
/// untracked file reports `NotInitialized` whether readable or not.
pub(crate) fn verify_files(store: &HashStore, files: &[PathBuf]) -> Vec<CheckOutcome> {
    files
        .iter()
        .map(|file| {
            let stored = store.digest_for(&store_key(file));
            let (current, error) = match digest_file(file) {
                Ok(digest) => (Some(digest), None),
                Err(e) => (None, Some(e)),
            };
            let status = match stored {
                None => CheckStatus::NotInitialized,
                Some(baseline) if current.as_deref() == Some(baseline) => CheckStatus::Unmodified,
                Some(_) => CheckStatus::Modified,
            };
            CheckOutcome {
                path: file.clone(),
                status,
                error,
            }
        })
        .collect()
}

/// Report the verification status of every file reachable from `target`.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded (corrupt file); per-file
/// read failures are reported inline and yield [`ExitCode::PartialSuccess`].
pub fn run(store_path: &Path, target: &Path) -> Result<ExitCode> {
    let store = HashStore::load(store_path.to_path_buf())?;

    let files = match walker::enumerate(target) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::InvalidPath);
        }
    };

    let mut failures = 0;
    for outcome in verify_files(&store, &files) {
        if let Some(e) = &outcome.error {
            eprintln!("{e}");
            failures += 1;
        }
        println!("{} → Status: {}", outcome.path.display(), outcome.status);
    }

    if failures == 0 {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::PartialSuccess)
    }
}

//! Command handlers for the three user-facing operations.
//!
//! Every command follows the same single-pass batch shape:
//! load the store, enumerate the target, digest each file, then (for the
//! mutating commands) save the store once at the end. Per-file digest
//! failures are collected as outcomes and reported by the handler; they
//! never abort the batch. If the process dies mid-batch, no mutation from
//! that batch reaches disk.
//!
//! # Architecture
//!
//! - [`init`]: record baseline digests
//! - [`check`]: compare current digests to the baseline, read-only
//! - [`update`]: overwrite stored digests with current ones

pub mod check;
pub mod init;
pub mod update;

use crate::digest::{digest_file, DigestError};
use crate::error::ExitCode;
use crate::store::HashStore;
use std::path::{Path, PathBuf};

/// The key under which a file is tracked in the store.
///
/// Paths are stored as enumerated (no canonicalization), matching what the
/// operator passed on the command line.
pub(crate) fn store_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Outcome of digesting a batch of files into the store.
#[derive(Debug, Default)]
pub struct DigestBatch {
    /// Files whose digest was computed and recorded.
    pub recorded: Vec<PathBuf>,
    /// Files that could not be read, with the reason.
    pub failed: Vec<DigestError>,
}

impl DigestBatch {
    /// Exit code for a completed batch: partial success if anything failed.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.failed.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::PartialSuccess
        }
    }
}

/// Digest each file and record it in the store, collecting failures.
///
/// Unreadable files are skipped for store-mutation purposes; the store is
/// not saved here, callers persist once at the end of the batch.
pub(crate) fn record_digests(store: &mut HashStore, files: &[PathBuf]) -> DigestBatch {
    let mut batch = DigestBatch::default();
    for file in files {
        match digest_file(file) {
            Ok(digest) => {
                log::debug!("Digested {}: {}", file.display(), digest);
                store.record(store_key(file), digest);
                batch.recorded.push(file.clone());
            }
            Err(e) => {
                log::debug!("Skipping {}: {}", file.display(), e.source);
                batch.failed.push(e);
            }
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_record_digests_records_all_readable_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        File::create(&a).unwrap().write_all(b"one").unwrap();
        File::create(&b).unwrap().write_all(b"two").unwrap();

        let mut store = HashStore::load(dir.path().join("hashes.json")).unwrap();
        let batch = record_digests(&mut store, &[a.clone(), b.clone()]);

        assert_eq!(batch.recorded.len(), 2);
        assert!(batch.failed.is_empty());
        assert_eq!(batch.exit_code(), ExitCode::Success);
        assert!(store.digest_for(&store_key(&a)).is_some());
        assert!(store.digest_for(&store_key(&b)).is_some());
    }

    #[test]
    fn test_record_digests_continues_past_unreadable_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let missing = dir.path().join("missing.txt");
        File::create(&good).unwrap().write_all(b"ok").unwrap();

        let mut store = HashStore::load(dir.path().join("hashes.json")).unwrap();
        let batch = record_digests(&mut store, &[missing.clone(), good.clone()]);

        assert_eq!(batch.recorded, vec![good.clone()]);
        assert_eq!(batch.failed.len(), 1);
        assert_eq!(batch.failed[0].path, missing);
        assert_eq!(batch.exit_code(), ExitCode::PartialSuccess);
        // The unreadable file must not gain a store entry.
        assert!(store.digest_for(&store_key(&missing)).is_none());
    }
}

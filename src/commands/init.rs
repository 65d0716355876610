//! The `init` command: record baseline digests.

use super::record_digests;
use crate::error::ExitCode;
use crate::store::HashStore;
use crate::walker;
use anyhow::Result;
use std::path::Path;

/// Compute and store digests for every file reachable from `target`.
///
/// Existing entries for the same paths are overwritten. The store is saved
/// once at the end, and only if at least one file was digested.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded (corrupt file) or saved;
/// per-file read failures are reported and do not fail the command.
pub fn run(store_path: &Path, target: &Path) -> Result<ExitCode> {
    let mut store = HashStore::load(store_path.to_path_buf())?;

    let files = match walker::enumerate(target) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::InvalidPath);
        }
    };

    let batch = record_digests(&mut store, &files);
    for failure in &batch.failed {
        eprintln!("{failure}");
    }

    if batch.recorded.is_empty() {
        println!("No valid files found.");
    } else {
        store.save()?;
        println!("Hashes stored successfully.");
    }

    Ok(batch.exit_code())
}

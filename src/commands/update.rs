//! The `update` command: accept current contents as the new baseline.

use super::record_digests;
use crate::error::ExitCode;
use crate::store::HashStore;
use crate::walker;
use anyhow::Result;
use std::path::Path;

/// Recompute and overwrite the stored digest for every file reachable from
/// `target`, reporting each file individually. The store is saved once at
/// the end of the batch.
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
    for path in &batch.recorded {
        println!("{} → Hash updated successfully", path.display());
    }

    if !batch.recorded.is_empty() {
        store.save()?;
    }

    Ok(batch.exit_code())
}

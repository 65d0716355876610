//! The persisted hash store.
//!
//! The store is a single JSON file mapping path strings to lowercase-hex
//! SHA-256 digests. It is loaded fresh at the start of every command, mutated
//! in memory, and written back at most once per invocation as a whole-file
//! replace. No locking is done: concurrent invocations racing on the same
//! store file are last-writer-wins and out of contract.
//!
//! The store location is an explicit constructor argument rather than a
//! hard-coded global, so tests point at an isolated temporary file;
//! [`HashStore::default_path`] supplies the conventional location under the
//! user's home directory.

use directories::BaseDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the store, under [`STORE_DIR_NAME`] in the home directory.
const STORE_FILE_NAME: &str = "hashes.json";

/// Directory under the user's home that holds the store.
const STORE_DIR_NAME: &str = ".hashguard";

/// Errors from loading or saving the hash store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("Failed to read hash store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but does not deserialize into a path→digest map.
    ///
    /// Corruption is fatal rather than treated as an empty store: silently
    /// discarding the baseline would let a tamperer erase the evidence of
    /// tampering. The file is small and human-readable, so the operator can
    /// inspect or delete it by hand.
    #[error("Hash store {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store file could not be written.
    #[error("Failed to write hash store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined for the default location.
    #[error("Could not determine the home directory for the hash store")]
    NoHomeDir,
}

/// The path→digest mapping plus its on-disk location.
///
/// Keys are path strings as enumerated (platform-dependent separators); at
/// most one digest is kept per path. Entries serialize in sorted key order,
/// so rewriting an unchanged store produces identical bytes.
#[derive(Debug)]
pub struct HashStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl HashStore {
    /// The conventional store location: `~/.hashguard/hashes.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoHomeDir`] if the home directory cannot be
    /// resolved from the environment.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let base = BaseDirs::new().ok_or(StoreError::NoHomeDir)?;
        Ok(base.home_dir().join(STORE_DIR_NAME).join(STORE_FILE_NAME))
    }

    /// Load the store from `path`.
    ///
    /// An absent or empty store file is a normal first-use case and yields an
    /// empty mapping, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file exists but cannot be read,
    /// or [`StoreError::Corrupt`] if its contents are not a valid
    /// path→digest map.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        log::debug!(
            "Loaded hash store from {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    /// Write the full mapping back to the store file, replacing prior
    /// contents. Parent directories are created if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the directory or file cannot be
    /// written.
    pub fn save(&self) -> Result<(), StoreError> {
        let wrap = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }

        // Serialization of a BTreeMap<String, String> cannot fail.
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;
        fs::write(&self.path, json).map_err(wrap)?;

        log::debug!(
            "Saved hash store to {} ({} entries)",
            self.path.display(),
            self.entries.len()
        );
        Ok(())
    }

    /// The stored digest for a path, if any.
    #[must_use]
    pub fn digest_for(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Record a digest for a path, overwriting any previous entry.
    pub fn record(&mut self, path: String, digest: String) {
        self.entries.insert(path, digest);
    }

    /// Number of tracked files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store tracks no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

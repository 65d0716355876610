//! Streaming SHA-256 file digesting.
//!
//! The digest calculator is pure: it never prints and it reports read
//! failures through [`DigestError`] so callers can collect them into a
//! batch report instead of aborting. Files are read in fixed-size chunks,
//! so memory use is independent of file size.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Read chunk size for streaming digests.
///
/// Any chunk size produces the same digest; 8 KiB is a reasonable default
/// for buffered sequential reads.
pub const CHUNK_SIZE: usize = 8192;

/// A file could not be read while computing its digest.
#[derive(Debug, Error)]
#[error("Error reading {}: {source}", path.display())]
pub struct DigestError {
    /// The file that failed to digest.
    pub path: PathBuf,
    /// The underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Compute the SHA-256 digest of a file's contents.
///
/// Returns the digest as a 64-character lowercase hex string.
///
/// # Errors
///
/// Returns [`DigestError`] if the file cannot be opened or a read fails
/// partway through (permission denied, file removed mid-read, etc.).
pub fn digest_file(path: &Path) -> Result<String, DigestError> {
    let wrap = |source| DigestError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(wrap)?;
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut chunk).map_err(wrap)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    /// SHA-256 of the ASCII string "hello".
    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn test_digest_known_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        File::create(&path).unwrap().write_all(b"hello").unwrap();

        assert_eq!(digest_file(&path).unwrap(), HELLO_SHA256);
    }

    #[test]
    fn test_digest_deterministic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        File::create(&path).unwrap().write_all(&[0xAB; 1000]).unwrap();

        let first = digest_file(&path).unwrap();
        let second = digest_file(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_digest_spans_multiple_chunks() {
        // Content larger than CHUNK_SIZE exercises the streaming loop.
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let content = vec![0x42u8; CHUNK_SIZE * 3 + 17];
        File::create(&path).unwrap().write_all(&content).unwrap();

        let streamed = digest_file(&path).unwrap();
        let whole = format!("{:x}", Sha256::digest(&content));
        assert_eq!(streamed, whole);
    }

    #[test]
    fn test_digest_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        File::create(&path).unwrap();

        // SHA-256 of zero bytes.
        assert_eq!(
            digest_file(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = digest_file(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f");
        File::create(&path).unwrap().write_all(b"xyz").unwrap();

        let digest = digest_file(&path).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

//! Exit codes for the hashguard CLI.

/// Exit codes for the hashguard application.
///
/// - 0: Success (command completed, all files processed)
/// - 1: General error (corrupt store, store write failure, other unexpected failure)
/// - 2: Invalid path (the supplied path is neither a file nor a directory)
/// - 3: Partial success (command completed but some files could not be read)
///
/// The original tool exited 0 on an invalid path; the distinct code 2 is a
/// deliberate improvement so scripts can tell "checked and fine" from
/// "never looked".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: every enumerated file was processed.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// Invalid path: the top-level path could not be enumerated.
    InvalidPath = 2,
    /// Partial success: the batch finished but some files were unreadable.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "HG000",
            Self::GeneralError => "HG001",
            Self::InvalidPath => "HG002",
            Self::PartialSuccess => "HG003",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidPath.as_i32(), 2);
        assert_eq!(ExitCode::PartialSuccess.as_i32(), 3);
    }

    #[test]
    fn test_code_prefixes_are_distinct() {
        let prefixes = [
            ExitCode::Success.code_prefix(),
            ExitCode::GeneralError.code_prefix(),
            ExitCode::InvalidPath.code_prefix(),
            ExitCode::PartialSuccess.code_prefix(),
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

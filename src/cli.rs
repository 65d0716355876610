//! Command-line interface definitions for hashguard.
//!
//! This module defines all CLI arguments and subcommands using the clap
//! derive API: global options (verbosity, store location) and one subcommand
//! per operation.
//!
//! # Example
//!
//! ```bash
//! # Record baseline digests for a log directory
//! hashguard init /var/log/myapp
//!
//! # Later, report what changed
//! hashguard check /var/log/myapp
//!
//! # Accept the current contents as the new baseline
//! hashguard update /var/log/myapp
//!
//! # Verbose mode for debugging
//! hashguard -v check /var/log/myapp
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// File integrity verifier using SHA-256.
///
/// hashguard records a baseline digest for each tracked file in a local
/// store and reports on later invocations whether the contents changed.
#[derive(Debug, Parser)]
#[command(name = "hashguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the hash store file
    ///
    /// If not specified, ~/.hashguard/hashes.json is used.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for hashguard.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and store baseline digests for a file or directory
    Init(TargetArgs),
    /// Compare current digests against the stored baseline
    Check(TargetArgs),
    /// Recompute and overwrite stored digests for a file or directory
    Update(TargetArgs),
}

/// The positional target shared by all subcommands.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// File to track, or directory whose files are tracked recursively
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

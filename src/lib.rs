//! HashGuard - File Integrity Verifier
//!
//! A CLI tool that records SHA-256 digests of files in a local JSON store
//! and reports on later runs whether tracked files have changed. Intended
//! for lightweight tamper detection on logs and other files, without a
//! full intrusion-detection stack.

pub mod cli;
pub mod commands;
pub mod digest;
pub mod error;
pub mod logging;
pub mod store;
pub mod walker;

use anyhow::Result;
use cli::{Cli, Commands};
use error::ExitCode;
use store::HashStore;

/// Execute the parsed CLI command and return its exit code.
///
/// The store location comes from `--store` when given, otherwise the
/// conventional path under the user's home directory.
///
/// # Errors
///
/// Returns an error for failures the commands treat as fatal: a corrupt
/// store file, a store write failure, or an unresolvable home directory.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let store_path = match cli.store {
        Some(path) => path,
        None => HashStore::default_path()?,
    };
    log::debug!("Using hash store at {}", store_path.display());

    match cli.command {
        Commands::Init(args) => commands::init::run(&store_path, &args.path),
        Commands::Check(args) => commands::check::run(&store_path, &args.path),
        Commands::Update(args) => commands::update::run(&store_path, &args.path),
    }
}

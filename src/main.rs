//! HashGuard - File Integrity Verifier
//!
//! Entry point for the hashguard CLI application.

use clap::Parser;
use hashguard::{cli::Cli, error::ExitCode, logging};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    // Run the application logic
    match hashguard::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;
            eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            std::process::exit(exit_code.as_i32());
        }
    }
}

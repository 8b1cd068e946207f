//! # reviewdb CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination. All data
//! handling lives in the `reviewdb` library.
//!
//! Running `reviewdb` with no subcommand opens the interactive menu. The
//! `list`, `search`, `add` and `config` subcommands do the same work one shot
//! at a time, which is what scripts and tests use.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

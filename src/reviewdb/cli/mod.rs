//! # CLI Behavior
//!
//! This is **one possible UI client** for reviewdb, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. It is also where add inputs are validated: the rating
//! must be 1 to 10, the subject must not be blank and the reviewer must be a
//! single word. The library trusts what it is given.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-subcommand handlers
//! - `menu`: The interactive numbered menu
//! - `print`: Output formatting (table, matches, messages, JSON)
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod print;
pub mod setup;

pub use commands::run;

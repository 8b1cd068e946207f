//! # reviewdb Architecture
//!
//! reviewdb keeps a small collection of reviews (a trend or influencer name,
//! an integer rating, a reviewer) in a plain text file. The library holds all
//! of the data handling; the binary is a thin menu and argument shell on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu, subcommands, input validation, output  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load / list_all / search / add                           │
//! │  - Owns the RecordStore and the DataStore for one session   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Record Store (records.rs)  │
//! │  - Query and add logic over the bounded, ordered store      │
//! │  - Returns CmdResult with leveled messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait and the one-line-per-review format       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format Limits
//!
//! Lines are `<subject> <rating> <reviewer>` with no escaping. Subjects may
//! contain spaces because lines are split from the right; reviewers may not.
//! A newline in any field corrupts the file. See [`store::line`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`records`]: The in-memory record store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Review` type and rating bounds
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod store;

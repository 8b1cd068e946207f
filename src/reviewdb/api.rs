//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for front ends. It owns the session's [`RecordStore`] and the
//! [`DataStore`] behind it, so callers never juggle the two.
//!
//! The four operations a front end needs:
//! - [`ReviewApi::load`]: call once at startup
//! - [`ReviewApi::list_all`]
//! - [`ReviewApi::search`]
//! - [`ReviewApi::add`]: persists first, then updates memory
//!
//! `ReviewApi<S: DataStore>` is generic over the storage backend:
//! `ReviewApi<FileStore>` in production, `ReviewApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub struct ReviewApi<S: DataStore> {
    store: S,
    records: RecordStore,
}

impl<S: DataStore> ReviewApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_records(store, RecordStore::new())
    }

    pub fn with_records(store: S, records: RecordStore) -> Self {
        Self { store, records }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.records)
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.records)
    }

    pub fn search(&self, name: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, name)
    }

    pub fn add(
        &mut self,
        subject: String,
        rating: i32,
        reviewer: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.records, subject, rating, reviewer)
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whichever UI is in front of it.
//!
//! ## Role and Responsibilities
//!
//! `RosterApi` owns the live collection for one session. It is loaded once
//! when the API is opened and then:
//! - mutated by [`add_record`](RosterApi::add_record),
//!   [`update_record`](RosterApi::update_record) and
//!   [`delete_record`](RosterApi::delete_record), each followed by a full save
//! - reordered in place by the sorts and by
//!   [`search_binary`](RosterApi::search_binary)
//!
//! Mutating calls take a [`Session`] and fail with
//! [`RosterError::Unauthenticated`](crate::error::RosterError::Unauthenticated)
//! unless it is logged in.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: results come back as `CmdResult` values
//!
//! ## Generic Over DataStore
//!
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{SortAlgorithm, SortDirection, SortKey, Student};
use crate::session::Session;
use crate::store::{DataStore, EmptyReason, LoadOutcome};
use std::path::{Path, PathBuf};

pub struct RosterApi<S: DataStore> {
    store: S,
    records: Vec<Student>,
    empty_reason: Option<EmptyReason>,
    config_dir: PathBuf,
}

impl<S: DataStore> RosterApi<S> {
    /// Open a session over `store`, loading whatever it holds.
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        let (records, empty_reason) = match store.load() {
            LoadOutcome::Loaded(records) => (records, None),
            LoadOutcome::Empty(reason) => (Vec::new(), Some(reason)),
        };
        Self {
            store,
            records,
            empty_reason,
            config_dir,
        }
    }

    pub fn add_record(
        &mut self,
        session: &Session,
        identifier: &str,
        name: &str,
        program: &str,
        section: &str,
    ) -> Result<CmdResult> {
        session.require()?;
        let student = Student::new(identifier, name, program, section);
        commands::add::run(&mut self.store, &mut self.records, student)
    }

    pub fn update_record(
        &mut self,
        session: &Session,
        identifier: &str,
        name: &str,
        program: &str,
        section: &str,
    ) -> Result<CmdResult> {
        session.require()?;
        let update = commands::update::RecordUpdate::new(name, program, section);
        commands::update::run(&mut self.store, &mut self.records, identifier, &update)
    }

    pub fn delete_record(&mut self, session: &Session, identifier: &str) -> Result<CmdResult> {
        session.require()?;
        Ok(commands::delete::run(
            &mut self.store,
            &mut self.records,
            identifier,
        ))
    }

    pub fn search_linear(&self, identifier: &str) -> CmdResult {
        let found = commands::search::linear_search(&self.records, identifier);
        commands::search::report(found, identifier)
    }

    /// Sorts the live collection by identifier, then searches it.
    pub fn search_binary(&mut self, identifier: &str) -> CmdResult {
        commands::search::run(&mut self.records, identifier, SearchMethod::Binary)
    }

    pub fn sort_by_name(&mut self, algorithm: SortAlgorithm, direction: SortDirection) -> CmdResult {
        self.sort_by(SortKey::Name, algorithm, direction)
    }

    pub fn sort_by(
        &mut self,
        key: SortKey,
        algorithm: SortAlgorithm,
        direction: SortDirection,
    ) -> CmdResult {
        commands::sort::run(&mut self.records, key, algorithm, direction)
    }

    pub fn list_all(&self) -> &[Student] {
        &self.records
    }

    pub fn list(&self) -> CmdResult {
        CmdResult::default().with_listed_records(self.records.clone())
    }

    /// Write the current order out, e.g. after a sort.
    pub fn save(&mut self, session: &Session) -> Result<CmdResult> {
        session.require()?;
        let mut result = CmdResult::default();
        commands::persist(&mut self.store, &self.records, &mut result);
        if !result.has_errors() {
            result.add_message(commands::CmdMessage::success(format!(
                "Saved {} records to {}",
                self.records.len(),
                self.store.location()
            )));
        }
        Ok(result)
    }

    pub fn config(&self, session: &Session, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, session, action)
    }

    /// Why the session started empty, if its load failed or found nothing.
    pub fn empty_reason(&self) -> Option<&EmptyReason> {
        self.empty_reason.as_ref()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchMethod;
pub use commands::{CmdMessage, MessageLevel};

//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the student collection lives. The API
//! keeps the live collection in memory and hands the whole of it to
//! [`DataStore::save`] after every mutation; there is no per-record write and
//! no dirty tracking.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, overwritten on every save
//! - [`memory::InMemoryStore`]: keeps the encoded document in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "npm": "123456789012",
//!         "nama": "John Doe",
//!         "prodi": "CS",
//!         "kelas": "A"
//!     }
//! ]
//! ```
//!
//! Keys follow record field order, indented by four spaces. Older files that
//! call the identifier `nim` still load.
//!
//! ## Load Never Fails
//!
//! A missing, unreadable or malformed file yields an empty collection. The
//! reason is kept in [`LoadOutcome::Empty`] so callers and tests can tell the
//! cases apart, but it is never reported to the user.

use crate::error::Result;
use crate::model::Student;
use serde::Serialize;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    Missing,
    Unreadable(String),
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Student>),
    Empty(EmptyReason),
}

impl LoadOutcome {
    pub fn into_records(self) -> Vec<Student> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Empty(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LoadOutcome::Loaded(records) => records.is_empty(),
            LoadOutcome::Empty(_) => true,
        }
    }
}

/// Abstract interface for the record file.
pub trait DataStore {
    /// Read the whole collection. Never fails; see [`LoadOutcome`].
    fn load(&self) -> LoadOutcome;

    /// Overwrite the stored collection with `records`, in the given order.
    fn save(&mut self, records: &[Student]) -> Result<()>;

    /// Human readable location, for messages.
    fn location(&self) -> String;
}

/// Pretty JSON with a four-space indent.
pub fn encode_records(records: &[Student]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn decode_records(content: &str) -> LoadOutcome {
    match serde_json::from_str::<Vec<Student>>(content) {
        Ok(records) => LoadOutcome::Loaded(records),
        Err(e) => {
            log::warn!("ignoring malformed record data: {}", e);
            LoadOutcome::Empty(EmptyReason::Malformed(e.to_string()))
        }
    }
}

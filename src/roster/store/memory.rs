use super::{decode_records, encode_records, DataStore, EmptyReason, LoadOutcome};
use crate::error::{RosterError, Result};
use crate::model::Student;

/// In-memory storage for testing and development.
///
/// Keeps the encoded JSON document rather than the records themselves, so the
/// serialization path is exercised the same way `FileStore` exercises it.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw document, as if read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with a persistence error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        match &self.document {
            Some(doc) => decode_records(doc),
            None => LoadOutcome::Empty(EmptyReason::Missing),
        }
    }

    fn save(&mut self, records: &[Student]) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Persistence("memory store is read-only".into()));
        }
        self.document = Some(encode_records(records)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn student(identifier: &str, name: &str) -> Student {
        Student::new(identifier, name, "Informatika", "A")
    }

    pub struct StoreFixture {
        records: Vec<Student>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let identifier = format!("{:012}", i + 1);
                let name = format!("Student {}", (b'A' + (i % 26) as u8) as char);
                self.records.push(student(&identifier, &name));
            }
            self
        }

        pub fn with_student(mut self, identifier: &str, name: &str) -> Self {
            self.records.push(student(identifier, name));
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            if let Ok(document) = encode_records(&self.records) {
                store.document = Some(document);
            }
            store
        }
    }
}

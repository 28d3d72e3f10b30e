use super::{decode_records, encode_records, DataStore, EmptyReason, LoadOutcome};
use crate::error::{RosterError, Result};
use crate::model::Student;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data_mahasiswa.json";

/// Whole-collection JSON file. No locking: concurrent writers race and the
/// last one wins.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no record file at {}", self.path.display());
                return LoadOutcome::Empty(EmptyReason::Missing);
            }
            Err(e) => {
                log::warn!("cannot read {}: {}", self.path.display(), e);
                return LoadOutcome::Empty(EmptyReason::Unreadable(e.to_string()));
            }
        };

        let outcome = decode_records(&content);
        if let LoadOutcome::Loaded(records) = &outcome {
            log::debug!(
                "loaded {} records from {}",
                records.len(),
                self.path.display()
            );
        }
        outcome
    }

    fn save(&mut self, records: &[Student]) -> Result<()> {
        let content = encode_records(records)?;
        self.ensure_parent()
            .and_then(|_| fs::write(&self.path, content))
            .map_err(|e| {
                log::warn!("failed to write {}: {}", self.path.display(), e);
                RosterError::Persistence(format!("{}: {}", self.path.display(), e))
            })?;
        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("123456789012", "John Doe", "CS", "A"),
            Student::new("210987654321", "amy", "IF", "B"),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_DATA_FILE));
        assert_eq!(store.load(), LoadOutcome::Empty(EmptyReason::Missing));
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(&path, "[{\"npm\": ").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            LoadOutcome::Empty(EmptyReason::Malformed(_))
        ));
    }

    #[test]
    fn directory_in_place_of_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.load(),
            LoadOutcome::Empty(EmptyReason::Unreadable(_))
        ));
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join(DEFAULT_DATA_FILE));
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), LoadOutcome::Loaded(sample()));
    }

    #[test]
    fn save_overwrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(!on_disk.contains("210987654321"));
        assert_eq!(store.load().into_records().len(), 1);
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_target_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory, so the write fails
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.save(&sample()),
            Err(RosterError::Persistence(_))
        ));
    }
}

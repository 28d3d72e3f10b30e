use crate::config::RosterConfig;
use crate::model::Student;
use crate::store::DataStore;

pub mod add;
pub mod config;
pub mod delete;
pub mod search;
pub mod sort;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Student>,
    pub listed_records: Vec<Student>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Student>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Student>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Write the whole collection after a mutation.
///
/// A failed write is reported as an error message, not returned. The
/// in-memory collection is left as it is, so memory and disk differ until
/// the next successful save.
pub(crate) fn persist<S: DataStore>(store: &mut S, records: &[Student], result: &mut CmdResult) {
    if let Err(e) = store.save(records) {
        result.add_message(CmdMessage::error(e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn persist_failure_becomes_error_message() {
        let mut store = InMemoryStore::new().failing_writes();
        let mut result = CmdResult::default();
        persist(&mut store, &[], &mut result);
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("Could not save"));
    }

    #[test]
    fn persist_success_is_silent() {
        let mut store = InMemoryStore::new();
        let mut result = CmdResult::default();
        persist(&mut store, &[], &mut result);
        assert!(result.messages.is_empty());
        assert_eq!(store.document(), Some("[]"));
    }
}

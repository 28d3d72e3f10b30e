use crate::commands::{persist, CmdMessage, CmdResult};
use crate::model::Student;
use crate::store::DataStore;

/// Remove every record with `identifier`, returning what was removed.
pub fn remove_all(records: &mut Vec<Student>, identifier: &str) -> Vec<Student> {
    let mut removed = Vec::new();
    records.retain(|s| {
        if s.identifier() == identifier {
            removed.push(s.clone());
            false
        } else {
            true
        }
    });
    removed
}

/// Deleting an absent identifier is not an error; the file is still rewritten.
pub fn run<S: DataStore>(store: &mut S, records: &mut Vec<Student>, identifier: &str) -> CmdResult {
    let removed = remove_all(records, identifier);
    let mut result = CmdResult::default();

    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No record with NPM {}",
            identifier
        )));
    } else {
        log::info!("removed {} record(s) for {}", removed.len(), identifier);
        for student in &removed {
            result.add_message(CmdMessage::success(format!("Record deleted: {}", student)));
        }
    }

    persist(store, records, &mut result);
    result.with_affected_records(removed)
}

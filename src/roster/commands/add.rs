use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::DataStore;
use crate::validation::check_new_record;

use super::search::linear_search;

/// Append without any uniqueness check.
pub fn append(records: &mut Vec<Student>, student: Student) {
    records.push(student);
}

pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut Vec<Student>,
    student: Student,
) -> Result<CmdResult> {
    check_new_record(student.identifier(), student.name())?;

    let mut result = CmdResult::default();
    if linear_search(records, student.identifier()).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "NPM {} already exists; lookups will return the first entry",
            student.identifier()
        )));
    }

    log::info!("adding record {}", student.identifier());
    append(records, student.clone());
    result.add_message(CmdMessage::success(format!("Record added: {}", student)));
    persist(store, records, &mut result);

    Ok(result.with_affected_records(vec![student]))
}

use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{RosterError, Result};
use crate::model::Student;
use crate::store::DataStore;
use crate::validation::check_name;

/// Fields an update replaces. The identifier itself never changes.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub name: String,
    pub program: String,
    pub section: String,
}

impl RecordUpdate {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            section: section.into(),
        }
    }
}

/// Replace the fields of the first record with `identifier`. Returns the
/// updated record, or `None` when nothing matched.
pub fn apply<'a>(
    records: &'a mut [Student],
    identifier: &str,
    update: &RecordUpdate,
) -> Option<&'a Student> {
    let student = records.iter_mut().find(|s| s.identifier() == identifier)?;
    student.set_name(update.name.clone());
    student.set_program(update.program.clone());
    student.set_section(update.section.clone());
    Some(student)
}

pub fn run<S: DataStore>(
    store: &mut S,
    records: &mut [Student],
    identifier: &str,
    update: &RecordUpdate,
) -> Result<CmdResult> {
    check_name(&update.name)?;

    let updated = apply(records, identifier, update)
        .cloned()
        .ok_or_else(|| RosterError::NotFound(identifier.to_string()))?;

    log::info!("updated record {}", identifier);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record updated: {}", updated)));
    persist(store, records, &mut result);

    Ok(result.with_affected_records(vec![updated]))
}

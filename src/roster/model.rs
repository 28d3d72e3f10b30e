use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// A student record.
///
/// Fields are kept exactly as given. The serialized keys (`npm`, `nama`,
/// `prodi`, `kelas`) are the on-disk schema; `nim` is accepted for the
/// identifier when reading older files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "npm", alias = "nim")]
    identifier: String,
    #[serde(rename = "nama")]
    name: String,
    #[serde(rename = "prodi")]
    program: String,
    #[serde(rename = "kelas")]
    section: String,
}

impl Student {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        program: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            program: program.into(),
            section: section.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_program(&mut self, program: impl Into<String>) {
        self.program = program.into();
    }

    pub fn set_section(&mut self, section: impl Into<String>) {
        self.section = section.into();
    }

    /// Field name/value pairs in record order, as used for tabular display.
    pub fn to_mapping(&self) -> [(&'static str, &str); 4] {
        [
            ("npm", &self.identifier),
            ("nama", &self.name),
            ("prodi", &self.program),
            ("kelas", &self.section),
        ]
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.identifier, self.name, self.program, self.section
        )
    }
}

/// Which field a sort orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Identifier,
    /// Case-folded before comparison.
    #[default]
    Name,
    Program,
    Section,
}

impl SortKey {
    pub fn extract(&self, student: &Student) -> String {
        match self {
            SortKey::Identifier => student.identifier.clone(),
            SortKey::Name => student.name.to_lowercase(),
            SortKey::Program => student.program.clone(),
            SortKey::Section => student.section.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    #[default]
    Insertion,
    Selection,
    Bubble,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Bubble => "bubble",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

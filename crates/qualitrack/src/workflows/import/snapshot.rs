use super::ImportError;
use crate::workflows::qualifications::domain::{
    Employee, QualificationAssignmentRecord, QualificationDefinition,
};
use crate::workflows::qualifications::{QualificationCatalog, Roster};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// In-memory copy of everything one evaluation pass needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub definitions: Vec<QualificationDefinition>,
    #[serde(default)]
    pub records: Vec<QualificationAssignmentRecord>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Snapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Appends records from a separate export, e.g. a CSV download.
    pub fn extend_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = QualificationAssignmentRecord>,
    {
        self.records.extend(records);
    }

    pub fn catalog(&self) -> QualificationCatalog {
        QualificationCatalog::new(self.definitions.clone())
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.employees.iter().cloned())
    }
}

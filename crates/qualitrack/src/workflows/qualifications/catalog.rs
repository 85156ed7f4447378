use super::domain::{Employee, QualificationDefinition, QualificationId, QualificationOrigin};
use std::collections::HashMap;
use tracing::debug;

/// Read-only index over the qualification definitions supplied by the catalog service.
#[derive(Debug, Clone, Default)]
pub struct QualificationCatalog {
    definitions: Vec<QualificationDefinition>,
    index: HashMap<QualificationId, usize>,
}

impl QualificationCatalog {
    /// Builds the index. When an id appears twice the first definition wins.
    pub fn new(definitions: Vec<QualificationDefinition>) -> Self {
        let mut kept = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            if index.contains_key(&definition.id) {
                debug!(qualification = %definition.id, "ignoring duplicate catalog definition");
                continue;
            }
            index.insert(definition.id.clone(), kept.len());
            kept.push(definition);
        }

        Self {
            definitions: kept,
            index,
        }
    }

    pub fn get(&self, id: &QualificationId) -> Option<&QualificationDefinition> {
        self.index.get(id).map(|&position| &self.definitions[position])
    }

    pub fn definitions(&self) -> &[QualificationDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Qualifications the employee is expected to hold: every mandatory entry
    /// plus the ones linked to the employee's position.
    pub fn required_for(&self, employee: &Employee) -> Vec<&QualificationDefinition> {
        self.definitions
            .iter()
            .filter(|definition| match definition.origin {
                QualificationOrigin::Mandatory => true,
                QualificationOrigin::PositionLinked => {
                    definition.linked_position_id.is_some()
                        && definition.linked_position_id == employee.position_id
                }
                QualificationOrigin::Supplementary | QualificationOrigin::Unassigned => false,
            })
            .collect()
    }
}

use super::catalog::QualificationCatalog;
use super::domain::{
    DepartmentId, Employee, EmployeeId, QualificationAssignmentRecord, QualificationId,
};
use super::origin::{classify_origin, OriginClass};
use super::pipeline::{resolve_views, EvaluationContext, ResolvedQualificationView};
use serde::Serialize;
use std::collections::HashSet;

/// Required qualification the employee has no record for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingQualification {
    pub qualification_id: QualificationId,
    pub name: String,
    pub origin_class: OriginClass,
}

/// Everything the qualification overview screen shows for one employee.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeQualificationOverview {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub department_id: DepartmentId,
    pub qualifications: Vec<ResolvedQualificationView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_required: Vec<MissingQualification>,
}

impl EmployeeQualificationOverview {
    pub fn build(
        employee: &Employee,
        catalog: &QualificationCatalog,
        records: &[QualificationAssignmentRecord],
        context: &EvaluationContext,
    ) -> Self {
        let own_records: Vec<QualificationAssignmentRecord> = records
            .iter()
            .filter(|record| record.employee_id == employee.id)
            .cloned()
            .collect();

        let mut qualifications = resolve_views(catalog, &own_records, context);
        qualifications.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.qualification_id.cmp(&b.qualification_id))
        });

        let recorded: HashSet<&QualificationId> = own_records
            .iter()
            .map(|record| &record.qualification_id)
            .collect();
        let missing_required = catalog
            .required_for(employee)
            .into_iter()
            .filter(|definition| !recorded.contains(&definition.id))
            .map(|definition| MissingQualification {
                qualification_id: definition.id.clone(),
                name: definition.name.clone(),
                origin_class: classify_origin(definition),
            })
            .collect();

        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            department_id: employee.department_id.clone(),
            qualifications,
            missing_required,
        }
    }
}

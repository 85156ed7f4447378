use chrono::NaiveDate;

use crate::workflows::qualifications::domain::{
    DepartmentId, Employee, EmployeeId, PositionId, QualificationAssignmentRecord,
    QualificationDefinition, QualificationId, QualificationOrigin, RecordDate, Validity,
};
use crate::workflows::qualifications::pipeline::{
    resolve_views, EvaluationContext, ResolvedQualificationView,
};
use crate::workflows::qualifications::QualificationCatalog;

pub(super) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn on(y: i32, m: u32, d: u32) -> Option<RecordDate> {
    Some(RecordDate::Valid(ymd(y, m, d)))
}

pub(super) fn definition(id: &str, months: u32, origin: QualificationOrigin) -> QualificationDefinition {
    QualificationDefinition {
        id: QualificationId(id.to_string()),
        name: format!("{id} certificate"),
        description: String::new(),
        validity: Validity::from_months(months).expect("non-zero validity"),
        origin,
        linked_position_id: None,
    }
}

pub(super) fn linked_definition(id: &str, months: u32, position: &str) -> QualificationDefinition {
    QualificationDefinition {
        linked_position_id: Some(PositionId(position.to_string())),
        ..definition(id, months, QualificationOrigin::PositionLinked)
    }
}

pub(super) fn completed(
    record_id: u64,
    employee: &str,
    qualification: &str,
    until: Option<RecordDate>,
) -> QualificationAssignmentRecord {
    QualificationAssignmentRecord {
        record_id,
        employee_id: EmployeeId(employee.to_string()),
        qualification_id: QualificationId(qualification.to_string()),
        qualified_from: on(2020, 1, 1),
        to_qualify_until: None,
        is_qualified_until: until,
    }
}

pub(super) fn pending(
    record_id: u64,
    employee: &str,
    qualification: &str,
    deadline: Option<RecordDate>,
) -> QualificationAssignmentRecord {
    QualificationAssignmentRecord {
        record_id,
        employee_id: EmployeeId(employee.to_string()),
        qualification_id: QualificationId(qualification.to_string()),
        qualified_from: None,
        to_qualify_until: deadline,
        is_qualified_until: None,
    }
}

pub(super) fn employee(id: &str, department: &str) -> Employee {
    Employee {
        id: EmployeeId(id.to_string()),
        name: format!("Employee {id}"),
        department_id: DepartmentId(department.to_string()),
        supervisor_id: None,
        position_id: None,
        is_supervisor: false,
        is_active: true,
    }
}

/// Catalog used by the aggregation scenarios:
/// Q-SAFE mandatory 12 months, Q-FORK forklift (position "warehouse") 24
/// months, Q-LANG supplementary never expiring.
pub(super) fn standard_catalog() -> QualificationCatalog {
    QualificationCatalog::new(vec![
        definition("Q-SAFE", 12, QualificationOrigin::Mandatory),
        linked_definition("Q-FORK", 24, "warehouse"),
        definition("Q-LANG", 999, QualificationOrigin::Supplementary),
    ])
}

pub(super) fn views_on(
    catalog: &QualificationCatalog,
    records: &[QualificationAssignmentRecord],
    now: NaiveDate,
) -> Vec<ResolvedQualificationView> {
    resolve_views(catalog, records, &EvaluationContext::new(now))
}

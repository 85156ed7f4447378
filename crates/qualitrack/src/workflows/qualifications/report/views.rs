use super::super::domain::{DepartmentId, EmployeeId, QualificationId};
use super::super::origin::OriginClass;
use super::super::status::LifecycleStatus;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationTotals {
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub not_yet_completed: usize,
    pub completion_rate: u8,
    pub employees_expiring: usize,
    pub employees_expired: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRollupEntry {
    pub department_id: DepartmentId,
    pub employee_count: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub not_yet_completed: usize,
    pub employees_expiring: usize,
    pub employees_expired: usize,
    pub completion_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginBreakdownEntry {
    pub origin: OriginClass,
    pub origin_label: &'static str,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub not_yet_completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalEntry {
    pub employee_id: EmployeeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub qualification_id: QualificationId,
    pub name: String,
    pub status: LifecycleStatus,
    pub status_label: String,
    pub effective_expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualificationReportSummary {
    pub totals: QualificationTotals,
    pub departments: Vec<DepartmentRollupEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub origin_breakdown: Vec<OriginBreakdownEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub renewal_queue: Vec<RenewalEntry>,
}

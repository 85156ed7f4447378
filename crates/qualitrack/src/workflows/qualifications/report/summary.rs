use super::super::domain::{DepartmentId, EmployeeId};
use super::super::origin::OriginClass;
use super::super::pipeline::ResolvedQualificationView;
use super::super::roster::Roster;
use super::super::status::StatusBucket;
use super::views::{
    DepartmentRollupEntry, OriginBreakdownEntry, QualificationReportSummary, QualificationTotals,
    RenewalEntry,
};
use std::collections::{HashMap, HashSet};

/// Qualification-instance counts. An employee holding three qualifications
/// contributes up to three.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QualificationCounts {
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub not_yet_completed: usize,
}

impl QualificationCounts {
    fn record(&mut self, bucket: Option<StatusBucket>) {
        match bucket {
            Some(StatusBucket::Active) => self.active += 1,
            Some(StatusBucket::Expiring) => self.expiring_soon += 1,
            Some(StatusBucket::Expired) => self.expired += 1,
            None => self.not_yet_completed += 1,
        }
    }

    /// Share of active qualifications in whole percent; 0 when nothing counts.
    pub fn completion_rate(&self) -> u8 {
        let denominator = self.active + self.expiring_soon + self.expired;
        if denominator == 0 {
            return 0;
        }

        ((self.active as f64 * 100.0) / denominator as f64).round() as u8
    }
}

/// Employees affected by expiring or expired qualifications, each counted once.
#[derive(Debug, Default, Clone)]
pub struct AffectedEmployees {
    pub expiring: HashSet<EmployeeId>,
    pub expired: HashSet<EmployeeId>,
}

impl AffectedEmployees {
    fn record(&mut self, employee: &EmployeeId, bucket: Option<StatusBucket>) {
        match bucket {
            Some(StatusBucket::Expiring) => {
                self.expiring.insert(employee.clone());
            }
            Some(StatusBucket::Expired) => {
                self.expired.insert(employee.clone());
            }
            Some(StatusBucket::Active) | None => {}
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DepartmentRollup {
    pub employee_count: usize,
    pub counts: QualificationCounts,
    pub affected: AffectedEmployees,
}

#[derive(Debug, Default)]
pub struct QualificationReport {
    pub totals: QualificationCounts,
    pub affected: AffectedEmployees,
    pub by_department: HashMap<DepartmentId, DepartmentRollup>,
    pub by_origin: HashMap<OriginClass, QualificationCounts>,
    pub renewal_queue: Vec<ResolvedQualificationView>,
    employee_names: HashMap<EmployeeId, String>,
}

impl QualificationReport {
    /// Rolls resolved views up to organization and department level.
    ///
    /// Views of employees missing from the roster still count towards the
    /// organization totals but belong to no department.
    pub fn aggregate(roster: &Roster, views: &[ResolvedQualificationView]) -> Self {
        let mut report = QualificationReport::default();

        for employee in roster.employees() {
            report
                .by_department
                .entry(employee.department_id.clone())
                .or_default()
                .employee_count += 1;
            report
                .employee_names
                .insert(employee.id.clone(), employee.name.clone());
        }

        for view in views {
            let bucket = view.status.bucket();

            report.totals.record(bucket);
            report.affected.record(&view.employee_id, bucket);
            report
                .by_origin
                .entry(view.origin_class)
                .or_default()
                .record(bucket);

            if let Some(department) = roster.department_of(&view.employee_id) {
                let rollup = report.by_department.entry(department.clone()).or_default();
                rollup.counts.record(bucket);
                rollup.affected.record(&view.employee_id, bucket);
            }

            if bucket == Some(StatusBucket::Expiring) {
                report.renewal_queue.push(view.clone());
            }
        }

        report.renewal_queue.sort_by(|a, b| {
            a.effective_expiry_date
                .cmp(&b.effective_expiry_date)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
                .then_with(|| a.qualification_id.cmp(&b.qualification_id))
        });

        report
    }

    pub fn summary(&self) -> QualificationReportSummary {
        let totals = QualificationTotals {
            active: self.totals.active,
            expiring_soon: self.totals.expiring_soon,
            expired: self.totals.expired,
            not_yet_completed: self.totals.not_yet_completed,
            completion_rate: self.totals.completion_rate(),
            employees_expiring: self.affected.expiring.len(),
            employees_expired: self.affected.expired.len(),
        };

        let mut departments: Vec<DepartmentRollupEntry> = self
            .by_department
            .iter()
            .map(|(department_id, rollup)| DepartmentRollupEntry {
                department_id: department_id.clone(),
                employee_count: rollup.employee_count,
                active: rollup.counts.active,
                expiring_soon: rollup.counts.expiring_soon,
                expired: rollup.counts.expired,
                not_yet_completed: rollup.counts.not_yet_completed,
                employees_expiring: rollup.affected.expiring.len(),
                employees_expired: rollup.affected.expired.len(),
                completion_rate: rollup.counts.completion_rate(),
            })
            .collect();
        departments.sort_by(|a, b| a.department_id.cmp(&b.department_id));

        let origin_breakdown = OriginClass::ordered()
            .into_iter()
            .filter_map(|origin| {
                self.by_origin.get(&origin).map(|counts| OriginBreakdownEntry {
                    origin,
                    origin_label: origin.label(),
                    active: counts.active,
                    expiring_soon: counts.expiring_soon,
                    expired: counts.expired,
                    not_yet_completed: counts.not_yet_completed,
                })
            })
            .collect();

        let renewal_queue = self
            .renewal_queue
            .iter()
            .map(|view| RenewalEntry {
                employee_id: view.employee_id.clone(),
                employee_name: self.employee_names.get(&view.employee_id).cloned(),
                qualification_id: view.qualification_id.clone(),
                name: view.name.clone(),
                status: view.status,
                status_label: view.status_label.clone(),
                effective_expiry_date: view.effective_expiry_date,
            })
            .collect();

        QualificationReportSummary {
            totals,
            departments,
            origin_breakdown,
            renewal_queue,
        }
    }
}

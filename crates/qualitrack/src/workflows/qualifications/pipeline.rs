use super::catalog::QualificationCatalog;
use super::dedup::resolve_latest;
use super::domain::{EmployeeId, QualificationAssignmentRecord, QualificationId};
use super::origin::{classify_origin, OriginClass};
use super::status::{classify, ClassificationMode, LifecyclePolicy, LifecycleStatus};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Latest record of a pair joined with its definition and classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedQualificationView {
    pub employee_id: EmployeeId,
    pub qualification_id: QualificationId,
    pub name: String,
    pub status: LifecycleStatus,
    pub status_label: String,
    pub effective_expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_expiry: Option<i64>,
    pub origin_class: OriginClass,
    pub origin_label: &'static str,
}

/// Evaluation inputs shared by every record of one pass.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    pub now: NaiveDate,
    pub mode: ClassificationMode,
    pub policy: LifecyclePolicy,
}

impl EvaluationContext {
    pub fn new(now: NaiveDate) -> Self {
        Self {
            now,
            mode: ClassificationMode::default(),
            policy: LifecyclePolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: ClassificationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Deduplicates, joins and classifies raw records.
///
/// Records whose qualification is missing from the catalog, or whose governing
/// expiry date is unparseable, are dropped without error.
pub fn resolve_views(
    catalog: &QualificationCatalog,
    records: &[QualificationAssignmentRecord],
    context: &EvaluationContext,
) -> Vec<ResolvedQualificationView> {
    resolve_latest(records)
        .into_iter()
        .filter_map(|record| {
            let Some(definition) = catalog.get(&record.qualification_id) else {
                debug!(
                    employee = %record.employee_id,
                    qualification = %record.qualification_id,
                    "record references unknown qualification; excluded"
                );
                return None;
            };

            let Some(classification) = classify(
                context.mode,
                &record,
                definition,
                context.now,
                &context.policy,
            ) else {
                debug!(
                    employee = %record.employee_id,
                    qualification = %record.qualification_id,
                    "expiry date unparseable or missing on a completed record; excluded"
                );
                return None;
            };

            let origin_class = classify_origin(definition);
            Some(ResolvedQualificationView {
                status_label: classification.status_label(),
                employee_id: record.employee_id,
                qualification_id: record.qualification_id,
                name: definition.name.clone(),
                status: classification.status,
                effective_expiry_date: classification.effective_expiry,
                days_since_expiry: classification.days_since_expiry,
                origin_class,
                origin_label: origin_class.label(),
            })
        })
        .collect()
}

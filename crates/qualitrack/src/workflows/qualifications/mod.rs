//! Qualification lifecycle: record resolution, status and origin
//! classification, and dashboard rollups.
//!
//! Everything here is a pure function of its inputs. The evaluation date is
//! always passed in by the caller.

pub mod catalog;
pub mod dedup;
pub mod domain;
pub mod origin;
pub mod overview;
pub mod pipeline;
pub mod report;
pub mod roster;
pub mod status;

#[cfg(test)]
mod tests;

pub use catalog::QualificationCatalog;
pub use dedup::resolve_latest;
pub use domain::{
    DepartmentId, Employee, EmployeeId, PositionId, QualificationAssignmentRecord,
    QualificationDefinition, QualificationId, QualificationOrigin, RecordDate, Validity,
};
pub use origin::{classify_origin, OriginClass};
pub use overview::{EmployeeQualificationOverview, MissingQualification};
pub use pipeline::{resolve_views, EvaluationContext, ResolvedQualificationView};
pub use report::views::QualificationReportSummary;
pub use report::QualificationReport;
pub use roster::Roster;
pub use status::{
    classify, classify_detailed, classify_simple, ClassificationMode, LifecyclePolicy,
    LifecycleStatus, StatusBucket, StatusClassification,
};

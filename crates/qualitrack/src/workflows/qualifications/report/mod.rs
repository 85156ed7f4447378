mod summary;
pub mod views;

pub use summary::{AffectedEmployees, DepartmentRollup, QualificationCounts, QualificationReport};

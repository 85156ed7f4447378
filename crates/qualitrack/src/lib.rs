//! Qualification tracking for HR dashboards: resolves employee qualification
//! records into lifecycle states and department rollups.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

//! Loading engine inputs from exports of the HR backend.

mod records;
mod snapshot;

pub use records::parse_records;
pub use snapshot::Snapshot;

/// Errors raised while reading an export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("malformed qualification record export: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

use chrono::NaiveDate;
use clap::ValueEnum;
use qualitrack::error::AppError;
use qualitrack::workflows::import::{parse_records, Snapshot};
use qualitrack::workflows::qualifications::ClassificationMode;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum ModeArg {
    /// Report the grace period separately
    #[default]
    Detailed,
    /// Fold the grace period into "expiring soon"
    Simple,
}

impl From<ModeArg> for ClassificationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Detailed => ClassificationMode::Detailed,
            ModeArg::Simple => ClassificationMode::Simple,
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn load_snapshot(
    snapshot_path: &Path,
    records_csv: Option<&Path>,
) -> Result<Snapshot, AppError> {
    let file = File::open(snapshot_path)?;
    let mut snapshot = Snapshot::from_reader(BufReader::new(file))?;
    debug!(
        path = %snapshot_path.display(),
        definitions = snapshot.definitions.len(),
        records = snapshot.records.len(),
        employees = snapshot.employees.len(),
        "snapshot loaded"
    );

    if let Some(path) = records_csv {
        let records = parse_records(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), records = records.len(), "record export loaded");
        snapshot.extend_records(records);
    }

    Ok(snapshot)
}

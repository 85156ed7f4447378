use super::ImportError;
use crate::workflows::qualifications::domain::{
    EmployeeId, QualificationAssignmentRecord, QualificationId, RecordDate,
};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Reads the qualification record CSV export. Blank date cells are treated as
/// absent and dates that fail to parse are kept as unparseable.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<QualificationAssignmentRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RecordRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RecordRow {
    #[serde(rename = "Record ID")]
    record_id: u64,
    #[serde(rename = "Employee ID")]
    employee_id: String,
    #[serde(rename = "Qualification ID")]
    qualification_id: String,
    #[serde(
        rename = "Qualified From",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    qualified_from: Option<String>,
    #[serde(
        rename = "To Qualify Until",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    to_qualify_until: Option<String>,
    #[serde(
        rename = "Is Qualified Until",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    is_qualified_until: Option<String>,
}

impl RecordRow {
    fn into_record(self) -> QualificationAssignmentRecord {
        QualificationAssignmentRecord {
            record_id: self.record_id,
            employee_id: EmployeeId(self.employee_id),
            qualification_id: QualificationId(self.qualification_id),
            qualified_from: self.qualified_from.as_deref().map(RecordDate::parse),
            to_qualify_until: self.to_qualify_until.as_deref().map(RecordDate::parse),
            is_qualified_until: self.is_qualified_until.as_deref().map(RecordDate::parse),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_rows_with_blank_and_broken_dates() {
        let csv = "\
Record ID,Employee ID,Qualification ID,Qualified From,To Qualify Until,Is Qualified Until
1, E1 ,Q-SAFE,2024-01-01,,2024-12-31
2,E2,Q-SAFE,,15.03.2025,
3,E3,Q-FORK,,,someday
";

        let records = parse_records(csv.as_bytes()).expect("csv parses");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].employee_id, EmployeeId("E1".to_string()));
        assert_eq!(records[0].to_qualify_until, None);
        assert_eq!(
            records[0].is_qualified_until,
            Some(RecordDate::Valid(
                NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date")
            ))
        );
        assert_eq!(
            records[1].to_qualify_until,
            Some(RecordDate::Valid(
                NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
            ))
        );
        assert_eq!(records[1].qualified_from, None);
        assert_eq!(
            records[2].is_qualified_until,
            Some(RecordDate::Unparseable("someday".to_string()))
        );
    }

    #[test]
    fn rejects_rows_without_record_id() {
        let csv = "\
Record ID,Employee ID,Qualification ID,Qualified From,To Qualify Until,Is Qualified Until
abc,E1,Q-SAFE,,,
";

        let err = parse_records(csv.as_bytes()).expect_err("non-numeric id fails");
        assert!(matches!(err, ImportError::Csv(_)));
    }
}

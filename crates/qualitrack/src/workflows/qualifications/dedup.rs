use super::domain::{EmployeeId, QualificationAssignmentRecord, QualificationId};
use chrono::NaiveDate;
use std::collections::BTreeMap;

type PairKey = (EmployeeId, QualificationId);

/// Ordering key for choosing the authoritative record of a pair.
///
/// A completed cycle (`is_qualified_until`) outranks any provisional deadline;
/// the provisional deadline only competes between records that were never
/// completed. Equal dates fall back to the highest `record_id`. Unparseable
/// dates rank like absent ones.
fn recency_key(
    record: &QualificationAssignmentRecord,
) -> (Option<NaiveDate>, Option<NaiveDate>, u64) {
    let completed_until = record.is_qualified_until.as_ref().and_then(|date| date.valid());
    let provisional_until = match completed_until {
        Some(_) => None,
        None => record.to_qualify_until.as_ref().and_then(|date| date.valid()),
    };

    (completed_until, provisional_until, record.record_id)
}

/// Selects one record per (employee, qualification) pair.
///
/// The selection does not depend on input order and the output is ordered by
/// employee id, then qualification id.
pub fn resolve_latest(
    records: &[QualificationAssignmentRecord],
) -> Vec<QualificationAssignmentRecord> {
    let mut latest: BTreeMap<PairKey, &QualificationAssignmentRecord> = BTreeMap::new();

    for record in records {
        let key = (record.employee_id.clone(), record.qualification_id.clone());
        let outranks = latest
            .get(&key)
            .map_or(true, |current| recency_key(record) > recency_key(current));
        if outranks {
            latest.insert(key, record);
        }
    }

    latest.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::qualifications::domain::RecordDate;

    fn date(y: i32, m: u32, d: u32) -> RecordDate {
        RecordDate::Valid(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    fn record(
        record_id: u64,
        employee: &str,
        qualification: &str,
        to_qualify_until: Option<RecordDate>,
        is_qualified_until: Option<RecordDate>,
    ) -> QualificationAssignmentRecord {
        QualificationAssignmentRecord {
            record_id,
            employee_id: EmployeeId(employee.to_string()),
            qualification_id: QualificationId(qualification.to_string()),
            qualified_from: None,
            to_qualify_until,
            is_qualified_until,
        }
    }

    #[test]
    fn completed_record_beats_later_provisional_deadline() {
        let records = vec![
            record(1, "E1", "Q1", Some(date(2026, 6, 1)), None),
            record(2, "E1", "Q1", None, Some(date(2025, 1, 1))),
        ];

        let resolved = resolve_latest(&records);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].record_id, 2);
    }

    #[test]
    fn latest_completion_wins_among_renewals() {
        let records = vec![
            record(3, "E1", "Q1", None, Some(date(2023, 3, 1))),
            record(1, "E1", "Q1", None, Some(date(2025, 3, 1))),
            record(2, "E1", "Q1", None, Some(date(2024, 3, 1))),
        ];

        assert_eq!(resolve_latest(&records)[0].record_id, 1);
    }

    #[test]
    fn provisional_deadlines_compare_when_nothing_completed() {
        let records = vec![
            record(1, "E1", "Q1", Some(date(2025, 5, 1)), None),
            record(2, "E1", "Q1", Some(date(2025, 4, 1)), None),
        ];

        assert_eq!(resolve_latest(&records)[0].record_id, 1);
    }

    #[test]
    fn ties_and_missing_dates_fall_back_to_highest_record_id() {
        let tied = vec![
            record(4, "E1", "Q1", None, Some(date(2025, 1, 1))),
            record(9, "E1", "Q1", None, Some(date(2025, 1, 1))),
            record(6, "E1", "Q1", None, Some(date(2025, 1, 1))),
        ];
        assert_eq!(resolve_latest(&tied)[0].record_id, 9);

        let undated = vec![
            record(5, "E2", "Q1", None, None),
            record(2, "E2", "Q1", None, None),
        ];
        assert_eq!(resolve_latest(&undated)[0].record_id, 5);
    }

    #[test]
    fn unparseable_dates_never_outrank_valid_ones() {
        let records = vec![
            record(8, "E1", "Q1", None, Some(RecordDate::Unparseable("31/31/2030".into()))),
            record(1, "E1", "Q1", None, Some(date(2024, 1, 1))),
        ];

        assert_eq!(resolve_latest(&records)[0].record_id, 1);
    }

    #[test]
    fn selection_is_independent_of_input_order() {
        let records = vec![
            record(1, "E1", "Q1", Some(date(2025, 2, 1)), None),
            record(2, "E1", "Q1", None, Some(date(2024, 11, 30))),
            record(3, "E2", "Q1", None, None),
            record(4, "E1", "Q2", Some(date(2025, 2, 1)), None),
            record(5, "E2", "Q1", Some(date(2024, 1, 1)), None),
            record(6, "E1", "Q2", Some(date(2025, 2, 1)), None),
        ];

        let forward = resolve_latest(&records);
        let mut reversed_input = records.clone();
        reversed_input.reverse();
        let reversed = resolve_latest(&reversed_input);
        let mut rotated_input = records.clone();
        rotated_input.rotate_left(2);
        let rotated = resolve_latest(&rotated_input);

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
        assert_eq!(resolve_latest(&forward), forward);

        let ids: Vec<u64> = forward.iter().map(|record| record.record_id).collect();
        assert_eq!(ids, vec![2, 6, 5]);
    }
}

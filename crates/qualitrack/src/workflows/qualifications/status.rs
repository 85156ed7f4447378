use super::domain::{QualificationAssignmentRecord, QualificationDefinition, RecordDate};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GRACE_DAYS: u32 = 14;
pub const DEFAULT_EXPIRING_MONTHS: u32 = 2;

/// Lifecycle state of a single resolved qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    NeverExpires,
    Active,
    ExpiringSoon,
    WithinGracePeriod,
    Expired,
    NotYetCompleted,
}

impl LifecycleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeverExpires => "Never expires",
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring soon",
            Self::WithinGracePeriod => "In grace period",
            Self::Expired => "Expired",
            Self::NotYetCompleted => "Not yet completed",
        }
    }

    /// Dashboard bucket used for counting. `NotYetCompleted` has none.
    pub const fn bucket(self) -> Option<StatusBucket> {
        match self {
            Self::NeverExpires | Self::Active => Some(StatusBucket::Active),
            Self::ExpiringSoon | Self::WithinGracePeriod => Some(StatusBucket::Expiring),
            Self::Expired => Some(StatusBucket::Expired),
            Self::NotYetCompleted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    Active,
    Expiring,
    Expired,
}

/// Whether the grace window is reported on its own or folded into "expiring".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    #[default]
    Detailed,
    Simple,
}

/// Time windows applied by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    grace_days: u32,
    expiring_months: u32,
}

impl LifecyclePolicy {
    /// Zero values fall back to the defaults.
    pub fn new(grace_days: u32, expiring_months: u32) -> Self {
        Self {
            grace_days: if grace_days == 0 {
                DEFAULT_GRACE_DAYS
            } else {
                grace_days
            },
            expiring_months: if expiring_months == 0 {
                DEFAULT_EXPIRING_MONTHS
            } else {
                expiring_months
            },
        }
    }

    pub fn grace_days(&self) -> u32 {
        self.grace_days
    }

    pub fn expiring_months(&self) -> u32 {
        self.expiring_months
    }

    pub fn grace_end(&self, expiry: NaiveDate) -> NaiveDate {
        expiry
            .checked_add_days(Days::new(u64::from(self.grace_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Calendar-month addition; a day that does not exist in the target month
    /// is clamped to its last day (Jan 31 + 1 month = Feb 28/29).
    pub fn expiring_threshold(&self, now: NaiveDate) -> NaiveDate {
        now.checked_add_months(Months::new(self.expiring_months))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_DAYS, DEFAULT_EXPIRING_MONTHS)
    }
}

/// Result of classifying one record against its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusClassification {
    pub status: LifecycleStatus,
    pub effective_expiry: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_expiry: Option<i64>,
    #[serde(skip)]
    grace_days: u32,
}

impl StatusClassification {
    fn new(status: LifecycleStatus, effective_expiry: Option<NaiveDate>, grace_days: u32) -> Self {
        Self {
            status,
            effective_expiry,
            days_since_expiry: None,
            grace_days,
        }
    }

    pub fn status_label(&self) -> String {
        match (self.status, self.days_since_expiry) {
            (LifecycleStatus::Expired, Some(days)) => format!(
                "Expired for {days} days (including {}-day grace)",
                self.grace_days
            ),
            (status, _) => status.label().to_string(),
        }
    }
}

/// Full classification keeping the grace window distinct.
///
/// Returns `None` when the governing expiry date could not be parsed, or when
/// a completed record carries no expiry date at all; such records are left
/// out of every count.
pub fn classify_detailed(
    record: &QualificationAssignmentRecord,
    definition: &QualificationDefinition,
    now: NaiveDate,
    policy: &LifecyclePolicy,
) -> Option<StatusClassification> {
    let grace_days = policy.grace_days();

    if definition.validity.never_expires() {
        return Some(StatusClassification::new(
            LifecycleStatus::NeverExpires,
            None,
            grace_days,
        ));
    }

    let expiry = match record.effective_expiry() {
        // Completed but undated: the expiry is unknown, not pending.
        None if record.qualified_from.is_some() => return None,
        None => {
            return Some(StatusClassification::new(
                LifecycleStatus::NotYetCompleted,
                None,
                grace_days,
            ))
        }
        Some(RecordDate::Unparseable(_)) => return None,
        Some(RecordDate::Valid(date)) => *date,
    };

    let grace_end = policy.grace_end(expiry);
    let classification = if grace_end <= now {
        let mut expired =
            StatusClassification::new(LifecycleStatus::Expired, Some(expiry), grace_days);
        expired.days_since_expiry = Some(now.signed_duration_since(grace_end).num_days());
        expired
    } else if expiry <= now {
        StatusClassification::new(LifecycleStatus::WithinGracePeriod, Some(expiry), grace_days)
    } else if expiry <= policy.expiring_threshold(now) {
        StatusClassification::new(LifecycleStatus::ExpiringSoon, Some(expiry), grace_days)
    } else {
        StatusClassification::new(LifecycleStatus::Active, Some(expiry), grace_days)
    };

    Some(classification)
}

/// Two-way variant used by surfaces that show lapsed-but-in-grace
/// qualifications as "expiring".
pub fn classify_simple(
    record: &QualificationAssignmentRecord,
    definition: &QualificationDefinition,
    now: NaiveDate,
    policy: &LifecyclePolicy,
) -> Option<StatusClassification> {
    classify_detailed(record, definition, now, policy).map(|mut classification| {
        if classification.status == LifecycleStatus::WithinGracePeriod {
            classification.status = LifecycleStatus::ExpiringSoon;
        }
        classification
    })
}

pub fn classify(
    mode: ClassificationMode,
    record: &QualificationAssignmentRecord,
    definition: &QualificationDefinition,
    now: NaiveDate,
    policy: &LifecyclePolicy,
) -> Option<StatusClassification> {
    match mode {
        ClassificationMode::Detailed => classify_detailed(record, definition, now, policy),
        ClassificationMode::Simple => classify_simple(record, definition, now, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn zero_policy_values_fall_back_to_defaults() {
        let policy = LifecyclePolicy::new(0, 0);
        assert_eq!(policy, LifecyclePolicy::default());
        assert_eq!(policy.grace_days(), 14);
        assert_eq!(policy.expiring_months(), 2);

        let custom = LifecyclePolicy::new(30, 3);
        assert_eq!(custom.grace_end(ymd(2025, 1, 1)), ymd(2025, 1, 31));
        assert_eq!(custom.expiring_threshold(ymd(2025, 1, 1)), ymd(2025, 4, 1));
    }

    #[test]
    fn expiring_threshold_uses_calendar_months() {
        let policy = LifecyclePolicy::default();
        assert_eq!(policy.expiring_threshold(ymd(2024, 1, 31)), ymd(2024, 3, 31));
        assert_eq!(policy.expiring_threshold(ymd(2024, 12, 31)), ymd(2025, 2, 28));
        assert_eq!(policy.expiring_threshold(ymd(2023, 12, 31)), ymd(2024, 2, 29));
        assert_eq!(policy.expiring_threshold(ymd(2024, 8, 31)), ymd(2024, 10, 31));
        assert_eq!(policy.expiring_threshold(ymd(2024, 7, 31)), ymd(2024, 9, 30));
        assert_eq!(policy.expiring_threshold(ymd(2024, 11, 15)), ymd(2025, 1, 15));
    }

    #[test]
    fn grace_end_is_fourteen_days_after_expiry() {
        let policy = LifecyclePolicy::default();
        assert_eq!(policy.grace_end(ymd(2024, 12, 31)), ymd(2025, 1, 14));
        assert_eq!(policy.grace_end(ymd(2024, 2, 20)), ymd(2024, 3, 5));
    }

    #[test]
    fn buckets_fold_grace_into_expiring() {
        assert_eq!(
            LifecycleStatus::NeverExpires.bucket(),
            Some(StatusBucket::Active)
        );
        assert_eq!(
            LifecycleStatus::WithinGracePeriod.bucket(),
            Some(StatusBucket::Expiring)
        );
        assert_eq!(LifecycleStatus::NotYetCompleted.bucket(), None);
    }
}

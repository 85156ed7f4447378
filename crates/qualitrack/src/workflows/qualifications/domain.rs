use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Legacy wire value the HR backend uses for qualifications that never lapse.
const LEGACY_NEVER_EXPIRES_MONTHS: u32 = 999;

/// Identifier wrapper for employees.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Identifier wrapper for catalog qualifications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualificationId(pub String);

/// Identifier wrapper for departments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub String);

/// Identifier wrapper for job positions a qualification can be tied to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionId(pub String);

macro_rules! display_id {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })+
    };
}

display_id!(EmployeeId, QualificationId, DepartmentId, PositionId);

/// How long a completed qualification stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Expires { months: u32 },
    NeverExpires,
}

impl Validity {
    /// Interpret the integer month count exported by the HR backend.
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            0 => None,
            LEGACY_NEVER_EXPIRES_MONTHS => Some(Self::NeverExpires),
            months => Some(Self::Expires { months }),
        }
    }

    pub const fn never_expires(self) -> bool {
        matches!(self, Self::NeverExpires)
    }
}

impl Serialize for Validity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validity::Expires { months } => serializer.serialize_u32(*months),
            Validity::NeverExpires => serializer.serialize_u32(LEGACY_NEVER_EXPIRES_MONTHS),
        }
    }
}

impl<'de> Deserialize<'de> for Validity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let months = u32::deserialize(deserializer)?;
        Validity::from_months(months)
            .ok_or_else(|| serde::de::Error::custom("validity_months must be at least 1"))
    }
}

/// Organizational reason a qualification applies to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationOrigin {
    Mandatory,
    PositionLinked,
    Supplementary,
    Unassigned,
}

/// Catalog entry describing a qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationDefinition {
    pub id: QualificationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "validity_months")]
    pub validity: Validity,
    pub origin: QualificationOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_position_id: Option<PositionId>,
}

/// A date cell as received from upstream. Unparseable input is kept so that
/// classification can exclude the record instead of failing the whole pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDate {
    Valid(NaiveDate),
    Unparseable(String),
}

impl RecordDate {
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `DD.MM.YYYY`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::Valid(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Valid(dt.date_naive());
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d.%m.%Y") {
            return Self::Valid(date);
        }

        Self::Unparseable(raw.to_string())
    }

    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            RecordDate::Valid(date) => Some(*date),
            RecordDate::Unparseable(_) => None,
        }
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(value: NaiveDate) -> Self {
        Self::Valid(value)
    }
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordDate::Valid(date) => date.format("%Y-%m-%d").to_string().serialize(serializer),
            RecordDate::Unparseable(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RecordDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RecordDate::parse(&raw))
    }
}

/// One row of an employee's qualification history. Renewals append new rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationAssignmentRecord {
    pub record_id: u64,
    pub employee_id: EmployeeId,
    pub qualification_id: QualificationId,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub qualified_from: Option<RecordDate>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub to_qualify_until: Option<RecordDate>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub is_qualified_until: Option<RecordDate>,
}

impl QualificationAssignmentRecord {
    /// The date that governs expiry: `is_qualified_until` always wins over the
    /// provisional `to_qualify_until` deadline.
    pub fn effective_expiry(&self) -> Option<&RecordDate> {
        self.is_qualified_until
            .as_ref()
            .or(self.to_qualify_until.as_ref())
    }
}

pub(crate) fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<RecordDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .filter(|value| !value.trim().is_empty())
        .map(|value| RecordDate::parse(&value)))
}

/// Employee attributes the engine needs for grouping and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department_id: DepartmentId,
    #[serde(default)]
    pub supervisor_id: Option<EmployeeId>,
    #[serde(default)]
    pub position_id: Option<PositionId>,
    #[serde(default)]
    pub is_supervisor: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

use super::domain::{QualificationDefinition, QualificationOrigin};
use serde::{Deserialize, Serialize};

/// Tag shown next to a qualification to explain why the employee holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginClass {
    Mandatory,
    PositionLinked,
    Supplementary,
    Unassigned,
}

impl OriginClass {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Mandatory,
            Self::PositionLinked,
            Self::Supplementary,
            Self::Unassigned,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::PositionLinked => "Position",
            Self::Supplementary => "Supplementary",
            Self::Unassigned => "Unassigned",
        }
    }
}

/// A position-linked qualification without a position cannot be attributed to
/// anyone and is reported as unassigned.
pub fn classify_origin(definition: &QualificationDefinition) -> OriginClass {
    match definition.origin {
        QualificationOrigin::Mandatory => OriginClass::Mandatory,
        QualificationOrigin::PositionLinked if definition.linked_position_id.is_some() => {
            OriginClass::PositionLinked
        }
        QualificationOrigin::PositionLinked => OriginClass::Unassigned,
        QualificationOrigin::Supplementary => OriginClass::Supplementary,
        QualificationOrigin::Unassigned => OriginClass::Unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::qualifications::domain::{PositionId, QualificationId, Validity};

    fn definition(origin: QualificationOrigin, position: Option<&str>) -> QualificationDefinition {
        QualificationDefinition {
            id: QualificationId("Q1".to_string()),
            name: "First aid".to_string(),
            description: String::new(),
            validity: Validity::Expires { months: 24 },
            origin,
            linked_position_id: position.map(|value| PositionId(value.to_string())),
        }
    }

    #[test]
    fn maps_each_origin() {
        assert_eq!(
            classify_origin(&definition(QualificationOrigin::Mandatory, None)),
            OriginClass::Mandatory
        );
        assert_eq!(
            classify_origin(&definition(QualificationOrigin::PositionLinked, Some("P7"))),
            OriginClass::PositionLinked
        );
        assert_eq!(
            classify_origin(&definition(QualificationOrigin::Supplementary, None)),
            OriginClass::Supplementary
        );
        assert_eq!(
            classify_origin(&definition(QualificationOrigin::Unassigned, None)),
            OriginClass::Unassigned
        );
    }

    #[test]
    fn position_linked_without_position_is_unassigned() {
        assert_eq!(
            classify_origin(&definition(QualificationOrigin::PositionLinked, None)),
            OriginClass::Unassigned
        );
    }
}

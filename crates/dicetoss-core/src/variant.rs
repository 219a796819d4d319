//! The kinds of object that can be thrown.

use serde::{Deserialize, Serialize};

use crate::angle_tables::{AngleTableEntry, BOTTLE_TABLE, DIE20_TABLE, DIE6_TABLE};

/// All supported rollable variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollableVariant {
    Die6,
    Die20,
    Bottle,
}

impl RollableVariant {
    pub fn all() -> [RollableVariant; 3] {
        [
            RollableVariant::Die6,
            RollableVariant::Die20,
            RollableVariant::Bottle,
        ]
    }

    /// Number of distinct outcomes.
    pub fn face_count(&self) -> usize {
        self.angle_table().len()
    }

    pub fn name(&self) -> &'static str {
        match self {
            RollableVariant::Die6 => "D6",
            RollableVariant::Die20 => "D20",
            RollableVariant::Bottle => "Bottle",
        }
    }

    pub fn parse(s: &str) -> Option<RollableVariant> {
        match s.to_lowercase().as_str() {
            "d6" | "die6" => Some(RollableVariant::Die6),
            "d20" | "die20" => Some(RollableVariant::Die20),
            "bottle" => Some(RollableVariant::Bottle),
            _ => None,
        }
    }

    pub fn angle_table(&self) -> &'static [AngleTableEntry] {
        match self {
            RollableVariant::Die6 => &DIE6_TABLE,
            RollableVariant::Die20 => &DIE20_TABLE,
            RollableVariant::Bottle => &BOTTLE_TABLE,
        }
    }

    /// Whether a settled orientation must sit inside a fixed tolerance of a
    /// table entry instead of snapping to the nearest one.
    pub fn uses_tolerance_match(&self) -> bool {
        matches!(self, RollableVariant::Bottle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_count() {
        assert_eq!(RollableVariant::Die6.face_count(), 6);
        assert_eq!(RollableVariant::Die20.face_count(), 20);
        assert_eq!(RollableVariant::Bottle.face_count(), 2);
    }

    #[test]
    fn test_parse() {
        assert_eq!(RollableVariant::parse("d6"), Some(RollableVariant::Die6));
        assert_eq!(RollableVariant::parse("D20"), Some(RollableVariant::Die20));
        assert_eq!(
            RollableVariant::parse("Bottle"),
            Some(RollableVariant::Bottle)
        );
        assert_eq!(RollableVariant::parse("d8"), None);
        assert_eq!(RollableVariant::parse(""), None);
    }

    #[test]
    fn test_only_bottle_uses_tolerance() {
        assert!(!RollableVariant::Die6.uses_tolerance_match());
        assert!(!RollableVariant::Die20.uses_tolerance_match());
        assert!(RollableVariant::Bottle.uses_tolerance_match());
    }
}

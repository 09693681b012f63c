use crate::enums::{ContactType, ProfileTable};

// ============================================================================
// Field Map
// ============================================================================

/// One scalar profile attribute: the edit input, the display element and the
/// backend column it is persisted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub edit_id: &'static str,
    pub display_id: &'static str,
    pub db_column: &'static str,
    pub table: ProfileTable,
}

impl FieldDescriptor {
    const fn new(
        edit_id: &'static str,
        display_id: &'static str,
        db_column: &'static str,
        table: ProfileTable,
    ) -> Self {
        Self {
            edit_id,
            display_id,
            db_column,
            table,
        }
    }

    /// Logical identity of the attribute, `table:column`
    pub fn key(&self) -> String {
        format!("{}:{}", self.table.code(), self.db_column)
    }

    /// Element id of this attribute on the given side of the sheet
    pub fn element_id(&self, side: SheetSide) -> &'static str {
        match side {
            SheetSide::Edit => self.edit_id,
            SheetSide::Display => self.display_id,
        }
    }
}

/// Shared by the edit and display paths so both agree on identifiers.
pub const FIELD_MAP: &[FieldDescriptor] = &[
    FieldDescriptor::new("handle", "display-handle", "handle", ProfileTable::Character),
    FieldDescriptor::new("role", "display-role", "role", ProfileTable::Character),
    FieldDescriptor::new(
        "role-ability",
        "display-role-ability",
        "role_ability",
        ProfileTable::Character,
    ),
    FieldDescriptor::new("rank", "display-rank", "rank", ProfileTable::Character),
    FieldDescriptor::new("ability", "display-ability", "ability", ProfileTable::Character),
    FieldDescriptor::new(
        "languages",
        "display-languages",
        "languages",
        ProfileTable::Character,
    ),
    FieldDescriptor::new(
        "family-background",
        "display-family-background",
        "family_background",
        ProfileTable::Background,
    ),
    FieldDescriptor::new(
        "childhood-environment",
        "display-childhood-environment",
        "childhood_environment",
        ProfileTable::Background,
    ),
    FieldDescriptor::new(
        "improvement-current",
        "display-improvement-current",
        "improvement_points",
        ProfileTable::Character,
    ),
    FieldDescriptor::new(
        "reputation-events",
        "display-reputation-events",
        "reputation_event",
        ProfileTable::Reputation,
    ),
    FieldDescriptor::new(
        "reputation",
        "display-reputation",
        "reputation_score",
        ProfileTable::Reputation,
    ),
    FieldDescriptor::new(
        "cultural-region",
        "display-cultural-region",
        "cultural_region",
        ProfileTable::Character,
    ),
    FieldDescriptor::new(
        "clothing-style",
        "display-clothing-style",
        "clothing_style",
        ProfileTable::Character,
    ),
    FieldDescriptor::new(
        "hairstyle",
        "display-hairstyle",
        "hairstyle",
        ProfileTable::Character,
    ),
    FieldDescriptor::new(
        "affectation",
        "display-affectation",
        "affectation",
        ProfileTable::Character,
    ),
];

/// Descriptors persisted to `table`, in map order
pub fn descriptors_for(table: ProfileTable) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELD_MAP.iter().filter(move |d| d.table == table)
}

/// Columns the backend accepts for `table`
pub fn is_known_column(table: ProfileTable, column: &str) -> bool {
    descriptors_for(table).any(|d| d.db_column == column)
}

// ============================================================================
// Slot identifiers
// ============================================================================

pub const CRITICAL_INJURIES_ID: &str = "critical-injuries";
pub const ADDICTIONS_ID: &str = "addictions";

/// Which fragment an element id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    Edit,
    Display,
}

impl SheetSide {
    fn prefixed(&self, id: &str) -> String {
        match self {
            SheetSide::Edit => id.to_string(),
            SheetSide::Display => format!("display-{}", id),
        }
    }

    /// `friend-{slot}` / `love-{slot}` (1-based)
    pub fn contact_id(&self, kind: ContactType, slot: usize) -> String {
        self.prefixed(&format!("{}-{}", kind.code(), slot))
    }

    /// `enemy-{slot}-{who|caused|throw|happen}` (1-based)
    pub fn enemy_id(&self, slot: usize, part: EnemyPart) -> String {
        self.prefixed(&format!("enemy-{}-{}", slot, part.suffix()))
    }

    pub fn critical_injuries_id(&self) -> String {
        self.prefixed(CRITICAL_INJURIES_ID)
    }

    pub fn addictions_id(&self) -> String {
        self.prefixed(ADDICTIONS_ID)
    }

    /// Every element id the bio fragment on this side can carry.
    pub fn all_element_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = FIELD_MAP
            .iter()
            .map(|d| d.element_id(*self).to_string())
            .collect();
        for kind in [ContactType::Friend, ContactType::Love] {
            for slot in 1..=kind.slot_count() {
                ids.push(self.contact_id(kind, slot));
            }
        }
        for slot in 1..=ContactType::Enemy.slot_count() {
            for part in EnemyPart::ALL {
                ids.push(self.enemy_id(slot, part));
            }
        }
        ids.push(self.critical_injuries_id());
        ids.push(self.addictions_id());
        ids
    }
}

/// Sub-fields of an enemy slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyPart {
    Who,
    Caused,
    Throw,
    Happen,
}

impl EnemyPart {
    pub const ALL: [EnemyPart; 4] = [
        EnemyPart::Who,
        EnemyPart::Caused,
        EnemyPart::Throw,
        EnemyPart::Happen,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            EnemyPart::Who => "who",
            EnemyPart::Caused => "caused",
            EnemyPart::Throw => "throw",
            EnemyPart::Happen => "happen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn edit_ids_are_unique() {
        let ids: HashSet<_> = FIELD_MAP.iter().map(|d| d.edit_id).collect();
        assert_eq!(ids.len(), FIELD_MAP.len());
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = FIELD_MAP.iter().map(|d| d.key()).collect();
        assert_eq!(keys.len(), FIELD_MAP.len());
    }

    #[test]
    fn display_ids_follow_edit_ids() {
        for d in FIELD_MAP {
            assert_eq!(d.display_id, format!("display-{}", d.edit_id));
        }
    }

    #[test]
    fn slot_ids() {
        assert_eq!(SheetSide::Edit.contact_id(ContactType::Friend, 1), "friend-1");
        assert_eq!(
            SheetSide::Display.contact_id(ContactType::Love, 4),
            "display-love-4"
        );
        assert_eq!(SheetSide::Edit.enemy_id(3, EnemyPart::Throw), "enemy-3-throw");
        assert_eq!(
            SheetSide::Display.enemy_id(2, EnemyPart::Happen),
            "display-enemy-2-happen"
        );
        assert_eq!(
            SheetSide::Display.critical_injuries_id(),
            "display-critical-injuries"
        );
    }

    #[test]
    fn all_element_ids_cover_every_slot() {
        let ids = SheetSide::Edit.all_element_ids();
        // 15 scalars + 4 friends + 4 loves + 3 * 4 enemy parts + 2 text blocks
        assert_eq!(ids.len(), FIELD_MAP.len() + 4 + 4 + 12 + 2);
        assert!(ids.contains(&"enemy-1-who".to_string()));
        assert!(ids.contains(&"addictions".to_string()));
    }

    #[test]
    fn known_columns() {
        assert!(is_known_column(ProfileTable::Character, "handle"));
        assert!(is_known_column(ProfileTable::Reputation, "reputation_score"));
        assert!(!is_known_column(ProfileTable::Background, "handle"));
        assert!(!is_known_column(ProfileTable::Character, "character_id"));
    }
}

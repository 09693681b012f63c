use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::field_map::FieldDescriptor;
use crate::enums::ProfileTable;

/// Column name → value for one backend table
pub type ColumnValues = BTreeMap<String, String>;

// ============================================================================
// Contacts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

impl ContactDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDto {
    pub name: String,
    #[serde(default)]
    pub who_wronged: String,
    #[serde(default)]
    pub what_caused: String,
    #[serde(default)]
    pub what_throw_down: String,
    #[serde(default)]
    pub what_happened: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsDto {
    #[serde(default)]
    pub friends: Vec<ContactDto>,
    #[serde(default)]
    pub loves: Vec<ContactDto>,
    #[serde(default)]
    pub enemies: Vec<EnemyDto>,
}

// ============================================================================
// Status conditions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalInjuryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CriticalInjuryDto {
    /// `description` wins over `injury_name`
    pub fn label(&self) -> &str {
        prefer(&self.description, &self.injury_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddictionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AddictionDto {
    /// `description` wins over `substance`
    pub fn label(&self) -> &str {
        prefer(&self.description, &self.substance)
    }
}

fn prefer<'a>(first: &'a Option<String>, second: &'a Option<String>) -> &'a str {
    match first.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => second.as_deref().unwrap_or_default(),
    }
}

// ============================================================================
// GET /api/character/:id
// ============================================================================

/// Full character sheet as returned by the backend.
///
/// Table sections are kept as raw JSON objects: the backend adds bookkeeping
/// columns (ids, timestamps) next to the mapped ones and values may arrive as
/// numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default)]
    pub character: Map<String, Value>,
    #[serde(default)]
    pub background: Map<String, Value>,
    #[serde(default)]
    pub reputation: Map<String, Value>,
    #[serde(default)]
    pub contacts: ContactsDto,
    #[serde(default)]
    pub critical_injuries: Vec<CriticalInjuryDto>,
    #[serde(default)]
    pub addictions: Vec<AddictionDto>,
}

impl CharacterRecord {
    pub fn section(&self, table: ProfileTable) -> &Map<String, Value> {
        match table {
            ProfileTable::Character => &self.character,
            ProfileTable::Background => &self.background,
            ProfileTable::Reputation => &self.reputation,
        }
    }

    pub fn section_mut(&mut self, table: ProfileTable) -> &mut Map<String, Value> {
        match table {
            ProfileTable::Character => &mut self.character,
            ProfileTable::Background => &mut self.background,
            ProfileTable::Reputation => &mut self.reputation,
        }
    }

    /// Stored text for a descriptor; absent or null reads as empty.
    pub fn value_of(&self, descriptor: &FieldDescriptor) -> String {
        self.section(descriptor.table)
            .get(descriptor.db_column)
            .map(value_text)
            .unwrap_or_default()
    }

    /// Injuries joined one per line, `None` when nothing is stored.
    pub fn critical_injuries_text(&self) -> Option<String> {
        if self.critical_injuries.is_empty() {
            return None;
        }
        Some(
            self.critical_injuries
                .iter()
                .map(|i| i.label())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Addictions joined one per line, `None` when nothing is stored.
    pub fn addictions_text(&self) -> Option<String> {
        if self.addictions.is_empty() {
            return None;
        }
        Some(
            self.addictions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// PUT /api/character/:id
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUpdate {
    #[serde(default)]
    pub character: ColumnValues,
    #[serde(default)]
    pub background: ColumnValues,
    #[serde(default)]
    pub contacts: ContactsDto,
    #[serde(default)]
    pub reputation: ColumnValues,
    #[serde(default)]
    pub critical_injuries: String,
    #[serde(default)]
    pub addictions: String,
}

impl CharacterUpdate {
    pub fn section(&self, table: ProfileTable) -> &ColumnValues {
        match table {
            ProfileTable::Character => &self.character,
            ProfileTable::Background => &self.background,
            ProfileTable::Reputation => &self.reputation,
        }
    }

    pub fn section_mut(&mut self, table: ProfileTable) -> &mut ColumnValues {
        match table {
            ProfileTable::Character => &mut self.character,
            ProfileTable::Background => &mut self.background,
            ProfileTable::Reputation => &mut self.reputation,
        }
    }

    /// Stage a scalar under the descriptor's table and column
    pub fn stage(&mut self, descriptor: &FieldDescriptor, value: String) {
        self.section_mut(descriptor.table)
            .insert(descriptor.db_column.to_string(), value);
    }
}

/// Acknowledgment body of a successful PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    pub success: bool,
    pub message: String,
}

/// Row of `GET /api/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub character_id: i32,
    pub handle: String,
    pub role: String,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_character::field_map::FIELD_MAP;
    use serde_json::json;

    #[test]
    fn record_decodes_backend_shape() {
        let body = json!({
            "character": { "character_id": 1, "handle": "V", "rank": 4, "role": null },
            "background": { "family_background": "Nomad" },
            "reputation": {},
            "contacts": {
                "friends": [{ "name": "Jackie", "notes": "" }],
                "loves": [],
                "enemies": [{ "name": "Arasaka", "what_caused": "Heist" }]
            },
            "critical_injuries": [{ "injury_name": "Ribs", "description": "Cracked ribs" }],
            "addictions": [{ "substance": "Nicotine", "severity": "mild" }]
        });
        let record: CharacterRecord = serde_json::from_value(body).unwrap();

        let handle = FIELD_MAP.iter().find(|d| d.edit_id == "handle").unwrap();
        let rank = FIELD_MAP.iter().find(|d| d.edit_id == "rank").unwrap();
        let role = FIELD_MAP.iter().find(|d| d.edit_id == "role").unwrap();
        let languages = FIELD_MAP.iter().find(|d| d.edit_id == "languages").unwrap();
        assert_eq!(record.value_of(handle), "V");
        assert_eq!(record.value_of(rank), "4");
        assert_eq!(record.value_of(role), "");
        assert_eq!(record.value_of(languages), "");
        assert_eq!(record.contacts.enemies[0].what_throw_down, "");
        assert_eq!(record.critical_injuries_text().as_deref(), Some("Cracked ribs"));
        assert_eq!(record.addictions_text().as_deref(), Some("Nicotine"));
    }

    #[test]
    fn missing_sections_default() {
        let record: CharacterRecord = serde_json::from_str("{}").unwrap();
        assert!(record.contacts.friends.is_empty());
        assert_eq!(record.critical_injuries_text(), None);
        assert_eq!(record.addictions_text(), None);
    }

    #[test]
    fn labels_prefer_description() {
        let injury = CriticalInjuryDto {
            injury_name: Some("Broken arm".into()),
            description: Some(String::new()),
        };
        assert_eq!(injury.label(), "Broken arm");

        let addiction = AddictionDto {
            substance: Some("Synthcoke".into()),
            severity: None,
            description: Some("Synthcoke, twice a day".into()),
        };
        assert_eq!(addiction.label(), "Synthcoke, twice a day");

        assert_eq!(CriticalInjuryDto::default().label(), "");
    }

    #[test]
    fn stage_routes_by_table() {
        let mut update = CharacterUpdate::default();
        for d in FIELD_MAP {
            update.stage(d, d.edit_id.to_uppercase());
        }
        assert_eq!(update.character.get("handle").map(String::as_str), Some("HANDLE"));
        assert_eq!(
            update.background.get("family_background").map(String::as_str),
            Some("FAMILY-BACKGROUND")
        );
        assert_eq!(
            update.reputation.get("reputation_score").map(String::as_str),
            Some("REPUTATION")
        );
        let total = update.character.len() + update.background.len() + update.reputation.len();
        assert_eq!(total, FIELD_MAP.len());
    }
}

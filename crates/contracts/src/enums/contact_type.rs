use serde::{Deserialize, Serialize};

/// Kind of contact row stored for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Friend,
    Love,
    Enemy,
}

impl ContactType {
    pub fn code(&self) -> &'static str {
        match self {
            ContactType::Friend => "friend",
            ContactType::Love => "love",
            ContactType::Enemy => "enemy",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "friend" => Some(ContactType::Friend),
            "love" => Some(ContactType::Love),
            "enemy" => Some(ContactType::Enemy),
            _ => None,
        }
    }

    /// Number of form slots the sheet offers for this kind
    pub fn slot_count(&self) -> usize {
        match self {
            ContactType::Friend | ContactType::Love => 4,
            ContactType::Enemy => 3,
        }
    }
}

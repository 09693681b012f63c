use serde::{Deserialize, Serialize};

/// Backend table that owns a scalar profile column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTable {
    Character,
    Background,
    Reputation,
}

impl ProfileTable {
    /// Key used in the JSON payload sections
    pub fn code(&self) -> &'static str {
        match self {
            ProfileTable::Character => "character",
            ProfileTable::Background => "background",
            ProfileTable::Reputation => "reputation",
        }
    }
}

impl std::fmt::Display for ProfileTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_payload_section_key() {
        assert_eq!(ProfileTable::Background.to_string(), "background");
        assert_eq!(
            serde_json::to_string(&ProfileTable::Reputation).unwrap(),
            "\"reputation\""
        );
    }
}

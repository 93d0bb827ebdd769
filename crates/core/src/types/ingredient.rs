//! Ingredient domain type.
//!
//! A placeholder record shape: it carries no behavior and is not yet bound
//! to any persistence layer.

use serde::{Deserialize, Serialize};

use crate::types::ShortId;

/// An ingredient a recipe can call for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient ID.
    pub id: ShortId,
    /// Display name, e.g. "basil".
    pub name: String,
    /// Optional grouping, e.g. "herbs".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional measuring unit, e.g. "grams".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let ingredient = Ingredient {
            id: ShortId::from("abc123xyz".to_owned()),
            name: "basil".to_owned(),
            category: None,
            unit: None,
        };

        let json = serde_json::to_string(&ingredient).unwrap();
        assert!(!json.contains("category"));
        assert!(!json.contains("unit"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let ingredient = Ingredient {
            id: ShortId::generate(),
            name: "flour".to_owned(),
            category: Some("baking".to_owned()),
            unit: Some("grams".to_owned()),
        };

        let json = serde_json::to_string(&ingredient).unwrap();
        let parsed: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ingredient);
    }
}

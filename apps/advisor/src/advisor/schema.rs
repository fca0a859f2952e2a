//! Schema Synthesizer — turns entity nouns found in the document into a toy
//! JSON-Schema object.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::advisor::vocabulary::{ENTITY_VOCABULARY, FALLBACK_PROPERTY};

const OBJECT_TYPE: &str = "object";
const STRING_TYPE: &str = "string";

/// Minimal JSON-Schema-shaped object: `{"type": "object", "properties": {...}}`.
///
/// `properties` keeps insertion order (`serde_json/preserve_order`), which follows
/// `ENTITY_VOCABULARY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDraft {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: Map<String, Value>,
}

impl SchemaDraft {
    fn with_properties<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let properties = names
            .into_iter()
            .map(|name| (name.to_string(), json!({ "type": STRING_TYPE })))
            .collect();
        SchemaDraft {
            schema_type: OBJECT_TYPE.to_string(),
            properties,
        }
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// True when no entity matched and only the placeholder property is present.
    pub fn is_fallback(&self) -> bool {
        self.properties.len() == 1 && self.properties.contains_key(FALLBACK_PROPERTY)
    }
}

/// Scans `text` for entity nouns and builds the schema.
///
/// Matching is plain case-insensitive containment, not whole-word: "users"
/// still yields a `user` property.
pub fn synthesize_schema(text: &str) -> SchemaDraft {
    let lowered = text.to_lowercase();
    let entities: Vec<&str> = ENTITY_VOCABULARY
        .iter()
        .copied()
        .filter(|entity| lowered.contains(entity))
        .collect();

    if entities.is_empty() {
        SchemaDraft::with_properties([FALLBACK_PROPERTY])
    } else {
        SchemaDraft::with_properties(entities)
    }
}

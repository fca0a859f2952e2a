//! Draft Spec Assembler — the exported `api_spec.json` artifact.

use serde::{Deserialize, Serialize};

use crate::advisor::api_style::ApiStyle;
use crate::advisor::keywords::KeywordSet;
use crate::advisor::schema::SchemaDraft;

pub const DRAFT_SPEC_FILE_NAME: &str = "api_spec.json";
pub const DRAFT_SPEC_MIME: &str = "application/json";

/// Recommendation, keywords and schema bundled for download.
/// Field order is the key order of the exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSpec {
    pub api_type: String,
    pub keywords: KeywordSet,
    pub schema: SchemaDraft,
}

impl DraftSpec {
    pub fn assemble(api_style: ApiStyle, keywords: KeywordSet, schema: SchemaDraft) -> Self {
        DraftSpec {
            api_type: api_style.label().to_string(),
            keywords,
            schema,
        }
    }

    /// Pretty-printed with 2-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(test)]
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

// Advisor: keyword scan → API style → schema → draft spec.
// The pipeline functions are total over their input string; only the HTTP
// handlers can fail, and only on upload problems.

pub mod api_style;
pub mod boilerplate;
pub mod draft;
pub mod handlers;
pub mod keywords;
pub mod schema;
pub mod vocabulary;

use serde::Serialize;
use tracing::debug;

pub use api_style::{select_api_style, ApiStyle};
pub use boilerplate::{security_snippet, CodeSnippet};
pub use draft::{DraftSpec, DRAFT_SPEC_FILE_NAME, DRAFT_SPEC_MIME};
pub use keywords::{extract_keywords, KeywordSet};
pub use schema::{synthesize_schema, SchemaDraft};

/// Short explainer shown alongside every analysis.
pub const API_PRIMER: &str = "An API (Application Programming Interface) allows two software \
systems to communicate. It defines endpoints, methods, and data formats. Common types: REST \
(JSON over HTTP), GraphQL, gRPC.";

/// Everything computed from one document's text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub keywords: KeywordSet,
    pub api_style: ApiStyle,
    pub api_type: &'static str,
    pub schema: SchemaDraft,
    pub security_snippet: CodeSnippet,
    pub draft_spec: DraftSpec,
}

/// Runs the full advisor pipeline over extracted text.
pub fn analyze(text: &str) -> Analysis {
    let keywords = extract_keywords(text);
    let api_style = select_api_style(&keywords);
    let schema = synthesize_schema(text);
    let draft_spec = DraftSpec::assemble(api_style, keywords.clone(), schema.clone());

    debug!(
        chars = text.len(),
        keywords = ?keywords.iter().collect::<Vec<_>>(),
        properties = ?schema.property_names().collect::<Vec<_>>(),
        fallback_schema = schema.is_fallback(),
        api_style = ?api_style,
        "Document analyzed"
    );

    if keywords.is_empty() {
        debug!("No vocabulary keywords matched, recommending {}", api_style.label());
    }

    Analysis {
        keywords,
        api_style,
        api_type: api_style.label(),
        schema,
        security_snippet: security_snippet(),
        draft_spec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_sample_rfp() {
        let analysis =
            analyze("This system requires secure real-time user data with a report module");
        assert_eq!(analysis.api_style, ApiStyle::Grpc);
        assert_eq!(analysis.api_type, api_style::GRPC_LABEL);
        assert!(analysis.keywords.contains("real-time"));
        assert!(analysis.schema.properties.contains_key("user"));
        assert!(analysis.schema.properties.contains_key("report"));
    }

    #[test]
    fn test_draft_mirrors_analysis() {
        let analysis = analyze("Quarterly report for each product");
        assert_eq!(analysis.draft_spec.api_type, analysis.api_type);
        assert_eq!(analysis.draft_spec.keywords, analysis.keywords);
        assert_eq!(analysis.draft_spec.schema, analysis.schema);
        assert_eq!(analysis.api_style, ApiStyle::GraphQl);
    }

    #[test]
    fn test_empty_text_analysis() {
        let analysis = analyze("");
        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.api_style, ApiStyle::Rest);
        assert!(analysis.schema.is_fallback());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "Scalable JSON order API with auth";
        let a = analyze(text);
        let b = analyze(text);
        assert_eq!(
            a.draft_spec.to_pretty_json().unwrap(),
            b.draft_spec.to_pretty_json().unwrap()
        );
    }

    #[test]
    fn test_primer_names_all_three_styles() {
        for style in ["REST", "GraphQL", "gRPC"] {
            assert!(API_PRIMER.contains(style));
        }
    }
}

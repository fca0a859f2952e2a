//! API Style Selector — precedence rules over the matched keyword set.

use serde::{Deserialize, Serialize};

use crate::advisor::keywords::KeywordSet;
use crate::advisor::vocabulary::{FLEXIBLE_HINT, REAL_TIME, REPORT};

pub const GRPC_LABEL: &str = "gRPC (real-time, high-performance)";
pub const GRAPHQL_LABEL: &str = "GraphQL API (flexible queries over structured data)";
pub const REST_LABEL: &str = "REST API (standard JSON over HTTP)";

/// Recommended API style. Closed set; each variant has one fixed label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStyle {
    Grpc,
    #[serde(rename = "graphql")]
    GraphQl,
    #[default]
    Rest,
}

impl ApiStyle {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStyle::Grpc => GRPC_LABEL,
            ApiStyle::GraphQl => GRAPHQL_LABEL,
            ApiStyle::Rest => REST_LABEL,
        }
    }
}

/// Picks the API style. First matching rule wins:
/// 1. `real-time` → gRPC
/// 2. `report` or `flexible` → GraphQL
/// 3. otherwise REST
///
/// The `flexible` check never fires for extracted sets; it stays so that a
/// caller-supplied set containing it still selects GraphQL.
pub fn select_api_style(keywords: &KeywordSet) -> ApiStyle {
    if keywords.contains(REAL_TIME) {
        ApiStyle::Grpc
    } else if keywords.contains(REPORT) || keywords.contains(FLEXIBLE_HINT) {
        ApiStyle::GraphQl
    } else {
        ApiStyle::Rest
    }
}

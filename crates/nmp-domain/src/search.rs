//! Cross-module search payloads (`POST /search`)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which module to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Everything
    All,
    /// Meetings only
    Meetings,
    /// Documents only
    Documents,
    /// Board members only
    Board,
    /// Compliance records only
    Compliance,
}

impl Default for SearchKind {
    fn default() -> Self {
        SearchKind::All
    }
}

/// Search request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Query text
    pub query: String,
    /// Module scope
    #[serde(rename = "type", default)]
    pub kind: SearchKind,
    /// Backend-interpreted filters
    #[serde(default)]
    pub filters: HashMap<String, String>,
}

impl SearchRequest {
    /// Search everything for `query`
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            kind: SearchKind::All,
            filters: HashMap::new(),
        }
    }

    /// Restrict to one module
    #[must_use]
    pub fn with_kind(mut self, kind: SearchKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Search response body; result shapes are backend-defined
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching records as raw JSON
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

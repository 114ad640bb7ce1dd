//! Document storage metadata

use crate::ids::DocumentId;
use serde::{Deserialize, Serialize};

/// Document category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Legal documents (bylaws, articles)
    Legal,
    /// Meeting minutes
    Minutes,
    /// Financial records
    Financial,
    /// Policies
    Policies,
    /// Forms
    Forms,
    /// Everything else
    Other,
}

impl DocumentCategory {
    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Legal => "Legal",
            DocumentCategory::Minutes => "Minutes",
            DocumentCategory::Financial => "Financial",
            DocumentCategory::Policies => "Policies",
            DocumentCategory::Forms => "Forms",
            DocumentCategory::Other => "Other",
        }
    }
}

/// Stored document metadata (the file itself lives in backend storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Record id
    pub id: DocumentId,
    /// Document title
    pub title: String,
    /// Category
    pub category: DocumentCategory,
    /// Original file name
    pub file_name: String,
    /// Size in bytes
    pub file_size: u64,
    /// MIME type
    #[serde(default)]
    pub file_type: String,
    /// Version number, starting at 1
    pub version: u32,
    /// Whether this is the current version of the document
    pub is_current_version: bool,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Format a byte count the way the document list displays it
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 KB".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_formatting() {
        assert_eq!(format_file_size(0), "0 KB");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }

    #[test]
    fn category_wire_form_is_snake_case() {
        let json = serde_json::to_string(&DocumentCategory::Legal).unwrap();
        assert_eq!(json, "\"legal\"");
    }
}

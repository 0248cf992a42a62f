use crate::error::{ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One extracted function/component, as reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Source file the unit lives in.
    pub file: String,

    /// Function/component name. Used as the node label; not unique across files.
    pub function: String,

    /// Source snippet for this unit, empty if the analyzer could not capture it.
    #[serde(default)]
    pub code: String,

    /// Names of other records' `function` values this unit references.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Free-text names outside the analyzed codebase (libraries, APIs).
    #[serde(default)]
    pub dependencies_external: Vec<String>,

    /// Full text of `file` (older wire variant only; the newer variant
    /// carries file text in the batch-level `filesContent` list instead).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    path: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBatch {
    #[serde(default)]
    nodes: Vec<ExtractionRecord>,

    #[serde(default)]
    files_content: Vec<FileEntry>,
}

/// One full extraction batch, normalized from either wire variant.
///
/// A batch is the unit of graph (re)construction: the store wipes and
/// rebuilds from exactly one batch.
#[derive(Debug, Clone, Default)]
pub struct ExtractionBatch {
    pub records: Vec<ExtractionRecord>,

    /// Path → full file text, merged from both wire variants.
    pub files: BTreeMap<String, String>,
}

impl ExtractionBatch {
    /// Parse and validate a batch from extraction JSON.
    ///
    /// Validation runs to completion before the caller touches any store,
    /// so a malformed batch never costs an existing graph generation.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawBatch = serde_json::from_str(raw)?;

        let mut files = BTreeMap::new();
        for entry in raw.files_content {
            files.insert(entry.path, entry.content);
        }
        for record in &raw.nodes {
            if let Some(content) = &record.file_content {
                files
                    .entry(record.file.clone())
                    .or_insert_with(|| content.clone());
            }
        }

        let batch = Self {
            records: raw.nodes,
            files,
        };
        batch.validate()?;
        Ok(batch)
    }

    /// Read a batch from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            if record.file.trim().is_empty() {
                return Err(ExtractionError::InvalidRecord {
                    index,
                    reason: "missing file path".to_string(),
                });
            }
            if record.function.trim().is_empty() {
                return Err(ExtractionError::InvalidRecord {
                    index,
                    reason: "missing function name".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_batch_with_embedded_file_content() {
        let json = r#"{
            "nodes": [
                {
                    "file": "src/app.js",
                    "function": "render",
                    "code": "function render() {}",
                    "dependencies": ["layout"],
                    "dependenciesExternal": ["react"],
                    "fileContent": "function render() {}\n"
                }
            ]
        }"#;

        let batch = ExtractionBatch::from_json(json).unwrap();
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].function, "render");
        assert_eq!(batch.records[0].dependencies, vec!["layout"]);
        assert_eq!(batch.records[0].dependencies_external, vec!["react"]);
        assert_eq!(
            batch.files.get("src/app.js").map(String::as_str),
            Some("function render() {}\n")
        );
    }

    #[test]
    fn parses_batch_with_separate_files_content() {
        let json = r#"{
            "nodes": [
                {"file": "src/app.js", "function": "render"}
            ],
            "filesContent": [
                {"path": "src/app.js", "content": "whole file"}
            ]
        }"#;

        let batch = ExtractionBatch::from_json(json).unwrap();
        assert_eq!(
            batch.files.get("src/app.js").map(String::as_str),
            Some("whole file")
        );
    }

    #[test]
    fn both_variants_normalize_identically() {
        let embedded = r#"{
            "nodes": [{"file": "a.js", "function": "f", "fileContent": "text"}]
        }"#;
        let separate = r#"{
            "nodes": [{"file": "a.js", "function": "f"}],
            "filesContent": [{"path": "a.js", "content": "text"}]
        }"#;

        let a = ExtractionBatch::from_json(embedded).unwrap();
        let b = ExtractionBatch::from_json(separate).unwrap();
        assert_eq!(a.files, b.files);
        assert_eq!(a.records[0].file, b.records[0].file);
        assert_eq!(a.records[0].function, b.records[0].function);
    }

    #[test]
    fn batch_level_content_wins_over_embedded() {
        let json = r#"{
            "nodes": [{"file": "a.js", "function": "f", "fileContent": "old"}],
            "filesContent": [{"path": "a.js", "content": "new"}]
        }"#;

        let batch = ExtractionBatch::from_json(json).unwrap();
        assert_eq!(batch.files.get("a.js").map(String::as_str), Some("new"));
    }

    #[test]
    fn rejects_record_without_function_name() {
        let json = r#"{"nodes": [{"file": "a.js", "function": ""}]}"#;

        let err = ExtractionBatch::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::InvalidRecord { index: 0, .. }
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = ExtractionBatch::from_json("not json").unwrap_err();
        assert!(matches!(err, ExtractionError::JsonError(_)));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let json = r#"{"nodes": [{"file": "a.js", "function": "f"}]}"#;

        let batch = ExtractionBatch::from_json(json).unwrap();
        let record = &batch.records[0];
        assert_eq!(record.code, "");
        assert!(record.dependencies.is_empty());
        assert!(record.dependencies_external.is_empty());
        assert!(record.file_content.is_none());
    }
}

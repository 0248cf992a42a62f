use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Group assigned to placeholder nodes for unresolved dependency names.
pub const GROUP_UNKNOWN: &str = "unknown";

/// Group assigned to dependencies outside the analyzed codebase.
pub const GROUP_EXTERNAL: &str = "external";

/// One graph entity: an extracted function/component, an unresolved
/// reference, or an external dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepNode {
    /// Globally unique within one graph generation.
    pub id: String,

    /// Display name; may collide across files.
    pub label: String,

    /// Containing directory for resolved nodes, otherwise
    /// [`GROUP_UNKNOWN`] or [`GROUP_EXTERNAL`].
    pub group: String,

    /// Source file path, empty for unresolved/external nodes.
    pub file: String,

    /// Source snippet, empty if unavailable.
    pub code: String,

    /// Entire containing file's text, when the batch supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
}

impl DepNode {
    /// Node for a function/component found in the extraction batch.
    pub fn resolved(file: &str, label: &str, code: &str, file_content: Option<String>) -> Self {
        Self {
            id: Self::resolved_id(file, label),
            label: label.to_string(),
            group: parent_dir(file),
            file: file.to_string(),
            code: code.to_string(),
            file_content,
        }
    }

    /// Placeholder for a dependency name that resolves to no extracted function.
    pub fn unresolved(label: &str) -> Self {
        Self {
            id: format!("{GROUP_UNKNOWN}::{label}"),
            label: label.to_string(),
            group: GROUP_UNKNOWN.to_string(),
            file: String::new(),
            code: String::new(),
            file_content: None,
        }
    }

    /// Node for a library/API dependency outside the analyzed codebase.
    pub fn external(name: &str) -> Self {
        Self {
            id: name.to_string(),
            label: name.to_string(),
            group: GROUP_EXTERNAL.to_string(),
            file: String::new(),
            code: String::new(),
            file_content: None,
        }
    }

    pub fn resolved_id(file: &str, label: &str) -> String {
        format!("{file}::{label}")
    }
}

fn parent_dir(file: &str) -> String {
    Path::new(file)
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Serialized form of one graph generation, used for the snapshot handoff
/// between the load and query invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<DepNode>,

    /// Directed DEPENDS_ON edges as (source id, destination id) pairs.
    pub edges: Vec<(String, String)>,

    /// Path → full file text for optional report inclusion.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

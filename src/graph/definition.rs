use crate::error::GraphLoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The canonical description of a workflow graph, ready for analysis.
/// This is the target structure for any custom data model conversion.
///
/// Neither collection is required to be present in serialized input; a missing
/// `nodes` or `edges` key deserializes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

/// A single node in the workflow. Only the id and the type string are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(rename = "type", alias = "nodeType", default)]
    pub node_type: String,
}

/// A directed connection from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub source: String,
    pub target: String,
}

impl NodeDefinition {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }
}

impl EdgeDefinition {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<NodeDefinition>, edges: Vec<EdgeDefinition>) -> Self {
        Self { nodes, edges }
    }

    /// Parses a graph from a JSON string of the shape `{ "nodes": [...], "edges": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, GraphLoadError> {
        serde_json::from_str(json).map_err(|e| GraphLoadError::Json(e.to_string()))
    }

    /// Loads a graph from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, GraphLoadError> {
        let content = fs::read_to_string(path).map_err(|e| GraphLoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }
}

use super::definition::WorkflowGraph;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a flowstat `WorkflowGraph`.
///
/// Editors store far more per node than the analysis needs (positions, UI state,
/// property values). Implement this on your own structs to strip that down to ids,
/// type strings and connections.
///
/// # Example
///
/// ```rust,no_run
/// use flowstat::prelude::*;
/// use flowstat::error::GraphConversionError;
///
/// struct EditorNode { key: String, kind: String }
/// struct EditorLink { from: String, to: String }
/// struct EditorDocument { nodes: Vec<EditorNode>, links: Vec<EditorLink> }
///
/// impl IntoGraph for EditorDocument {
///     fn into_graph(self) -> std::result::Result<WorkflowGraph, GraphConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| NodeDefinition::new(n.key, n.kind))
///             .collect();
///         let edges = self
///             .links
///             .into_iter()
///             .map(|l| EdgeDefinition::new(l.from, l.to))
///             .collect();
///         Ok(WorkflowGraph::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into an analyzable workflow graph.
    fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError>;
}

impl IntoGraph for WorkflowGraph {
    fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError> {
        Ok(self)
    }
}

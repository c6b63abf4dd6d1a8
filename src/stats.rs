use crate::analysis::{
    Category, CategoryRules, Complexity, ConnectivityStats, Health, StructureStats,
    analyze_health, analyze_structure, calculate_complexity, calculate_connectivity,
};
use crate::error::{CategoryRuleError, GraphConversionError};
use crate::graph::{EdgePolicy, GraphIndex, IntoGraph, WorkflowGraph};
use ahash::AHashMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The complete report for one workflow graph.
///
/// Built fresh on every call and never mutated afterwards; recompute it when
/// the graph changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Category histogram. Only categories that occur are present.
    #[serde(serialize_with = "sorted_histogram")]
    pub node_types: AHashMap<Category, usize>,
    pub complexity: Complexity,
    pub connectivity: ConnectivityStats,
    pub structure: StructureStats,
    pub health: Health,
    /// Edges whose source or target is not a node of the graph.
    pub dangling_edges: usize,
}

fn sorted_histogram<S: Serializer>(
    histogram: &AHashMap<Category, usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    histogram
        .iter()
        .collect::<BTreeMap<_, _>>()
        .serialize(serializer)
}

/// Runs the full analysis pipeline over workflow graphs.
///
/// An analyzer holds only configuration, so one instance can be shared and
/// called from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct WorkflowAnalyzer {
    edge_policy: EdgePolicy,
    rules: CategoryRules,
}

/// Configures a [`WorkflowAnalyzer`]. Starts from the strict edge policy and
/// the built-in category rules.
#[derive(Debug, Clone)]
pub struct WorkflowAnalyzerBuilder {
    edge_policy: EdgePolicy,
    rules: CategoryRules,
}

impl WorkflowAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            edge_policy: EdgePolicy::default(),
            rules: CategoryRules::default(),
        }
    }

    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Adds patterns checked ahead of the built-in ones for `category`.
    pub fn with_category_rule(
        mut self,
        category: Category,
        patterns: &[&str],
    ) -> Result<Self, CategoryRuleError> {
        self.rules.with_patterns(category, patterns)?;
        Ok(self)
    }

    /// Replaces the whole rule table.
    pub fn category_rules(mut self, rules: CategoryRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> WorkflowAnalyzer {
        WorkflowAnalyzer {
            edge_policy: self.edge_policy,
            rules: self.rules,
        }
    }
}

impl Default for WorkflowAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowAnalyzer {
    pub fn builder() -> WorkflowAnalyzerBuilder {
        WorkflowAnalyzerBuilder::new()
    }

    /// Computes the full report for `graph`.
    ///
    /// Categorization, structure and connectivity read only the graph; the
    /// complexity score and health check read only their results.
    pub fn analyze(&self, graph: &WorkflowGraph) -> WorkflowStats {
        let span = tracing::debug_span!(
            "analyze_workflow",
            nodes = graph.nodes.len(),
            edges = graph.edges.len()
        );
        let _guard = span.enter();

        let index = GraphIndex::build(graph, self.edge_policy);
        let node_count = index.node_count();
        let edge_count = index.edges().len();

        let node_types = self.rules.count_node_types(index.nodes().iter().copied());
        let structure = analyze_structure(&index, &node_types);
        let connectivity = calculate_connectivity(node_count, edge_count, &index);
        let complexity = calculate_complexity(node_count, edge_count, &structure, &node_types);
        let health = analyze_health(node_count, edge_count, &structure, &connectivity);

        tracing::debug!(
            complexity = complexity.score,
            level = %complexity.level,
            health = health.score,
            issues = health.issues.len(),
            "workflow analyzed"
        );

        WorkflowStats {
            node_count,
            edge_count,
            node_types,
            complexity,
            connectivity,
            structure,
            health,
            dangling_edges: index.dangling_edges(),
        }
    }

    /// Converts a custom format through [`IntoGraph`] and analyzes the result.
    pub fn analyze_flow<T: IntoGraph>(&self, source: T) -> Result<WorkflowStats, GraphConversionError> {
        let graph = source.into_graph()?;
        Ok(self.analyze(&graph))
    }
}

/// Analyzes `graph` with the default analyzer (strict edge policy, built-in categories).
pub fn calculate_workflow_stats(graph: &WorkflowGraph) -> WorkflowStats {
    WorkflowAnalyzer::default().analyze(graph)
}

//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowstat crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowstat::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = WorkflowGraph::from_file("path/to/workflow.json")?;
//! let stats = calculate_workflow_stats(&graph);
//!
//! println!("{}", ReportFormatter::format_report("workflow.json", &stats));
//! # Ok(())
//! # }
//! ```

// Analysis entry points
pub use crate::stats::{
    WorkflowAnalyzer, WorkflowAnalyzerBuilder, WorkflowStats, calculate_workflow_stats,
};

// Graph model
pub use crate::graph::{
    EdgeDefinition, EdgePolicy, GraphIndex, IntoGraph, NodeDefinition, WorkflowGraph,
};

// Report parts
pub use crate::analysis::{
    Category, CategoryRules, Complexity, ComplexityFactor, ComplexityLevel, ConnectivityStats,
    Health, HealthIssue, IssueKind, Severity, StructureStats,
};

// Error types
pub use crate::error::{CategoryRuleError, GraphConversionError, GraphLoadError};

// Report rendering
pub use crate::report::ReportFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! # flowstat - Workflow Graph Statistics and Health Analysis
//!
//! **flowstat** analyzes node-based workflow graphs (typed nodes joined by directed
//! edges, as drawn in a visual pipeline editor) and produces a single report with
//! node categories, complexity, connectivity, structure and health findings.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical `WorkflowGraph` that
//! only carries node ids, node type strings and edge endpoints:
//!
//! 1.  **Load Your Data**: Parse your editor's save format into your own Rust structs,
//!     or deserialize straight into `WorkflowGraph` if it already has `nodes`/`edges`.
//! 2.  **Convert**: Implement the `IntoGraph` trait for your structs.
//! 3.  **Configure**: Use `WorkflowAnalyzer::builder` to pick an `EdgePolicy` and add
//!     category patterns for your own node types.
//! 4.  **Analyze**: Call `analyze` whenever the graph changes. Every call is independent
//!     and recomputes the whole report.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = WorkflowGraph::new(
//!         vec![
//!             NodeDefinition::new("prompt", "nodetool.input.StringInput"),
//!             NodeDefinition::new("chat", "openai.text.ChatCompletion"),
//!             NodeDefinition::new("result", "nodetool.output.StringOutput"),
//!         ],
//!         vec![
//!             EdgeDefinition::new("prompt", "chat"),
//!             EdgeDefinition::new("chat", "result"),
//!         ],
//!     );
//!
//!     let analyzer = WorkflowAnalyzer::builder()
//!         .with_category_rule(Category::Llm, &[r"^acme\.assistant"])?
//!         .build();
//!     let stats = analyzer.analyze(&graph);
//!
//!     println!("{}", ReportFormatter::format_summary(&stats));
//!     for issue in &stats.health.issues {
//!         println!("[{}] {}", issue.severity, issue.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod stats;

pub use stats::{WorkflowAnalyzer, WorkflowStats, calculate_workflow_stats};

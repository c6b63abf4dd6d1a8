//! The individual graph analyses. Every function here is pure and total: it
//! reads a [`GraphIndex`](crate::graph::GraphIndex) or already-computed values
//! and returns a fresh result.

pub mod branches;
pub mod category;
pub mod complexity;
pub mod connectivity;
pub mod cycles;
pub mod depth;
pub mod health;
pub mod structure;

pub use branches::count_branches;
pub use category::{Category, CategoryRules, categorize, count_node_types};
pub use complexity::{Complexity, ComplexityFactor, ComplexityLevel, calculate_complexity};
pub use connectivity::{ConnectivityStats, calculate_connectivity, round2};
pub use cycles::{CycleReport, detect_cycles};
pub use depth::calculate_graph_depth;
pub use health::{Health, HealthIssue, IssueKind, Severity, analyze_health};
pub use structure::{StructureStats, analyze_structure};

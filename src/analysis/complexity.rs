use super::category::Category;
use super::structure::StructureStats;
use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// Coarse label for a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            ComplexityLevel::Simple
        } else if score < 60.0 {
            ComplexityLevel::Moderate
        } else if score < 100.0 {
            ComplexityLevel::Complex
        } else {
            ComplexityLevel::VeryComplex
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityLevel::Simple => "simple",
            ComplexityLevel::Moderate => "moderate",
            ComplexityLevel::Complex => "complex",
            ComplexityLevel::VeryComplex => "very-complex",
        };
        f.write_str(label)
    }
}

/// A single named contribution to the complexity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityFactor {
    pub name: String,
    pub impact: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Complexity {
    pub score: f64,
    pub level: ComplexityLevel,
    /// Triggered factors, always in rule order.
    pub factors: Vec<ComplexityFactor>,
}

impl Complexity {
    fn push(&mut self, name: &str, impact: f64, description: String) {
        self.score += impact;
        self.factors.push(ComplexityFactor {
            name: name.to_string(),
            impact,
            description,
        });
    }
}

/// Weighted, capped sum over size, wiring, cycles, depth, fan-out and type variety.
pub fn calculate_complexity(
    node_count: usize,
    edge_count: usize,
    structure: &StructureStats,
    node_types: &AHashMap<Category, usize>,
) -> Complexity {
    let mut complexity = Complexity {
        score: 0.0,
        level: ComplexityLevel::Simple,
        factors: Vec::new(),
    };

    if node_count > 0 {
        complexity.push(
            "Node count",
            (node_count as f64 * 2.0).min(30.0),
            format!("{} nodes in workflow", node_count),
        );
    }

    if edge_count > 0 {
        complexity.push(
            "Connections",
            (edge_count as f64 * 1.5).min(25.0),
            format!("{} connections between nodes", edge_count),
        );
    }

    if structure.has_cycles {
        complexity.push(
            "Circular dependencies",
            20.0,
            "Workflow contains cycles".to_string(),
        );
    }

    if structure.depth > 5 {
        complexity.push(
            "Execution depth",
            ((structure.depth - 5) as f64 * 2.0).min(15.0),
            format!("{} levels of sequential processing", structure.depth),
        );
    }

    if structure.branches > 3 {
        complexity.push(
            "Branching",
            ((structure.branches - 3) as f64 * 2.0).min(15.0),
            format!("{} parallel branches", structure.branches),
        );
    }

    let unique_categories = node_types.len();
    if unique_categories > 5 {
        complexity.push(
            "Node variety",
            ((unique_categories - 5) as f64 * 2.0).min(10.0),
            format!("{} different node categories", unique_categories),
        );
    }

    complexity.level = ComplexityLevel::from_score(complexity.score);
    complexity
}

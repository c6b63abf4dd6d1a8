use super::connectivity::ConnectivityStats;
use super::structure::StructureStats;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// The rule that raised a health issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Empty,
    Cycles,
    Disconnected,
    Orphans,
    NoInput,
    NoOutput,
    NoConnections,
    Depth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIssue {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Nodes the issue is about, when it concerns specific nodes.
    #[serde(rename = "nodeIds", skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    /// 0 to 100, higher is healthier.
    pub score: i32,
    pub issues: Vec<HealthIssue>,
}

impl Health {
    fn flag(
        &mut self,
        severity: Severity,
        kind: IssueKind,
        penalty: i32,
        message: String,
        suggestion: &str,
    ) -> &mut HealthIssue {
        self.score -= penalty;
        self.issues.push(HealthIssue {
            severity,
            kind,
            message,
            suggestion: Some(suggestion.to_string()),
            node_ids: Vec::new(),
        });
        let last = self.issues.len() - 1;
        &mut self.issues[last]
    }
}

/// Applies the health rule set. Rules are independent; every one that fires
/// adds an issue and subtracts its penalty. An empty workflow short-circuits to
/// a score of zero.
pub fn analyze_health(
    node_count: usize,
    edge_count: usize,
    structure: &StructureStats,
    connectivity: &ConnectivityStats,
) -> Health {
    if node_count == 0 {
        return Health {
            score: 0,
            issues: vec![HealthIssue {
                severity: Severity::Info,
                kind: IssueKind::Empty,
                message: "Workflow is empty".to_string(),
                suggestion: Some("Add nodes to start building your workflow".to_string()),
                node_ids: Vec::new(),
            }],
        };
    }

    let mut health = Health {
        score: 100,
        issues: Vec::new(),
    };

    if structure.has_cycles {
        let issue = health.flag(
            Severity::Error,
            IssueKind::Cycles,
            25,
            "Circular dependencies detected".to_string(),
            "Remove connections that loop back to earlier nodes",
        );
        if let Some(path) = &structure.cycle_path {
            issue.node_ids = path.clone();
        }
    }

    let disconnected = connectivity.disconnected_nodes;
    if disconnected > 0 {
        let penalty = (disconnected * 5).min(20) as i32;
        let issue = health.flag(
            Severity::Warning,
            IssueKind::Disconnected,
            penalty,
            format!("{} disconnected node(s)", disconnected),
            "Connect or remove nodes that are not part of the flow",
        );
        issue.node_ids = connectivity.disconnected_ids.clone();
    }

    let orphans = connectivity.orphans;
    if orphans > 0 {
        let penalty = (orphans * 3).min(15) as i32;
        let issue = health.flag(
            Severity::Warning,
            IssueKind::Orphans,
            penalty,
            format!("{} orphan node(s) with no inputs or outputs", orphans),
            "Orphan nodes never run as part of the workflow; wire them up or delete them",
        );
        issue.node_ids = connectivity.orphan_ids.clone();
    }

    if structure.input_nodes == 0 {
        health.flag(
            Severity::Warning,
            IssueKind::NoInput,
            15,
            "No input nodes found".to_string(),
            "Add input nodes so the workflow can receive data",
        );
    }

    if structure.output_nodes == 0 {
        health.flag(
            Severity::Warning,
            IssueKind::NoOutput,
            15,
            "No output nodes found".to_string(),
            "Add output nodes to surface the workflow's results",
        );
    }

    if edge_count == 0 && node_count > 1 {
        health.flag(
            Severity::Warning,
            IssueKind::NoConnections,
            20,
            "No connections between nodes".to_string(),
            "Connect nodes to define how data flows through the workflow",
        );
    }

    if structure.depth > 20 {
        health.flag(
            Severity::Info,
            IssueKind::Depth,
            10,
            format!("Very deep workflow ({} levels)", structure.depth),
            "Consider grouping sequential steps into sub-workflows",
        );
    }

    health.score = health.score.clamp(0, 100);
    health
}

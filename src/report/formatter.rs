use crate::analysis::HealthIssue;
use crate::stats::WorkflowStats;
use itertools::Itertools;
use std::fmt;

/// Renders workflow reports as human-readable text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Formats a full report under a titled header.
    pub fn format_report(title: &str, stats: &WorkflowStats) -> String {
        DisplayReport { title, stats }.to_string()
    }

    /// One-line summary, e.g. `12 nodes, 14 edges | complexity 43.0 (moderate) | health 85/100`.
    pub fn format_summary(stats: &WorkflowStats) -> String {
        format!(
            "{} nodes, {} edges | complexity {:.1} ({}) | health {}/100",
            stats.node_count,
            stats.edge_count,
            stats.complexity.score,
            stats.complexity.level,
            stats.health.score
        )
    }
}

/// A wrapper that displays a report section by section.
pub struct DisplayReport<'a> {
    pub title: &'a str,
    pub stats: &'a WorkflowStats,
}

impl<'a> fmt::Display for DisplayReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        writeln!(f, "======== WORKFLOW REPORT: {} ========", self.title)?;
        writeln!(f, "{}", ReportFormatter::format_summary(stats))?;
        if stats.dangling_edges > 0 {
            writeln!(
                f,
                "{} edge(s) reference unknown nodes",
                stats.dangling_edges
            )?;
        }

        writeln!(f, "\n--- NODE CATEGORIES ---")?;
        if stats.node_types.is_empty() {
            writeln!(f, "(none)")?;
        }
        for (category, count) in stats.node_types.iter().sorted_by_key(|(category, _)| **category) {
            writeln!(f, "{:<12}{}", category.as_str(), count)?;
        }

        writeln!(f, "\n--- COMPLEXITY ---")?;
        writeln!(
            f,
            "Score: {:.1} ({})",
            stats.complexity.score, stats.complexity.level
        )?;
        for (i, factor) in stats.complexity.factors.iter().enumerate() {
            let marker = tree_marker(i, stats.complexity.factors.len());
            writeln!(
                f,
                "{}{:<24}+{:<6.1}{}",
                marker, factor.name, factor.impact, factor.description
            )?;
        }

        let connectivity = &stats.connectivity;
        writeln!(f, "\n--- CONNECTIVITY ---")?;
        writeln!(f, "Density:              {:.2}%", connectivity.density)?;
        writeln!(
            f,
            "Avg connections/node: {:.2}",
            connectivity.average_connections_per_node
        )?;
        writeln!(f, "Disconnected nodes:   {}", connectivity.disconnected_nodes)?;
        writeln!(f, "Orphans:              {}", connectivity.orphans)?;

        let structure = &stats.structure;
        writeln!(f, "\n--- STRUCTURE ---")?;
        writeln!(f, "Input nodes:  {}", structure.input_nodes)?;
        writeln!(f, "Output nodes: {}", structure.output_nodes)?;
        writeln!(f, "Depth:        {}", structure.depth)?;
        writeln!(f, "Branches:     {}", structure.branches)?;
        match &structure.cycle_path {
            Some(path) => {
                let entry = path.first().map(String::as_str).unwrap_or_default();
                writeln!(f, "Cycle:        {} -> {}", path.iter().join(" -> "), entry)?
            }
            None if structure.has_cycles => writeln!(f, "Cycle:        yes")?,
            None => writeln!(f, "Cycle:        none")?,
        }

        writeln!(f, "\n--- HEALTH ---")?;
        writeln!(f, "Score: {}/100", stats.health.score)?;
        for (i, issue) in stats.health.issues.iter().enumerate() {
            fmt_issue(f, issue, i + 1 == stats.health.issues.len())?;
        }

        write!(f, "\n================ END OF REPORT ================")
    }
}

fn tree_marker(index: usize, len: usize) -> &'static str {
    if index + 1 == len { "└── " } else { "├── " }
}

fn fmt_issue(f: &mut fmt::Formatter<'_>, issue: &HealthIssue, is_last: bool) -> fmt::Result {
    let marker = if is_last { "└── " } else { "├── " };
    let child_prefix = if is_last { "    " } else { "│   " };
    writeln!(
        f,
        "{}[{}] {}",
        marker,
        issue.severity.to_string().to_uppercase(),
        issue.message
    )?;
    if !issue.node_ids.is_empty() {
        writeln!(f, "{}nodes: {}", child_prefix, issue.node_ids.iter().join(", "))?;
    }
    if let Some(suggestion) = &issue.suggestion {
        writeln!(f, "{}hint: {}", child_prefix, suggestion)?;
    }
    Ok(())
}

//! Unit tests for the individual graph analyses.
mod common;
use common::*;
use flowstat::analysis::*;
use flowstat::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn index(graph: &WorkflowGraph) -> GraphIndex<'_> {
    GraphIndex::build(graph, EdgePolicy::Strict)
}

// --- Categorizer ---

#[rstest]
#[case("nodetool.input.StringInput", Category::Input)]
#[case("nodetool.output.ImageOutput", Category::Output)]
#[case("openai.text.ChatCompletion", Category::Llm)]
#[case("huggingface.text_to_image.Flux", Category::Image)]
#[case("nodetool.video.FrameToVideo", Category::Video)]
#[case("elevenlabs.audio.TextToSpeech", Category::Audio)]
#[case("nodetool.text.Concat", Category::Text)]
#[case("nodetool.control.If", Category::Condition)]
#[case("nodetool.math.Add", Category::Math)]
#[case("nodetool.data.Filter", Category::Data)]
#[case("nodetool.agents.Agent", Category::Agent)]
#[case("lib.transform.Reshape", Category::Transform)]
#[case("NODETOOL.INPUT.INTEGERINPUT", Category::Input)]
#[case("", Category::Other)]
#[case("vendor.misc.Widget", Category::Other)]
fn test_categorize(#[case] node_type: &str, #[case] expected: Category) {
    assert_eq!(categorize(node_type), expected);
}

#[test]
fn test_categorize_first_matching_category_wins() {
    // Matches both "text" and "image"; image comes first in the table.
    assert_eq!(categorize("huggingface.text_to_image.Flux"), Category::Image);
    // Matches "input" and "image"; input comes first.
    assert_eq!(categorize("nodetool.input.ImageInput"), Category::Input);
}

#[test]
fn test_categorize_is_stable() {
    let first = categorize("nodetool.math.Multiply");
    let second = categorize("nodetool.math.Multiply");
    assert_eq!(first, second);
}

#[test]
fn test_count_node_types_ignores_order() {
    let forward = graph(
        &[("a", INPUT), ("b", LLM), ("c", LLM), ("d", OUTPUT), ("e", "")],
        &[],
    );
    let mut reversed = forward.clone();
    reversed.nodes.reverse();

    let counts = count_node_types(&forward.nodes);
    assert_eq!(counts, count_node_types(&reversed.nodes));
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[&Category::Llm], 2);
    assert_eq!(counts[&Category::Other], 1);
    assert!(!counts.contains_key(&Category::Image));
}

#[test]
fn test_custom_category_rule_takes_precedence() {
    let mut rules = CategoryRules::default();
    assert_eq!(rules.categorize("acme.Widget"), Category::Other);

    rules
        .with_patterns(Category::Agent, &[r"^acme\."])
        .expect("valid pattern");
    assert_eq!(rules.categorize("acme.Widget"), Category::Agent);
    // Earlier categories still win.
    assert_eq!(rules.categorize("acme.input.Widget"), Category::Input);
}

#[test]
fn test_builtin_rules_compile() {
    let rules = CategoryRules::builtin().expect("built-in patterns are valid");
    for node_type in ["nodetool.input.StringInput", "nodetool.math.Add", "vendor.misc.Widget"] {
        assert_eq!(rules.categorize(node_type), categorize(node_type));
    }
}

#[test]
fn test_empty_rules_classify_everything_as_other() {
    let rules = CategoryRules::empty();
    assert_eq!(rules.categorize("nodetool.input.StringInput"), Category::Other);
}

#[test]
fn test_invalid_category_rule() {
    let mut rules = CategoryRules::default();
    let err = rules
        .with_patterns(Category::Text, &["(unclosed"])
        .expect_err("pattern should be rejected");
    assert!(matches!(err, CategoryRuleError::InvalidPattern { .. }));
    assert!(err.to_string().contains("(unclosed"));
    assert!(err.to_string().contains("text"));

    let err = rules
        .with_patterns(Category::Other, &["anything"])
        .expect_err("fallback category takes no patterns");
    assert!(matches!(err, CategoryRuleError::FallbackCategory(Category::Other)));
}

// --- Cycle detector ---

#[test]
fn test_self_loop_is_a_cycle() {
    let g = plain(&["A"], &[("A", "A")]);
    let report = detect_cycles(&index(&g));
    assert!(report.has_cycles);
    assert_eq!(report.cycle_path, Some(vec!["A".to_string()]));
}

#[test]
fn test_two_node_cycle() {
    let g = plain(&["A", "B"], &[("A", "B"), ("B", "A")]);
    let report = detect_cycles(&index(&g));
    assert!(report.has_cycles);
    assert_eq!(
        report.cycle_path,
        Some(vec!["A".to_string(), "B".to_string()])
    );
}

#[test]
fn test_cycle_path_excludes_lead_in() {
    let g = plain(
        &["R", "A", "B", "C"],
        &[("R", "A"), ("A", "B"), ("B", "C"), ("C", "A")],
    );
    let report = detect_cycles(&index(&g));
    assert_eq!(
        report.cycle_path,
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
}

#[test]
fn test_diamond_is_acyclic() {
    let g = plain(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let report = detect_cycles(&index(&g));
    assert_eq!(report, CycleReport::default());
}

#[test]
fn test_cycle_through_dangling_edge_is_ignored() {
    let g = plain(&["A"], &[("A", "Ghost"), ("Ghost", "A")]);
    let lenient = GraphIndex::build(&g, EdgePolicy::Lenient);
    assert!(!detect_cycles(&lenient).has_cycles);
}

// --- Depth calculator ---

#[test]
fn test_depth_of_empty_graph() {
    let g = WorkflowGraph::default();
    assert_eq!(calculate_graph_depth(&index(&g)), 0);
}

#[test]
fn test_depth_of_chain() {
    let g = plain(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert_eq!(calculate_graph_depth(&index(&g)), 3);
}

#[test]
fn test_depth_uses_longest_path() {
    // BFS levels would give 2; the longest path A -> C -> B gives 3.
    let g = plain(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("C", "B")]);
    assert_eq!(calculate_graph_depth(&index(&g)), 3);
}

#[test]
fn test_depth_of_pure_cycle_is_zero() {
    let g = plain(&["A", "B"], &[("A", "B"), ("B", "A")]);
    assert_eq!(calculate_graph_depth(&index(&g)), 0);
}

#[test]
fn test_depth_ignores_nodes_behind_a_cycle() {
    let g = plain(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "B")]);
    assert_eq!(calculate_graph_depth(&index(&g)), 1);
}

#[test]
fn test_depth_of_isolated_nodes() {
    let g = plain(&["A", "B"], &[]);
    assert_eq!(calculate_graph_depth(&index(&g)), 1);
}

// --- Branch counter ---

#[test]
fn test_fan_out_branches() {
    let g = plain(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("A", "D")]);
    assert_eq!(count_branches(&index(&g)), 2);
}

#[test]
fn test_branches_sum_across_nodes() {
    let g = plain(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("B", "E"), ("B", "C")],
    );
    assert_eq!(count_branches(&index(&g)), 1 + 2);
}

#[test]
fn test_chain_has_no_branches() {
    let g = plain(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert_eq!(count_branches(&index(&g)), 0);
}

// --- Connectivity analyzer ---

#[test]
fn test_connectivity_with_disconnected_node() {
    let g = plain(&["A", "B", "C"], &[("A", "B")]);
    let idx = index(&g);
    let stats = calculate_connectivity(3, 1, &idx);
    assert_eq!(stats.density, 33.33);
    assert_eq!(stats.average_connections_per_node, 0.67);
    assert_eq!(stats.disconnected_nodes, 1);
    assert_eq!(stats.orphans, 1);
    assert_eq!(stats.disconnected_ids, vec!["C".to_string()]);
    assert_eq!(stats.orphan_ids, vec!["C".to_string()]);
}

#[test]
fn test_connectivity_of_chain() {
    let g = plain(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let stats = calculate_connectivity(3, 2, &index(&g));
    assert_eq!(stats.density, 66.67);
    assert_eq!(stats.average_connections_per_node, 1.33);
    assert_eq!(stats.disconnected_nodes, 0);
    assert_eq!(stats.orphans, 0);
}

#[test]
fn test_connectivity_degenerate_sizes() {
    let empty = WorkflowGraph::default();
    let stats = calculate_connectivity(0, 0, &index(&empty));
    assert_eq!(stats.density, 0.0);
    assert_eq!(stats.average_connections_per_node, 0.0);

    let single = plain(&["A"], &[("A", "A")]);
    let stats = calculate_connectivity(1, 1, &index(&single));
    assert_eq!(stats.density, 0.0);
    assert_eq!(stats.average_connections_per_node, 2.0);
    assert_eq!(stats.orphans, 0);
}

#[test]
fn test_round2() {
    assert_eq!(round2(1.0 / 3.0 * 100.0), 33.33);
    assert_eq!(round2(2.0 / 3.0), 0.67);
    assert_eq!(round2(5.0), 5.0);
}

// --- Complexity scorer ---

fn structure(has_cycles: bool, depth: usize, branches: usize) -> StructureStats {
    StructureStats {
        has_cycles,
        depth,
        branches,
        ..StructureStats::default()
    }
}

#[test]
fn test_complexity_of_nothing() {
    let complexity = calculate_complexity(0, 0, &StructureStats::default(), &Default::default());
    assert_eq!(complexity.score, 0.0);
    assert_eq!(complexity.level, ComplexityLevel::Simple);
    assert!(complexity.factors.is_empty());
}

#[test]
fn test_complexity_caps() {
    let complexity = calculate_complexity(100, 100, &structure(false, 50, 50), &Default::default());
    let impacts: Vec<f64> = complexity.factors.iter().map(|f| f.impact).collect();
    assert_eq!(impacts, vec![30.0, 25.0, 15.0, 15.0]);
    assert_eq!(complexity.score, 85.0);
    assert_eq!(complexity.level, ComplexityLevel::Complex);
}

#[test]
fn test_complexity_node_variety_cap() {
    let histogram: ahash::AHashMap<Category, usize> = Category::MATCHABLE
        .iter()
        .map(|category| (*category, 1))
        .collect();
    let complexity = calculate_complexity(0, 0, &StructureStats::default(), &histogram);
    let impacts: Vec<(&str, f64)> = complexity
        .factors
        .iter()
        .map(|f| (f.name.as_str(), f.impact))
        .collect();
    assert_eq!(impacts, vec![("Node variety", 10.0)]);
    assert_eq!(complexity.score, 10.0);
}

#[test]
fn test_complexity_fractional_edge_weight() {
    let complexity = calculate_complexity(3, 3, &structure(false, 3, 0), &Default::default());
    assert_eq!(complexity.score, 6.0 + 4.5);
}

#[test]
fn test_complexity_thresholds_are_strict() {
    let depth_only = calculate_complexity(0, 0, &structure(false, 5, 3), &Default::default());
    assert!(depth_only.factors.is_empty());

    let just_over = calculate_complexity(0, 0, &structure(false, 6, 4), &Default::default());
    let names: Vec<&str> = just_over.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Execution depth", "Branching"]);
    assert_eq!(just_over.score, 4.0);
}

#[rstest]
#[case(0.0, ComplexityLevel::Simple)]
#[case(29.5, ComplexityLevel::Simple)]
#[case(30.0, ComplexityLevel::Moderate)]
#[case(59.9, ComplexityLevel::Moderate)]
#[case(60.0, ComplexityLevel::Complex)]
#[case(99.5, ComplexityLevel::Complex)]
#[case(100.0, ComplexityLevel::VeryComplex)]
#[case(135.0, ComplexityLevel::VeryComplex)]
fn test_complexity_levels(#[case] score: f64, #[case] expected: ComplexityLevel) {
    assert_eq!(ComplexityLevel::from_score(score), expected);
}

// --- Health analyzer ---

#[test]
fn test_health_of_empty_workflow() {
    let health = analyze_health(0, 0, &StructureStats::default(), &ConnectivityStats::default());
    assert_eq!(health.score, 0);
    assert_eq!(health.issues.len(), 1);
    assert_eq!(health.issues[0].kind, IssueKind::Empty);
    assert_eq!(health.issues[0].severity, Severity::Info);
}

#[test]
fn test_health_rules_accumulate_in_order() {
    let connectivity = ConnectivityStats {
        disconnected_nodes: 2,
        orphans: 2,
        ..ConnectivityStats::default()
    };
    let health = analyze_health(2, 0, &StructureStats::default(), &connectivity);
    let kinds: Vec<IssueKind> = health.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::Disconnected,
            IssueKind::Orphans,
            IssueKind::NoInput,
            IssueKind::NoOutput,
            IssueKind::NoConnections,
        ]
    );
    assert_eq!(health.score, 100 - 10 - 6 - 15 - 15 - 20);
    assert!(health.issues[0].message.contains('2'));
    assert!(health.issues.iter().all(|i| i.suggestion.is_some()));
}

#[test]
fn test_health_score_clamps_at_zero() {
    let structure = StructureStats {
        has_cycles: true,
        depth: 25,
        ..StructureStats::default()
    };
    let connectivity = ConnectivityStats {
        disconnected_nodes: 10,
        orphans: 10,
        ..ConnectivityStats::default()
    };
    let health = analyze_health(5, 0, &structure, &connectivity);
    assert_eq!(health.score, 0);
    assert_eq!(health.issues.len(), 7);
    assert_eq!(health.issues[0].severity, Severity::Error);
    let last = health.issues.last().expect("depth issue");
    assert_eq!(last.kind, IssueKind::Depth);
    assert_eq!(last.severity, Severity::Info);
    assert!(last.message.contains("25"));
}

#[test]
fn test_single_node_is_not_flagged_for_missing_connections() {
    let structure = StructureStats {
        input_nodes: 1,
        depth: 1,
        ..StructureStats::default()
    };
    let connectivity = ConnectivityStats {
        disconnected_nodes: 1,
        orphans: 1,
        ..ConnectivityStats::default()
    };
    let health = analyze_health(1, 0, &structure, &connectivity);
    assert_eq!(health.score, 100 - 5 - 3 - 15);
    assert!(health.issues.iter().all(|i| i.kind != IssueKind::NoConnections));
}

// --- Structure analyzer ---

#[test]
fn test_structure_reads_input_and_output_counts() {
    let g = create_healthy_flow();
    let idx = index(&g);
    let node_types = count_node_types(&g.nodes);
    let structure = analyze_structure(&idx, &node_types);
    assert_eq!(
        structure,
        StructureStats {
            input_nodes: 1,
            output_nodes: 1,
            has_cycles: false,
            cycle_path: None,
            depth: 3,
            branches: 0,
        }
    );
}

// --- Edge policy ---

#[test]
fn test_strict_policy_drops_dangling_edges() {
    let g = plain(&["A", "B"], &[("A", "B"), ("A", "Ghost")]);
    let idx = GraphIndex::build(&g, EdgePolicy::Strict);
    assert_eq!(idx.edges().len(), 1);
    assert_eq!(idx.dangling_edges(), 1);
    assert_eq!(count_branches(&idx), 0);
}

#[test]
fn test_lenient_policy_keeps_dangling_edges() {
    let g = plain(&["A", "B"], &[("A", "B"), ("A", "Ghost")]);
    let idx = GraphIndex::build(&g, EdgePolicy::Lenient);
    assert_eq!(idx.edges().len(), 2);
    assert_eq!(idx.dangling_edges(), 1);
    assert_eq!(count_branches(&idx), 1);
    assert_eq!(calculate_graph_depth(&idx), 2);
}

#[test]
fn test_lenient_dangling_source_blocks_depth() {
    let g = plain(&["A", "B"], &[("A", "B"), ("Ghost", "B")]);
    let lenient = GraphIndex::build(&g, EdgePolicy::Lenient);
    let strict = GraphIndex::build(&g, EdgePolicy::Strict);
    assert_eq!(calculate_graph_depth(&lenient), 1);
    assert_eq!(calculate_graph_depth(&strict), 2);
}

#[test]
fn test_repeated_node_ids_collapse() {
    let g = plain(&["A", "B", "A"], &[("A", "B")]);
    let idx = index(&g);
    assert_eq!(idx.node_count(), 2);
    assert_eq!(idx.node_ids(), &["A", "B"]);
}

//! Plain-text rendering of explored graphs.
//!
//! States print as one color character per base region (see
//! [`color_char`](crate::state::color_char)).

use crate::graph::{GraphSummary, NodeId, NodeKind, StateGraph};
use crate::merge::RegionMergePuzzle;
use crate::state::RegionState;

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Normal => "normal",
        NodeKind::Solution => "solution",
        NodeKind::Failure => "failure",
    }
}

pub fn format_summary(summary: &GraphSummary) -> String {
    let fewest_moves = summary
        .min_solution_depth
        .map_or_else(|| "unsolvable".to_string(), |depth| depth.to_string());
    let per_depth: Vec<String> = summary.nodes_per_depth.iter().map(usize::to_string).collect();

    format!(
        "nodes: {}\n\
         solutions: {}\n\
         failures: {}\n\
         fewest moves: {fewest_moves}\n\
         max depth: {}\n\
         per depth: {}\n\
         search exhausted: {}",
        summary.node_count,
        summary.solution_count,
        summary.failure_count,
        summary.max_depth,
        per_depth.join(" "),
        if summary.exhausted { "yes" } else { "no" }
    )
}

/// Lists every node grouped by depth, with its successors.
pub fn format_layers(graph: &StateGraph<RegionState>) -> String {
    let mut lines = Vec::new();
    let mut current_depth = None;

    // nodes are stored in breadth-first order, so depths never decrease
    for (id, node) in graph.nodes().iter().enumerate() {
        if current_depth != Some(node.depth) {
            current_depth = Some(node.depth);
            lines.push(format!("depth {}", node.depth));
        }

        let successors: String = node
            .successors
            .iter()
            .map(|successor| format!(" #{successor}"))
            .collect();
        let arrow = if successors.is_empty() { "" } else { " ->" };
        lines.push(format!(
            "  #{id} {} [{}]{arrow}{successors}",
            node.state,
            kind_label(node.kind)
        ));
    }

    lines.join("\n")
}

/// Describes the moves along `path`, one per line.
pub fn format_path(
    puzzle: &mut RegionMergePuzzle,
    graph: &StateGraph<RegionState>,
    path: &[NodeId],
) -> String {
    let mut lines = Vec::with_capacity(path.len());
    let states: Vec<&RegionState> = path
        .iter()
        .filter_map(|&id| graph.node(id).map(|node| &node.state))
        .collect();

    if let Some(start) = states.first() {
        lines.push(format!("start: {start}"));
    }
    for (step, pair) in states.windows(2).enumerate() {
        let description = puzzle
            .find_move(pair[0], pair[1])
            .map_or_else(|| "unknown move".to_string(), |found| found.to_string());
        lines.push(format!("{}. {description} -> {}", step + 1, pair[1]));
    }

    lines.join("\n")
}

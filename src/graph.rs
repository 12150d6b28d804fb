//! The explored state graph.
//!
//! Nodes are stored in discovery order, which for a breadth-first search is
//! also non-decreasing depth order. A state maps to exactly one node; once
//! recorded, a node's depth and parent never change.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Index of a node in [`StateGraph::nodes`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Normal,
    Solution,
    /// Dead end for puzzles with failure states; region-merge puzzles never
    /// produce it.
    Failure,
}

/// A discovered state plus what the search learned about it.
#[derive(Debug, Clone)]
pub struct StateNode<S> {
    pub state: S,
    /// Minimum number of moves from the initial state.
    pub depth: usize,
    pub kind: NodeKind,
    /// The node this state was first reached from (`None` for the root).
    pub parent: Option<NodeId>,
    /// Distinct successors, filled in when the node is expanded. Solution and
    /// failure nodes are never expanded.
    pub successors: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct StateGraph<S> {
    nodes: Vec<StateNode<S>>,
    index: FxHashMap<S, NodeId>,
    exhausted: bool,
}

impl<S: Clone + Eq + Hash> StateGraph<S> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
            exhausted: false,
        }
    }

    /// Records `state` unless it is already present.
    ///
    /// Returns the node id and whether a new node was created.
    pub(crate) fn record(&mut self, state: S, depth: usize, parent: Option<NodeId>) -> (NodeId, bool) {
        if let Some(&id) = self.index.get(&state) {
            return (id, false);
        }

        let id = self.nodes.len();
        self.index.insert(state.clone(), id);
        self.nodes.push(StateNode {
            state,
            depth,
            kind: NodeKind::Normal,
            parent,
            successors: Vec::new(),
        });
        (id, true)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut StateNode<S> {
        &mut self.nodes[id]
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    pub fn node(&self, id: NodeId) -> Option<&StateNode<S>> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[StateNode<S>] {
        &self.nodes
    }

    pub fn id_of(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    pub fn get(&self, state: &S) -> Option<&StateNode<S>> {
        self.id_of(state).map(|id| &self.nodes[id])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if the search ran until no new states could be found.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn solutions(&self) -> impl Iterator<Item = (NodeId, &StateNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.kind == NodeKind::Solution)
    }

    /// Node ids from the root to `id`, following first-discovery parents.
    ///
    /// The result has `depth + 1` entries, i.e. it is a shortest path.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = VecDeque::new();
        let mut current = self.nodes.get(id).map(|_| id);
        while let Some(node_id) = current {
            path.push_front(node_id);
            current = self.nodes[node_id].parent;
        }
        path.into()
    }

    /// Path to the shallowest solution, if any was found.
    pub fn shortest_solution(&self) -> Option<Vec<NodeId>> {
        self.solutions()
            .min_by_key(|(_, node)| node.depth)
            .map(|(id, _)| self.path_to(id))
    }

    pub fn summary(&self) -> GraphSummary {
        let max_depth = self.nodes.iter().map(|node| node.depth).max();
        let mut nodes_per_depth = vec![0; max_depth.map_or(0, |depth| depth + 1)];
        let mut solution_count = 0;
        let mut failure_count = 0;
        let mut min_solution_depth: Option<usize> = None;

        for node in &self.nodes {
            nodes_per_depth[node.depth] += 1;
            match node.kind {
                NodeKind::Solution => {
                    solution_count += 1;
                    min_solution_depth =
                        Some(min_solution_depth.map_or(node.depth, |depth| depth.min(node.depth)));
                }
                NodeKind::Failure => failure_count += 1,
                NodeKind::Normal => {}
            }
        }

        GraphSummary {
            node_count: self.nodes.len(),
            solution_count,
            failure_count,
            min_solution_depth,
            max_depth: max_depth.unwrap_or(0),
            nodes_per_depth,
            exhausted: self.exhausted,
        }
    }
}

/// Headline numbers for an explored graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub solution_count: usize,
    pub failure_count: usize,
    /// Fewest moves needed to solve the puzzle.
    pub min_solution_depth: Option<usize>,
    pub max_depth: usize,
    /// Number of distinct states first reached at each depth.
    pub nodes_per_depth: Vec<usize>,
    pub exhausted: bool,
}

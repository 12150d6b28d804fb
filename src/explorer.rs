//! Breadth-first construction of a puzzle's state graph.
//!
//! The search is resumable: [`Explorer::step`] processes exactly one frontier
//! node, so callers can interleave exploration with other work, stop after a
//! time slice, or abandon the search. Stopping is only possible between
//! steps, so every recorded node is always complete.
//!
//! Because the frontier is FIFO and a state is recorded only the first time
//! it is seen, each state's recorded depth is its shortest distance from the
//! initial state.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::graph::{NodeId, NodeKind, StateGraph};
use crate::puzzle::Puzzle;

/// Optional limits on an exploration run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExploreConfig {
    /// Stop once the graph holds at least this many nodes.
    pub max_nodes: Option<usize>,
    /// Stop once this much time has passed.
    pub timeout: Option<Duration>,
}

/// One processed frontier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub id: NodeId,
    pub depth: usize,
    pub kind: NodeKind,
}

pub struct Explorer<'p, P: Puzzle> {
    puzzle: &'p mut P,
    graph: StateGraph<P::State>,
    frontier: VecDeque<NodeId>,
}

impl<'p, P: Puzzle> Explorer<'p, P> {
    /// Records the puzzle's initial state at depth 0.
    pub fn new(puzzle: &'p mut P) -> Self {
        let mut graph = StateGraph::new();
        let mut frontier = VecDeque::new();

        let (root, _) = graph.record(puzzle.initial_state(), 0, None);
        frontier.push_back(root);

        Self {
            puzzle,
            graph,
            frontier,
        }
    }

    /// Dequeues and processes one node. Returns `None` once the frontier is empty.
    ///
    /// Solution and failure nodes are classified and left unexpanded; any
    /// other node has its successors recorded one layer deeper.
    pub fn step(&mut self) -> Option<Visit> {
        let id = self.frontier.pop_front()?;
        let node = &self.graph.nodes()[id];
        let depth = node.depth;

        let kind = if self.puzzle.is_solution(&node.state) {
            trace!("solution found: {depth} moves to reach node {id}");
            NodeKind::Solution
        } else if self.puzzle.is_failure(&node.state) {
            NodeKind::Failure
        } else {
            let children = self.puzzle.reachable_states(&node.state);
            let mut successors = Vec::with_capacity(children.len());

            for child in children {
                let (child_id, inserted) = self.graph.record(child, depth + 1, Some(id));
                if inserted {
                    self.frontier.push_back(child_id);
                }
                if !successors.contains(&child_id) {
                    successors.push(child_id);
                }
            }

            self.graph.node_mut(id).successors = successors;
            NodeKind::Normal
        };
        self.graph.node_mut(id).kind = kind;

        if self.frontier.is_empty() {
            self.graph.mark_exhausted();
            info!(
                "state graph construction complete: {} nodes",
                self.graph.len()
            );
        }

        Some(Visit { id, depth, kind })
    }

    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Nodes recorded but not yet processed.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The graph explored so far.
    pub fn graph(&self) -> &StateGraph<P::State> {
        &self.graph
    }

    /// Runs until the frontier is empty or `quantum` elapses.
    ///
    /// Always processes at least one node so that repeated calls make
    /// progress. Returns true once exploration is finished.
    pub fn run_for(&mut self, quantum: Duration) -> bool {
        let start = Instant::now();
        while self.step().is_some() {
            if start.elapsed() >= quantum {
                trace!("quantum elapsed with {} nodes queued", self.frontier.len());
                break;
            }
        }
        self.is_finished()
    }

    /// Runs until exhausted or a limit in `config` is hit.
    ///
    /// A timeout too large to represent as a deadline means no deadline.
    pub fn run(mut self, config: &ExploreConfig) -> StateGraph<P::State> {
        let deadline = config
            .timeout
            .and_then(|timeout| Instant::now().checked_add(timeout));

        while !self.is_finished() {
            if config.max_nodes.is_some_and(|max| self.graph.len() >= max) {
                debug!("exploration stopped at node limit: {} nodes", self.graph.len());
                break;
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                debug!("exploration stopped at timeout: {} nodes", self.graph.len());
                break;
            }
            self.step();
        }

        self.graph
    }

    /// Runs to completion.
    pub fn finish(self) -> StateGraph<P::State> {
        self.run(&ExploreConfig::default())
    }

    /// Stops exploring and returns the graph as it stands.
    pub fn into_graph(self) -> StateGraph<P::State> {
        self.graph
    }
}

impl<P: Puzzle> Iterator for Explorer<'_, P> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        self.step()
    }
}

/// Explores every state reachable from the puzzle's initial state.
pub fn build_state_graph<P: Puzzle>(puzzle: &mut P) -> StateGraph<P::State> {
    Explorer::new(puzzle).finish()
}

//! The capability contract every explorable puzzle implements.

use std::hash::Hash;

/// A puzzle the state-graph explorer can search.
///
/// The explorer is generic over the implementor and only ever hands back
/// states the puzzle itself produced, so no state needs to be downcast.
/// `State` equality and hashing define state identity in the graph.
pub trait Puzzle {
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Every state one move away from `state`.
    ///
    /// Duplicates are allowed; the explorer deduplicates. Takes `&mut self`
    /// so puzzles can memoize while generating moves.
    fn reachable_states(&mut self, state: &Self::State) -> Vec<Self::State>;

    /// Whether `state` solves the puzzle. Solution states are not expanded.
    fn is_solution(&self, state: &Self::State) -> bool;

    /// Whether `state` is a dead end (e.g. out of moves). Failure states are
    /// not expanded either.
    fn is_failure(&self, _state: &Self::State) -> bool {
        false
    }
}

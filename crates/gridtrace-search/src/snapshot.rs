//! The snapshot/trace data model.
//!
//! Every expansion event in a search produces one [`Snapshot`]: an
//! immutable record of the visited set, the frontier, the node being
//! expanded, and (depending on the algorithm) the recursion depth or the
//! cost map. A [`Trace`] is the full ordered sequence for one run, which a
//! presentation layer can replay step by step at its own pace.
//!
//! Snapshots own deep copies of the live sets and maps — later mutation
//! of the search state never alters a snapshot already in the trace.

use std::collections::{HashMap, HashSet};

use gridtrace_core::{Coord, Key};

/// One recorded instant of algorithm state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Keys that have been fully expanded.
    pub visited: HashSet<Key>,
    /// Keys discovered but not yet expanded. For DFS this holds the
    /// active recursion stack instead of a true discovery frontier.
    pub frontier: HashSet<Key>,
    /// The node being expanded, if this snapshot records an expansion.
    pub current: Option<Coord>,
    /// The reconstructed start-to-goal path; present only on the terminal
    /// snapshot of a successful run. Its absence on the final snapshot of
    /// a trace is the unreachable-goal signal.
    pub path: Option<Vec<Coord>>,
    /// Recursion depth (DFS only).
    pub depth: Option<i32>,
    /// Best known cost-from-start per key (Dijkstra and A* only; A*
    /// exposes g-scores here, not f).
    pub cost_map: Option<HashMap<Key, i32>>,
}

impl Snapshot {
    /// Capture the live visited/frontier sets around the expansion of
    /// `current`. The sets are cloned at call time.
    pub(crate) fn capture(
        visited: &HashSet<Key>,
        frontier: &HashSet<Key>,
        current: Coord,
    ) -> Self {
        Self {
            visited: visited.clone(),
            frontier: frontier.clone(),
            current: Some(current),
            path: None,
            depth: None,
            cost_map: None,
        }
    }

    pub(crate) fn with_path(mut self, path: Vec<Coord>) -> Self {
        self.path = Some(path);
        self
    }

    pub(crate) fn with_depth(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub(crate) fn with_cost_map(mut self, cost_map: &HashMap<Key, i32>) -> Self {
        self.cost_map = Some(cost_map.clone());
        self
    }
}

/// The ordered sequence of snapshots produced by one search run.
pub type Trace = Vec<Snapshot>;

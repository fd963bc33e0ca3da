//! Replay-traced pathfinding algorithms for 2D grids.
//!
//! This crate runs four search algorithms over a bounded, obstacle-free,
//! 4-connected grid and records a complete [`Trace`] of [`Snapshot`]s, one
//! per expansion event, so a presentation layer can replay the search step
//! by step at its own pace:
//!
//! - **BFS** ([`run_bfs`]) — level-order, shortest path
//! - **DFS** ([`run_dfs`]) — entry/backtrack walk, no optimality
//! - **Dijkstra** ([`run_dijkstra`]) — cost-ordered, shortest path
//! - **A\*** ([`run_astar`]) — cost + Manhattan heuristic, shortest path
//!
//! All four share the same contract: `(dims, start, goal)` in, `Trace`
//! out. Invalid dimensions or out-of-bounds endpoints fail with a
//! [`SearchError`] before any traversal; an unreachable goal is *not* an
//! error — the trace simply ends without a path-bearing snapshot, and the
//! presence of [`Snapshot::path`] on the final element is the caller's
//! termination signal.
//!
//! | Snapshot field | BFS | DFS | Dijkstra | A* |
//! |---|---|---|---|---|
//! | `visited` / `frontier` / `current` | yes | yes | yes | yes |
//! | `depth` | — | yes | — | — |
//! | `cost_map` | — | — | distances | g-scores |
//! | `path` | terminal snapshot only, all algorithms | | | |

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod heap;
mod path;
mod snapshot;

pub use astar::run_astar;
pub use bfs::run_bfs;
pub use dfs::run_dfs;
pub use dijkstra::run_dijkstra;
pub use distance::manhattan;
pub use error::SearchError;
pub use heap::MinHeap;
pub use snapshot::{Snapshot, Trace};

#[cfg(test)]
pub(crate) mod testutil {
    use gridtrace_core::Coord;

    use crate::Trace;

    /// The path on the trace's final snapshot, if the goal was reached.
    pub(crate) fn final_path(trace: &Trace) -> Option<&[Coord]> {
        trace.last().and_then(|s| s.path.as_deref())
    }

    /// Assert a path runs start to goal in unit orthogonal steps.
    pub(crate) fn assert_path_shape(path: &[Coord], start: Coord, goal: Coord) {
        assert_eq!(path.first(), Some(&start), "path must begin at start");
        assert_eq!(path.last(), Some(&goal), "path must end at goal");
        for pair in path.windows(2) {
            let dr = (pair[1].row - pair[0].row).abs();
            let dc = (pair[1].col - pair[0].col).abs();
            assert_eq!(dr + dc, 1, "non-orthogonal step {} -> {}", pair[0], pair[1]);
        }
    }

    /// Assert the trace-wide invariants of the frontier-based algorithms:
    /// visited only grows, and visited and frontier never overlap.
    pub(crate) fn assert_monotone_trace(trace: &Trace) {
        let mut prev_visited = None;
        for (i, snap) in trace.iter().enumerate() {
            assert!(
                snap.visited.is_disjoint(&snap.frontier),
                "snapshot {i}: visited and frontier overlap"
            );
            if let Some(prev) = prev_visited {
                assert!(
                    snap.visited.is_superset(prev),
                    "snapshot {i}: a visited key disappeared"
                );
            }
            prev_visited = Some(&snap.visited);
        }
    }
}

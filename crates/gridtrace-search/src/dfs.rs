//! Depth-first search driver.
//!
//! The walk reproduces the shape of a recursive DFS with an explicit stack
//! of (coordinate, depth, neighbor-cursor) frames, so arbitrarily large
//! grids cannot overflow the call stack. Entering a node emits an entry
//! snapshot at its depth; exhausting a node's neighbors pops it and emits
//! a backtrack snapshot at one less than its entry depth.
//!
//! DFS tracks no global priority: its path follows pure neighbor order
//! (up, down, left, right) and may be much longer than the shortest one
//! found by BFS, Dijkstra or A*.

use std::collections::{HashMap, HashSet};

use gridtrace_core::{Coord, GridDims, Key};

use crate::error::{SearchError, validate};
use crate::path::reconstruct;
use crate::snapshot::{Snapshot, Trace};

/// One pending recursion level.
struct Frame {
    coord: Coord,
    depth: i32,
    /// Index of the next neighbor to try in the fixed expansion order.
    cursor: usize,
}

/// Run a depth-first search from `start` to `goal` and return the full
/// entry/backtrack trace.
///
/// The frontier field of each snapshot holds the active recursion stack
/// rather than a discovery frontier. Once the goal is entered, the
/// terminal path snapshot ends the trace; the abandoned stack emits no
/// further backtrack snapshots.
pub fn run_dfs(dims: GridDims, start: Coord, goal: Coord) -> Result<Trace, SearchError> {
    validate(dims, start, goal)?;

    let mut trace = Trace::new();
    let mut visited: HashSet<Key> = HashSet::new();
    let mut active: HashSet<Key> = HashSet::new();
    let mut parents: HashMap<Key, Key> = HashMap::new();
    let mut stack: Vec<Frame> = Vec::new();

    visited.insert(start.key());
    active.insert(start.key());
    stack.push(Frame {
        coord: start,
        depth: 0,
        cursor: 0,
    });
    trace.push(Snapshot::capture(&visited, &active, start).with_depth(0));

    if start == goal {
        let path = reconstruct(&parents, start, goal);
        trace.push(
            Snapshot::capture(&visited, &active, start)
                .with_depth(0)
                .with_path(path),
        );
        return Ok(trace);
    }

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };

        if frame.cursor >= 4 {
            // Neighbors exhausted: backtrack.
            let coord = frame.coord;
            let depth = frame.depth;
            stack.pop();
            active.remove(&coord.key());
            trace.push(Snapshot::capture(&visited, &active, coord).with_depth(depth - 1));
            continue;
        }

        let coord = frame.coord;
        let depth = frame.depth;
        let neighbor = coord.neighbors_4()[frame.cursor];
        frame.cursor += 1;

        if !dims.contains(neighbor) || visited.contains(&neighbor.key()) {
            continue;
        }

        // Enter the neighbor.
        let ndepth = depth + 1;
        parents.insert(neighbor.key(), coord.key());
        visited.insert(neighbor.key());
        active.insert(neighbor.key());
        stack.push(Frame {
            coord: neighbor,
            depth: ndepth,
            cursor: 0,
        });
        trace.push(Snapshot::capture(&visited, &active, neighbor).with_depth(ndepth));

        if neighbor == goal {
            let path = reconstruct(&parents, start, goal);
            trace.push(
                Snapshot::capture(&visited, &active, neighbor)
                    .with_depth(ndepth)
                    .with_path(path),
            );
            log::debug!("dfs: reached {goal} at depth {ndepth}");
            return Ok(trace);
        }
    }

    log::debug!("dfs: stack exhausted, {goal} unreachable from {start}");
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_path_shape, final_path};

    #[test]
    fn finds_a_valid_path() {
        let dims = GridDims::new(3, 3);
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let trace = run_dfs(dims, start, goal).unwrap();
        let path = final_path(&trace).expect("goal must be reachable");
        assert_path_shape(path, start, goal);
    }

    #[test]
    fn start_equals_goal() {
        let trace = run_dfs(GridDims::new(3, 3), Coord::new(2, 0), Coord::new(2, 0)).unwrap();
        assert_eq!(final_path(&trace).unwrap(), &[Coord::new(2, 0)]);
    }

    #[test]
    fn one_by_one_grid() {
        let trace = run_dfs(GridDims::new(1, 1), Coord::new(0, 0), Coord::new(0, 0)).unwrap();
        assert_eq!(final_path(&trace).unwrap(), &[Coord::new(0, 0)]);
    }

    #[test]
    fn every_snapshot_carries_a_depth() {
        let trace = run_dfs(GridDims::new(3, 4), Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        for snap in &trace {
            assert!(snap.depth.is_some());
            assert!(snap.cost_map.is_none());
        }
    }

    #[test]
    fn backtrack_depth_is_entry_depth_minus_one() {
        // On a 3x1 column starting in the middle, the up-first walk enters
        // (0, 0), dead-ends, and must backtrack before heading down.
        let trace = run_dfs(GridDims::new(3, 1), Coord::new(1, 0), Coord::new(2, 0)).unwrap();

        let mut entry_depth: HashMap<Coord, i32> = HashMap::new();
        let mut backtracks = 0;
        for snap in &trace {
            let coord = snap.current.unwrap();
            let depth = snap.depth.unwrap();
            if snap.path.is_some() {
                continue;
            }
            match entry_depth.get(&coord) {
                // First sighting of the node is its entry snapshot.
                None => {
                    entry_depth.insert(coord, depth);
                }
                // Second sighting is its backtrack snapshot.
                Some(&entered) => {
                    assert_eq!(depth, entered - 1, "backtrack of {coord}");
                    backtracks += 1;
                }
            }
        }
        assert_eq!(backtracks, 1); // only (0, 0) dead-ends
    }

    #[test]
    fn neighbor_order_shapes_the_walk() {
        // From (1, 0) on a 2x2 grid, up (0, 0) comes before down, so the
        // second entry snapshot must be (0, 0).
        let trace = run_dfs(GridDims::new(2, 2), Coord::new(1, 0), Coord::new(1, 1)).unwrap();
        assert_eq!(trace[0].current, Some(Coord::new(1, 0)));
        assert_eq!(trace[1].current, Some(Coord::new(0, 0)));
    }

    #[test]
    fn trace_ends_at_goal_snapshot() {
        // No backtrack snapshots may follow the terminal path snapshot.
        let trace = run_dfs(GridDims::new(4, 4), Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        let path_positions: Vec<usize> = trace
            .iter()
            .enumerate()
            .filter(|(_, s)| s.path.is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(path_positions, vec![trace.len() - 1]);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(run_dfs(GridDims::new(-1, 3), Coord::new(0, 0), Coord::new(0, 0)).is_err());
        assert!(run_dfs(GridDims::new(3, 3), Coord::new(0, 0), Coord::new(3, 3)).is_err());
    }
}

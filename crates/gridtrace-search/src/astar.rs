//! A* search driver.

use std::collections::{HashMap, HashSet};

use gridtrace_core::{Coord, GridDims, Key};

use crate::distance::manhattan;
use crate::error::{SearchError, validate};
use crate::heap::MinHeap;
use crate::path::reconstruct;
use crate::snapshot::{Snapshot, Trace};

/// Run an A* search from `start` to `goal` and return the full expansion
/// trace, each snapshot carrying a copy of the g-score map.
///
/// Structurally identical to [`run_dijkstra`](crate::run_dijkstra) except
/// that the open list is ordered by `f = g + h` with `h` the Manhattan
/// distance to the goal. The heuristic is admissible and consistent on a
/// 4-connected unit-cost grid, so the returned path is still shortest
/// while typically fewer nodes are expanded.
pub fn run_astar(dims: GridDims, start: Coord, goal: Coord) -> Result<Trace, SearchError> {
    validate(dims, start, goal)?;

    let mut trace = Trace::new();
    let mut visited: HashSet<Key> = HashSet::new();
    let mut frontier: HashSet<Key> = HashSet::new();
    let mut parents: HashMap<Key, Key> = HashMap::new();
    let mut gscore: HashMap<Key, i32> = HashMap::new();
    let mut open: MinHeap<Key> = MinHeap::new();

    gscore.insert(start.key(), 0);
    frontier.insert(start.key());
    open.enqueue(start.key(), manhattan(start, goal));

    while let Some(current_key) = open.dequeue() {
        if visited.contains(&current_key) {
            // Stale lazy-reinsertion entry.
            continue;
        }
        frontier.remove(&current_key);
        let current = current_key.decode();
        trace.push(Snapshot::capture(&visited, &frontier, current).with_cost_map(&gscore));
        visited.insert(current_key);

        if current == goal {
            let path = reconstruct(&parents, start, goal);
            trace.push(
                Snapshot::capture(&visited, &frontier, current)
                    .with_cost_map(&gscore)
                    .with_path(path),
            );
            log::debug!("astar: reached {goal} at cost {}", gscore[&current_key]);
            return Ok(trace);
        }

        let current_g = gscore[&current_key];
        for neighbor in current.neighbors_4() {
            if !dims.contains(neighbor) {
                continue;
            }
            let nkey = neighbor.key();
            let tentative = current_g + 1;
            let known = gscore.get(&nkey).copied().unwrap_or(i32::MAX);
            if tentative < known {
                gscore.insert(nkey, tentative);
                parents.insert(nkey, current_key);
                frontier.insert(nkey);
                open.enqueue(nkey, tentative + manhattan(neighbor, goal));
            }
        }
    }

    log::debug!("astar: open list exhausted, {goal} unreachable from {start}");
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::run_bfs;
    use crate::testutil::{assert_monotone_trace, assert_path_shape, final_path};

    #[test]
    fn three_by_three_shortest_path() {
        let dims = GridDims::new(3, 3);
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let trace = run_astar(dims, start, goal).unwrap();
        let path = final_path(&trace).expect("goal must be reachable");
        assert_eq!(path.len(), 5);
        assert_path_shape(path, start, goal);
        assert!(trace.last().unwrap().visited.len() <= 9);
    }

    #[test]
    fn path_length_matches_bfs() {
        let dims = GridDims::new(8, 6);
        let start = Coord::new(7, 5);
        let goal = Coord::new(0, 0);
        let bfs = run_bfs(dims, start, goal).unwrap();
        let astar = run_astar(dims, start, goal).unwrap();
        assert_eq!(
            final_path(&bfs).unwrap().len(),
            final_path(&astar).unwrap().len()
        );
    }

    #[test]
    fn visits_no_more_than_bfs() {
        // Admissible heuristic: A* expands a subset of what BFS expands.
        for (start, goal) in [
            (Coord::new(0, 0), Coord::new(5, 7)),
            (Coord::new(3, 3), Coord::new(0, 7)),
            (Coord::new(5, 0), Coord::new(0, 0)),
        ] {
            let dims = GridDims::new(6, 8);
            let bfs = run_bfs(dims, start, goal).unwrap();
            let astar = run_astar(dims, start, goal).unwrap();
            assert!(
                astar.last().unwrap().visited.len() <= bfs.last().unwrap().visited.len(),
                "{start} -> {goal}"
            );
        }
    }

    #[test]
    fn start_equals_goal() {
        let trace = run_astar(GridDims::new(5, 5), Coord::new(2, 2), Coord::new(2, 2)).unwrap();
        assert_eq!(final_path(&trace).unwrap(), &[Coord::new(2, 2)]);
    }

    #[test]
    fn cost_map_holds_g_scores_not_f() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(3, 3);
        let trace = run_astar(GridDims::new(4, 4), start, goal).unwrap();
        let last = trace.last().unwrap();
        let costs = last.cost_map.as_ref().unwrap();
        // g at the goal is the true path cost, with no heuristic added.
        assert_eq!(costs[&goal.key()], 6);
        assert_eq!(costs[&start.key()], 0);
    }

    #[test]
    fn visited_monotone_and_disjoint_from_frontier() {
        let trace = run_astar(GridDims::new(6, 6), Coord::new(5, 5), Coord::new(0, 2)).unwrap();
        assert_monotone_trace(&trace);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(run_astar(GridDims::new(0, 0), Coord::new(0, 0), Coord::new(0, 0)).is_err());
        assert!(run_astar(GridDims::new(2, 2), Coord::new(0, 0), Coord::new(2, 0)).is_err());
    }
}

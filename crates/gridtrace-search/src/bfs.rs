//! Breadth-first search driver.

use std::collections::{HashMap, HashSet, VecDeque};

use gridtrace_core::{Coord, GridDims, Key};

use crate::error::{SearchError, validate};
use crate::path::reconstruct;
use crate::snapshot::{Snapshot, Trace};

/// Run a breadth-first search from `start` to `goal` and return the full
/// expansion trace.
///
/// Each step costs 1, so the expansion proceeds level by level and any
/// returned path is shortest. A key enters the frontier (and the queue)
/// exactly once, at discovery time; the snapshot emitted when it is later
/// dequeued records it in the `current` field, no longer in the frontier
/// and not yet in the visited set.
pub fn run_bfs(dims: GridDims, start: Coord, goal: Coord) -> Result<Trace, SearchError> {
    validate(dims, start, goal)?;

    let mut trace = Trace::new();
    let mut visited: HashSet<Key> = HashSet::new();
    let mut frontier: HashSet<Key> = HashSet::new();
    let mut parents: HashMap<Key, Key> = HashMap::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();

    frontier.insert(start.key());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let current_key = current.key();
        frontier.remove(&current_key);
        trace.push(Snapshot::capture(&visited, &frontier, current));
        visited.insert(current_key);

        if current == goal {
            let path = reconstruct(&parents, start, goal);
            trace.push(Snapshot::capture(&visited, &frontier, current).with_path(path));
            log::debug!("bfs: reached {goal} after {} expansions", visited.len());
            return Ok(trace);
        }

        for neighbor in current.neighbors_4() {
            if !dims.contains(neighbor) {
                continue;
            }
            let nkey = neighbor.key();
            if visited.contains(&nkey) || frontier.contains(&nkey) {
                continue;
            }
            parents.insert(nkey, current_key);
            frontier.insert(nkey);
            queue.push_back(neighbor);
        }
    }

    log::debug!("bfs: frontier exhausted, {goal} unreachable from {start}");
    Ok(trace)
}

//! Dijkstra search driver.

use std::collections::{HashMap, HashSet};

use gridtrace_core::{Coord, GridDims, Key};

use crate::error::{SearchError, validate};
use crate::heap::MinHeap;
use crate::path::reconstruct;
use crate::snapshot::{Snapshot, Trace};

/// Run Dijkstra's algorithm from `start` to `goal` and return the full
/// expansion trace, each snapshot carrying a copy of the cost map.
///
/// The open list is a [`MinHeap`] without decrease-key: relaxing a key
/// that is already queued simply enqueues a second copy at the cheaper
/// distance, and the stale copy is skipped when it later surfaces already
/// visited. On this unit-cost grid the expansion order matches BFS's
/// level order and any returned path is shortest.
pub fn run_dijkstra(dims: GridDims, start: Coord, goal: Coord) -> Result<Trace, SearchError> {
    validate(dims, start, goal)?;

    let mut trace = Trace::new();
    let mut visited: HashSet<Key> = HashSet::new();
    let mut frontier: HashSet<Key> = HashSet::new();
    let mut parents: HashMap<Key, Key> = HashMap::new();
    let mut dist: HashMap<Key, i32> = HashMap::new();
    let mut open: MinHeap<Key> = MinHeap::new();

    dist.insert(start.key(), 0);
    frontier.insert(start.key());
    open.enqueue(start.key(), 0);

    while let Some(current_key) = open.dequeue() {
        if visited.contains(&current_key) {
            // Stale lazy-reinsertion entry.
            continue;
        }
        frontier.remove(&current_key);
        let current = current_key.decode();
        trace.push(Snapshot::capture(&visited, &frontier, current).with_cost_map(&dist));
        visited.insert(current_key);

        if current == goal {
            let path = reconstruct(&parents, start, goal);
            trace.push(
                Snapshot::capture(&visited, &frontier, current)
                    .with_cost_map(&dist)
                    .with_path(path),
            );
            log::debug!("dijkstra: reached {goal} at distance {}", dist[&current_key]);
            return Ok(trace);
        }

        let current_dist = dist[&current_key];
        for neighbor in current.neighbors_4() {
            if !dims.contains(neighbor) {
                continue;
            }
            let nkey = neighbor.key();
            let tentative = current_dist + 1;
            let known = dist.get(&nkey).copied().unwrap_or(i32::MAX);
            if tentative < known {
                dist.insert(nkey, tentative);
                parents.insert(nkey, current_key);
                frontier.insert(nkey);
                open.enqueue(nkey, tentative);
            }
        }
    }

    log::debug!("dijkstra: open list exhausted, {goal} unreachable from {start}");
    Ok(trace)
}

//! Path reconstruction from parent links.

use std::collections::HashMap;

use gridtrace_core::{Coord, Key};

/// Walk the parent map backward from `goal` to `start` and return the
/// path in start-to-goal order. When `start == goal` the path is the
/// single coordinate.
///
/// Every key the drivers insert into the parent map chains back to the
/// start through finitely many links, so the walk always terminates.
pub(crate) fn reconstruct(parents: &HashMap<Key, Key>, start: Coord, goal: Coord) -> Vec<Coord> {
    let start_key = start.key();
    let mut path = vec![goal];
    let mut current = goal.key();
    while current != start_key {
        let Some(&parent) = parents.get(&current) else {
            break;
        };
        path.push(parent.decode());
        current = parent;
    }
    path.reverse();
    path
}

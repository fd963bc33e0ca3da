//! Replays a search trace as ASCII frames on stdout.
//!
//! Usage: `trace-replay [bfs|dfs|dijkstra|astar]`
//!
//! Runs the chosen algorithm on a small grid and prints one frame per
//! snapshot, showing how a presentation layer consumes the precomputed
//! trace at its own pace: `@` current, `o` frontier, `*` visited,
//! `#` final path.

use std::error::Error;

use gridtrace_core::{Coord, GridDims};
use gridtrace_search::{Snapshot, Trace, run_astar, run_bfs, run_dfs, run_dijkstra};

const DIMS: GridDims = GridDims::new(6, 10);
const START: Coord = Coord::new(5, 0);
const GOAL: Coord = Coord::new(0, 9);

fn render(dims: GridDims, snap: &Snapshot) -> String {
    let path: Vec<Coord> = snap.path.clone().unwrap_or_default();
    let mut out = String::new();
    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let c = Coord::new(row, col);
            let ch = if snap.current == Some(c) {
                '@'
            } else if path.contains(&c) {
                '#'
            } else if snap.frontier.contains(&c.key()) {
                'o'
            } else if snap.visited.contains(&c.key()) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn replay(name: &str, trace: &Trace) {
    for (i, snap) in trace.iter().enumerate() {
        println!("-- {name} step {i} --");
        if let Some(depth) = snap.depth {
            println!("depth {depth}");
        }
        print!("{}", render(DIMS, snap));
    }
    match trace.last().and_then(|s| s.path.as_ref()) {
        Some(path) => println!("{name}: path of {} coordinates", path.len()),
        None => println!("{name}: goal unreachable"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let algo = std::env::args().nth(1).unwrap_or_else(|| "bfs".to_string());
    let trace = match algo.as_str() {
        "bfs" => run_bfs(DIMS, START, GOAL)?,
        "dfs" => run_dfs(DIMS, START, GOAL)?,
        "dijkstra" => run_dijkstra(DIMS, START, GOAL)?,
        "astar" => run_astar(DIMS, START, GOAL)?,
        other => return Err(format!("unknown algorithm: {other}").into()),
    };
    log::info!("{algo}: {} snapshots", trace.len());
    replay(&algo, &trace);
    Ok(())
}

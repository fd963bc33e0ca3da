use gridtrace_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On a 4-connected unit-cost grid this never overestimates the true
/// remaining cost, which makes it an admissible (and consistent) A*
/// heuristic.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

use gridmaze_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic for A*.
///
/// Edges are unit cost, so the estimate must never exceed the true number
/// of remaining steps.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

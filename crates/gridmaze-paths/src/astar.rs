//! A* search with a lazy-deletion binary heap.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use gridmaze_core::Point;
use log::debug;

use crate::path::Path;
use crate::traits::AstarPather;

/// Errors from a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before the goal was reached: no route exists
    /// between the two points under the current barrier placement.
    Exhausted { from: Point, to: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { from, to } => {
                write!(f, "no path exists from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// A frontier entry: a candidate node with its priority `f = g + h`.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f` first,
/// breaking ties by the natural order of the point to keep expansion
/// deterministic.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: i32,
    g: i32,
    p: Point,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.p.cmp(&self.p))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first shortest-path search over an [`AstarPather`].
///
/// Holds the per-invocation search state (`cost_so_far`, `came_from`, the
/// frontier, and a neighbor buffer) so repeated searches reuse allocations.
/// State is cleared at the start of every call.
#[derive(Debug, Default)]
pub struct PathFinder {
    cost_so_far: HashMap<Point, i32>,
    came_from: HashMap<Point, Point>,
    frontier: BinaryHeap<FrontierEntry>,
    nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a new finder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute a minimum-step path from `from` to `to`.
    ///
    /// Returns the full path including both endpoints, or
    /// [`SearchError::Exhausted`] if the goal is unreachable. Searching the
    /// same unmodified map twice yields an identical path.
    pub fn find<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Path, SearchError> {
        self.cost_so_far.clear();
        self.came_from.clear();
        self.frontier.clear();

        self.cost_so_far.insert(from, 0);
        self.frontier.push(FrontierEntry {
            f: pather.estimate(from, to),
            g: 0,
            p: from,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = loop {
            let Some(current) = self.frontier.pop() else {
                break false;
            };

            // Stale entry from before this node's cost improved.
            if self.cost_so_far.get(&current.p) != Some(&current.g) {
                continue;
            }

            if current.p == to {
                break true;
            }

            expanded += 1;
            nbuf.clear();
            pather.neighbors(current.p, &mut nbuf);

            for &n in nbuf.iter() {
                let new_cost = current.g + 1;
                match self.cost_so_far.get(&n) {
                    Some(&old) if new_cost >= old => continue,
                    _ => {}
                }
                self.cost_so_far.insert(n, new_cost);
                self.came_from.insert(n, current.p);
                self.frontier.push(FrontierEntry {
                    f: new_cost + pather.estimate(n, to),
                    g: new_cost,
                    p: n,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!("search exhausted after expanding {expanded} nodes: {from} -> {to}");
            return Err(SearchError::Exhausted { from, to });
        }

        // Walk predecessors back from the goal, then flip to start-first.
        let mut nodes = vec![to];
        let mut cur = to;
        let mut cost = 0;
        while cur != from {
            cur = self.came_from[&cur];
            cost += 1;
            nodes.push(cur);
        }
        nodes.reverse();

        debug!("path found: {from} -> {to}, cost {cost}, expanded {expanded} nodes");
        Ok(Path { nodes, cost })
    }
}

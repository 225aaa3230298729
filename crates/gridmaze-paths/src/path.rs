use gridmaze_core::Point;

/// An ordered route from start to end, inclusive, with its step cost.
///
/// Immutable once returned by the search. `cost` always equals
/// `nodes.len() - 1`, each step (orthogonal or diagonal) counting one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub(crate) nodes: Vec<Point>,
    pub(crate) cost: i32,
}

impl Path {
    /// The visited points, start first, end last.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Total number of steps taken.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// First point of the route.
    pub fn start(&self) -> Point {
        self.nodes[0]
    }

    /// Last point of the route.
    pub fn end(&self) -> Point {
        self.nodes[self.nodes.len() - 1]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

use gridmaze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible for unit-cost grids. On an 8-connected grid it underestimates
/// diagonal-heavy routes, which costs extra expansions but never optimality.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// The exact step count on an empty 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(b, b), 0);
        assert_eq!(chebyshev(b, b), 0);
    }
}

//! Constrained random maze generation.
//!
//! Placement rules: the start cell lands in the first two columns, the end
//! cell in the last two, and a configured number of distinct barrier cells
//! anywhere else. Barriers are chosen by rejection sampling, guarded by an
//! up-front satisfiability check so the loop always terminates.

use std::fmt;

use log::debug;
use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::maze::{Marker, Maze};

/// Default number of barrier cells.
pub const DEFAULT_BARRIERS: usize = 4;

/// Errors from maze generation. All are detected before any cell is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A dimension is zero or negative.
    EmptyGrid { width: i32, height: i32 },
    /// Fewer than 4 columns: the start region (first two columns) and end
    /// region (last two columns) would overlap.
    GridTooNarrow { width: i32 },
    /// The requested barriers plus the start and end cells meet or exceed
    /// the total cell count, so distinct placement cannot succeed.
    UnsatisfiableBarriers { barriers: usize, cells: usize },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::GridTooNarrow { width } => {
                write!(
                    f,
                    "maze needs at least 4 columns to separate start and end regions, got {width}"
                )
            }
            Self::UnsatisfiableBarriers { barriers, cells } => {
                write!(
                    f,
                    "{barriers} barriers plus start and end do not fit in {cells} cells"
                )
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Maze generator holding the random source.
///
/// The RNG is injected so callers can seed it for reproducible mazes;
/// the same seed and parameters always yield the same maze.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width` x `height` maze with `barrier_count` barriers.
    ///
    /// Start and end are drawn uniformly from their column regions; barriers
    /// are drawn uniformly over the whole grid, rejecting the start, the
    /// end, and cells already chosen, until `barrier_count` distinct cells
    /// are placed.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        barrier_count: usize,
    ) -> Result<Maze, GenError> {
        if width <= 0 || height <= 0 {
            return Err(GenError::EmptyGrid { width, height });
        }
        if width < 4 {
            return Err(GenError::GridTooNarrow { width });
        }
        let cells_total = (width * height) as usize;
        // Must hold strictly, or the rejection loop below cannot terminate.
        if barrier_count + 2 >= cells_total {
            return Err(GenError::UnsatisfiableBarriers {
                barriers: barrier_count,
                cells: cells_total,
            });
        }

        let mut cells = vec![Marker::Empty; cells_total];
        let idx = |p: Point| (p.y * width + p.x) as usize;

        let start = Point::new(
            self.rng.random_range(0..2),
            self.rng.random_range(0..height),
        );
        cells[idx(start)] = Marker::Start;

        let end = Point::new(
            self.rng.random_range(width - 2..width),
            self.rng.random_range(0..height),
        );
        cells[idx(end)] = Marker::End;

        let mut barriers = Vec::with_capacity(barrier_count);
        while barriers.len() < barrier_count {
            let candidate = Point::new(
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            if candidate == start || candidate == end || cells[idx(candidate)] == Marker::Barrier {
                continue;
            }
            cells[idx(candidate)] = Marker::Barrier;
            barriers.push(candidate);
        }

        debug!("generated {width}x{height} maze: start={start} end={end} barriers={barriers:?}");

        Ok(Maze {
            cells,
            width,
            height,
            start,
            end,
            barriers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(seed: u64, width: i32, height: i32, barriers: usize) -> Maze {
        MazeGen::new(StdRng::seed_from_u64(seed))
            .generate(width, height, barriers)
            .unwrap()
    }

    #[test]
    fn placement_invariants_hold_over_many_seeds() {
        for seed in 0..100 {
            let m = generate(seed, 6, 6, DEFAULT_BARRIERS);

            let mut starts = 0;
            let mut ends = 0;
            let mut walls = 0;
            for y in 0..m.height() {
                for x in 0..m.width() {
                    match m.at(Point::new(x, y)).unwrap() {
                        Marker::Start => starts += 1,
                        Marker::End => ends += 1,
                        Marker::Barrier => walls += 1,
                        Marker::Empty => {}
                    }
                }
            }
            assert_eq!(starts, 1);
            assert_eq!(ends, 1);
            assert_eq!(walls, DEFAULT_BARRIERS);

            assert!(m.start().x == 0 || m.start().x == 1);
            assert!(m.end().x == m.width() - 2 || m.end().x == m.width() - 1);
            assert_ne!(m.start(), m.end());

            assert_eq!(m.barriers().len(), DEFAULT_BARRIERS);
            for b in m.barriers() {
                assert_ne!(*b, m.start());
                assert_ne!(*b, m.end());
                assert_eq!(m.at(*b), Some(Marker::Barrier));
            }
        }
    }

    #[test]
    fn non_square_grids_respect_both_extents() {
        let m = generate(7, 8, 3, 5);
        assert_eq!(m.width(), 8);
        assert_eq!(m.height(), 3);
        assert!(m.start().y < 3);
        assert!(m.end().x >= 6);
        for b in m.barriers() {
            assert!(m.contains(*b));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(42, 6, 6, 4);
        let b = generate(42, 6, 6, 4);
        assert_eq!(a.start(), b.start());
        assert_eq!(a.end(), b.end());
        assert_eq!(a.barriers(), b.barriers());
    }

    #[test]
    fn too_many_barriers_is_rejected_up_front() {
        // 10 barriers plus start and end meet the 12-cell count.
        let mut g = MazeGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            g.generate(4, 3, 10).unwrap_err(),
            GenError::UnsatisfiableBarriers {
                barriers: 10,
                cells: 12
            }
        );
        // Overfilling the grid is also rejected.
        assert!(matches!(
            g.generate(4, 3, 12).unwrap_err(),
            GenError::UnsatisfiableBarriers { .. }
        ));
    }

    #[test]
    fn narrow_and_degenerate_grids_are_rejected() {
        let mut g = MazeGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            g.generate(3, 3, 1).unwrap_err(),
            GenError::GridTooNarrow { width: 3 }
        );
        assert_eq!(
            g.generate(0, 5, 1).unwrap_err(),
            GenError::EmptyGrid {
                width: 0,
                height: 5
            }
        );
        assert_eq!(
            g.generate(5, -1, 1).unwrap_err(),
            GenError::EmptyGrid {
                width: 5,
                height: -1
            }
        );
    }

    #[test]
    fn zero_barriers_is_allowed() {
        let m = generate(3, 4, 4, 0);
        assert!(m.barriers().is_empty());
    }

    #[test]
    fn error_messages_carry_context() {
        let e = GenError::UnsatisfiableBarriers {
            barriers: 10,
            cells: 12,
        };
        assert!(e.to_string().contains("10 barriers"));
        assert!(e.to_string().contains("12 cells"));
    }
}

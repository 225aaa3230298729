//! The maze grid: cell markers and read-only connectivity queries.
//!
//! Axis convention: `x` is the column, bounded by [`Maze::width`]; `y` is
//! the row, bounded by [`Maze::height`]. Storage is row-major.

use std::fmt;

use crate::geom::Point;

/// What a single maze cell holds.
///
/// A generated maze contains exactly one `Start`, exactly one `End`, a
/// configured number of `Barrier` cells, and `Empty` everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
}

impl Marker {
    /// The character used when rendering the maze as text.
    pub const fn char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
        }
    }
}

/// A generated maze: a fixed-size grid of [`Marker`] cells plus the chosen
/// start, end, and barrier placements.
///
/// Constructed by [`MazeGen`](crate::mazegen::MazeGen) and immutable afterwards;
/// pathfinding only reads it.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Vec<Marker>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) barriers: Vec<Point>,
}

impl Maze {
    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The start cell position.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell position.
    pub fn end(&self) -> Point {
        self.end
    }

    /// The barrier cell positions, in the order they were placed.
    pub fn barriers(&self) -> &[Point] {
        &self.barriers
    }

    /// Whether `p` lies within the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The marker at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Marker> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Append the up-to-8 traversable neighbours of `p` into `buf`: one
    /// orthogonal or diagonal step away, in bounds, and not a barrier.
    ///
    /// `p` itself is assumed valid; the caller clears `buf` beforehand.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if self.contains(n) && self.cells[self.idx(n)] != Marker::Barrier {
                buf.push(n);
            }
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

impl fmt::Display for Maze {
    /// Render the maze as one text row per grid row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[(y * self.width + x) as usize].char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

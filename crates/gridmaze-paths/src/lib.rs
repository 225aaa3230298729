//! Best-first pathfinding for maze grids.
//!
//! Provides an A*-style search over any structure that can enumerate the
//! traversable neighbours of a [`Point`](gridmaze_core::Point):
//!
//! - [`Pather`] / [`AstarPather`] — the traits a map implements.
//! - [`PathFinder`] — the search itself, with reusable internal state.
//! - [`Path`] — the reconstructed start-to-end route and its step cost.
//!
//! Every move costs one step, orthogonal or diagonal alike. The search
//! expands nodes in order of `cost so far + heuristic`; with an admissible
//! heuristic such as [`manhattan`] it returns a minimum-step path.

mod astar;
mod distance;
mod path;
mod traits;

pub use astar::{PathFinder, SearchError};
pub use distance::{chebyshev, manhattan};
pub use path::Path;
pub use traits::{AstarPather, Pather};

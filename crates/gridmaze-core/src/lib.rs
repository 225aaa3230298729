//! **gridmaze-core** — maze grid model and constrained random generation.
//!
//! This crate provides the foundational types for the *gridmaze* workspace:
//! geometry primitives, the maze grid itself, and a seedable random
//! generator that places a start cell, an end cell, and a set of blocking
//! barrier cells under placement invariants.
//!
//! Pathfinding over the generated maze lives in the companion
//! `gridmaze-paths` crate.

pub mod geom;
pub mod maze;
pub mod mazegen;

pub use geom::Point;
pub use maze::{Marker, Maze};
pub use mazegen::{DEFAULT_BARRIERS, GenError, MazeGen};

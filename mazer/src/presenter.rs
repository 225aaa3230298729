//! Text presentation of a maze and its solved route.
//!
//! Strictly a consumer: reads the maze's cells and the completed path, has
//! no influence on generation or search.

use std::collections::HashSet;
use std::fmt::Write;

use gridmaze_core::{Maze, Point};
use gridmaze_paths::Path;

/// Render the maze with the route overlaid as `*`. The start and end cells
/// keep their `S`/`E` markers; only intermediate route cells are overlaid.
pub fn render(maze: &Maze, path: &Path) -> String {
    let nodes = path.nodes();
    let interior: HashSet<Point> = if nodes.len() > 2 {
        nodes[1..nodes.len() - 1].iter().copied().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if x > 0 {
                out.push(' ');
            }
            let p = Point::new(x, y);
            if interior.contains(&p) {
                out.push('*');
            } else {
                // Every (x, y) in range is present in the maze.
                let _ = write!(out, "{}", maze.at(p).unwrap_or_default().char());
            }
        }
        out.push('\n');
    }
    out
}

/// Format the route as `(x, y) -> (x, y) -> ...`.
pub fn format_path(path: &Path) -> String {
    let mut out = String::new();
    for (i, p) in path.nodes().iter().enumerate() {
        if i > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{p}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazePather;
    use gridmaze_core::MazeGen;
    use gridmaze_paths::PathFinder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solved_maze(seed: u64) -> Option<(Maze, Path)> {
        let maze = MazeGen::new(StdRng::seed_from_u64(seed))
            .generate(6, 6, 4)
            .unwrap();
        let path = PathFinder::new()
            .find(&MazePather { maze: &maze }, maze.start(), maze.end())
            .ok()?;
        Some((maze, path))
    }

    #[test]
    fn render_keeps_endpoints_and_marks_route() {
        // Find a solvable seed; with 4 barriers on 6x6 nearly all are.
        let (maze, path) = (0..20).find_map(solved_maze).unwrap();
        let text = render(&maze, &path);

        assert_eq!(text.lines().count(), maze.height() as usize);
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
        assert_eq!(
            text.matches('*').count(),
            path.nodes().len().saturating_sub(2)
        );
        for line in text.lines() {
            // Cells separated by single spaces.
            assert_eq!(line.len(), (maze.width() * 2 - 1) as usize);
        }
    }

    #[test]
    fn format_path_joins_points_with_arrows() {
        let (_, path) = (0..20).find_map(solved_maze).unwrap();
        let s = format_path(&path);
        assert!(s.starts_with(&path.start().to_string()));
        assert!(s.ends_with(&path.end().to_string()));
        assert_eq!(s.matches(" -> ").count(), path.cost() as usize);
    }
}

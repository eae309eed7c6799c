use std::rc::Rc;

mod bfs;
mod dfs;

use crate::maze::{Coord, Maze, Path};
pub use bfs::{shortest_path, solve_bfs};
pub use dfs::solve_dfs;

/// A cell reached during a search, linked back to the cell it was reached from.
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// The parent cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
}

impl TrackedCell {
    /// Walk the parent chain back to the root and return the route root-first.
    fn into_path(self: Rc<Self>) -> Path {
        let mut path = Vec::new();
        let mut node = Some(self);
        while let Some(cell) = node {
            path.push(cell.coord);
            node = cell.parent.clone();
        }
        path.reverse();
        path
    }
}

/// Outcome of a hint search between two cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A route from start to goal, both included.
    Found(Path),
    /// Start and goal are the same cell.
    StartIsGoal(Coord),
    /// The goal cannot be reached from the start.
    NotFound { start: Coord },
}

impl SolveResult {
    pub fn is_found(&self) -> bool {
        !matches!(self, SolveResult::NotFound { .. })
    }

    /// The route as a plain path. A failed search yields just the start cell.
    pub fn into_path(self) -> Path {
        match self {
            SolveResult::Found(path) => path,
            SolveResult::StartIsGoal(coord) => vec![coord],
            SolveResult::NotFound { start } => vec![start],
        }
    }
}

pub enum Solver {
    Dfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Hint path from `start` (default top-left) to `goal` (default bottom-right).
pub fn solve(maze: &Maze, start: Option<Coord>, goal: Option<Coord>) -> SolveResult {
    let start = start.unwrap_or((0, 0));
    let goal = goal.unwrap_or_else(|| maze.goal());
    solve_dfs(maze, start, goal)
}

/// Solve from the top-left corner to the bottom-right corner with the chosen solver.
/// An empty path means the goal could not be reached.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Path {
    if maze.is_empty() {
        return Vec::new();
    }
    let start = (0, 0);
    let goal = maze.goal();

    match solver {
        Solver::Dfs => match solve_dfs(maze, start, goal) {
            SolveResult::NotFound { .. } => Vec::new(),
            result => result.into_path(),
        },
        Solver::Bfs => solve_bfs(maze, start, goal),
    }
}

pub mod error;
pub mod game;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{GameError, Result};
pub use generators::{generate_circular_maze, generate_maze};
pub use maze::{Coord, GridCell, Maze, Path, RingCell, RingMaze};
pub use solvers::{SolveResult, shortest_path, solve};

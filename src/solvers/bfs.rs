use std::{collections::VecDeque, rc::Rc};

use super::TrackedCell;
use crate::maze::{Coord, Direction, Maze, Path};

/// Neighbor expansion order.
const EXPANSION: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

/// Shortest route from the top-left corner to the bottom-right corner.
/// Empty if the corner cannot be reached.
pub fn shortest_path(maze: &Maze) -> Path {
    if maze.is_empty() {
        return Vec::new();
    }
    solve_bfs(maze, (0, 0), maze.goal())
}

/// Breadth-first search from `start` to `goal`, returning the route with the fewest cells.
///
/// Cells are marked visited when dequeued, so a cell may sit in the queue more than once;
/// the first copy of `goal` to be dequeued still carries a shortest route.
pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Path {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return Vec::new();
    }

    let mut visited = vec![false; maze.cell_count()];
    let mut queue = VecDeque::from([Rc::new(TrackedCell {
        coord: start,
        parent: None,
    })]);

    while let Some(current) = queue.pop_front() {
        if current.coord == goal {
            let path = current.into_path();
            tracing::trace!("[solver] BFS reached {:?} with {} cells", goal, path.len());
            return path;
        }

        let idx = maze.ravel_index(current.coord);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        for next in EXPANSION
            .into_iter()
            .filter_map(|d| maze.step(current.coord, d))
        {
            queue.push_back(Rc::new(TrackedCell {
                coord: next,
                parent: Some(current.clone()),
            }));
        }
    }

    tracing::debug!("[solver] BFS found no route from {:?} to {:?}", start, goal);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    /// Open every interior wall so the maze has many routes.
    fn open_maze(width: u8, height: u8) -> Maze {
        let mut maze = Maze::new(width, height);
        for coord in maze.coords() {
            maze.carve(coord, Direction::East);
            maze.carve(coord, Direction::South);
        }
        maze
    }

    #[test]
    fn test_known_scenario() {
        let maze = generate_maze(14, 14, 12345);
        let path = shortest_path(&maze);
        assert!(!path.is_empty());
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(13, 13)));
    }

    #[test]
    fn test_two_by_two_is_short() {
        for seed in 0..100 {
            let maze = generate_maze(2, 2, seed);
            let path = shortest_path(&maze);
            assert!(path.len() <= 3, "seed {seed}: {path:?}");
            assert_eq!(path.last(), Some(&(1, 1)));
        }
    }

    #[test]
    fn test_shortest_in_open_maze() {
        let maze = open_maze(6, 4);
        let path = shortest_path(&maze);
        // Manhattan distance plus the start cell
        assert_eq!(path.len(), 5 + 3 + 1);
        // East is expanded first, so ties resolve along the top row
        assert_eq!(path[1], (0, 1));
        crate::solvers::tests::assert_valid_path(&maze, &path);
    }

    #[test]
    fn test_not_longer_than_dfs_hint() {
        let maze = open_maze(5, 5);
        let dfs = crate::solvers::solve_dfs(&maze, (0, 0), (4, 4)).into_path();
        let bfs = shortest_path(&maze);
        assert!(bfs.len() <= dfs.len());

        let maze = generate_maze(16, 16, 8);
        let dfs = crate::solvers::solve_dfs(&maze, (0, 0), (15, 15)).into_path();
        assert!(shortest_path(&maze).len() <= dfs.len());
    }

    #[test]
    fn test_unreachable() {
        let maze = Maze::new(2, 2);
        assert!(shortest_path(&maze).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let maze = Maze::new(1, 1);
        assert_eq!(shortest_path(&maze), vec![(0, 0)]);
    }
}

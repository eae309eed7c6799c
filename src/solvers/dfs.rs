use super::SolveResult;
use crate::maze::{Coord, Direction, Maze};

/// Order in which passable neighbors are tried. The first available one is taken.
const PRIORITY: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::North,
];

/// Depth-first walk from `start` to `goal`, always stepping into the first open, unvisited
/// neighbor and backtracking on dead ends.
///
/// The route is a valid hint but not necessarily the shortest one.
pub fn solve_dfs(maze: &Maze, start: Coord, goal: Coord) -> SolveResult {
    if start == goal {
        return SolveResult::StartIsGoal(start);
    }
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return SolveResult::NotFound { start };
    }

    let mut visited = vec![false; maze.cell_count()];
    let mut path = vec![start];

    while let Some(&current) = path.last() {
        if current == goal {
            tracing::trace!("[solver] DFS reached {:?} in {} steps", goal, path.len());
            return SolveResult::Found(path);
        }
        visited[maze.ravel_index(current)] = true;

        let next = PRIORITY
            .into_iter()
            .filter_map(|d| maze.step(current, d))
            .find(|&c| !visited[maze.ravel_index(c)]);

        match next {
            Some(c) => path.push(c),
            // Dead end, back up one cell and retry from there
            None => {
                path.pop();
            }
        }
    }

    tracing::debug!("[solver] DFS found no route from {:?} to {:?}", start, goal);
    SolveResult::NotFound { start }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_prefers_south_first() {
        // Open plan 2x2: both routes to (1, 1) have the same length
        let mut maze = Maze::new(2, 2);
        maze.carve((0, 0), Direction::East);
        maze.carve((0, 0), Direction::South);
        maze.carve((0, 1), Direction::South);
        maze.carve((1, 0), Direction::East);
        let result = solve_dfs(&maze, (0, 0), (1, 1));
        assert_eq!(result, SolveResult::Found(vec![(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // (0,0) -> (1,0) is a dead end; the goal is reached through (0,1)
        let mut maze = Maze::new(2, 2);
        maze.carve((0, 0), Direction::South);
        maze.carve((0, 0), Direction::East);
        maze.carve((0, 1), Direction::South);
        let result = solve_dfs(&maze, (0, 0), (1, 1));
        assert_eq!(result, SolveResult::Found(vec![(0, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_from_arbitrary_start() {
        let maze = generate_maze(8, 8, 55);
        let result = solve_dfs(&maze, (4, 3), maze.goal());
        let SolveResult::Found(path) = result else {
            panic!("expected a route, got {result:?}");
        };
        assert_eq!(path.first(), Some(&(4, 3)));
        assert_eq!(path.last(), Some(&(7, 7)));
        crate::solvers::tests::assert_valid_path(&maze, &path);
    }

    #[test]
    fn test_not_found() {
        let mut maze = Maze::new(3, 1);
        maze.carve((0, 0), Direction::East);
        assert_eq!(
            solve_dfs(&maze, (0, 0), (0, 2)),
            SolveResult::NotFound { start: (0, 0) }
        );
    }

    #[test]
    fn test_start_is_goal() {
        let maze = Maze::new(1, 1);
        assert_eq!(solve_dfs(&maze, (0, 0), (0, 0)), SolveResult::StartIsGoal((0, 0)));
    }
}

use std::{collections::HashMap, time::Duration};

use crate::{
    error::{GameError, Result},
    game::{GameStatus, MazePreset, Run},
    generators::generate_maze,
    maze::{Coord, Direction, Maze, Path},
    solvers::{SolveResult, shortest_path, solve},
};

/// Highest visit level reported for a cell, however often it was walked over.
const MAX_VISIT_LEVEL: u8 = 3;

pub struct GameState {
    /// The maze being played
    maze: Maze,
    /// Seed the maze was generated from
    seed: u64,
    /// Tracks where the player currently is
    current: Coord,
    /// Goal position
    goal: Coord,
    /// How many times each cell has been stepped onto
    visits: HashMap<Coord, u32>,
    /// Corner-to-corner shortest route, computed once per maze
    shortest: Path,
    run: Run,
}

impl GameState {
    /// Set up a new game on a freshly generated `width` x `height` maze.
    /// The player starts top left and the goal is bottom right.
    pub fn initialize(width: u8, height: u8, seed: u64, preset: MazePreset) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        let maze = generate_maze(width, height, seed);
        Ok(GameState::with_maze(maze, seed, preset))
    }

    /// Start a game on an existing, non-empty maze.
    pub fn with_maze(maze: Maze, seed: u64, preset: MazePreset) -> Self {
        let shortest = shortest_path(&maze);
        tracing::info!(
            "[game] New {} game on a {}x{} maze, shortest route is {} cells",
            preset,
            maze.width(),
            maze.height(),
            shortest.len()
        );
        GameState {
            goal: maze.goal(),
            maze,
            seed,
            current: (0, 0),
            visits: HashMap::new(),
            shortest,
            run: Run::start(preset),
        }
    }

    /// Put the player back at the start with a fresh timer, keeping the maze.
    pub fn restart(&mut self) {
        self.current = (0, 0);
        self.visits.clear();
        self.run = Run::start(self.run.preset());
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn preset(&self) -> MazePreset {
        self.run.preset()
    }

    pub fn position(&self) -> Coord {
        self.current
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn status(&self) -> GameStatus {
        self.run.status()
    }

    /// Time on the clock; frozen once the goal is reached.
    pub fn elapsed(&self) -> Duration {
        self.run.elapsed()
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.current == self.goal
    }

    pub fn visit_count(&self, coord: Coord) -> u32 {
        self.visits.get(&coord).copied().unwrap_or(0)
    }

    /// Visit count capped at 3, for shading walked cells.
    pub fn visit_level(&self, coord: Coord) -> u8 {
        self.visit_count(coord).min(MAX_VISIT_LEVEL as u32) as u8
    }

    /// Route from the player's current cell to the goal.
    pub fn hint(&self) -> SolveResult {
        solve(&self.maze, Some(self.current), Some(self.goal))
    }

    /// Shortest route from the top-left corner to the goal.
    pub fn shortest_path(&self) -> &[Coord] {
        &self.shortest
    }

    /// Attempt to move the player one cell in `direction`.
    ///
    /// Returns the new position, or `None` if a wall or the border blocks the move.
    /// Fails once the goal has been reached.
    pub fn move_player(&mut self, direction: Direction) -> Result<Option<Coord>> {
        self.run.ensure_playing()?;

        let Some(new_pos) = self.maze.step(self.current, direction) else {
            tracing::debug!(
                "[game] Move {:?} from {:?} is blocked",
                direction,
                self.current
            );
            return Ok(None);
        };

        let count = self.visits.entry(new_pos).or_insert(0);
        *count += 1;
        tracing::debug!(
            "[game] Moving to {:?}, visit number {}",
            new_pos,
            *count
        );
        self.current = new_pos;

        if self.goal_reached() {
            if let GameStatus::Won { elapsed, score } = self.run.finish() {
                tracing::info!(
                    "[game] Goal reached in {:?}, score {}",
                    elapsed,
                    score
                );
            }
        }

        Ok(Some(new_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two columns, open along the top row and down the right column.
    fn corridor() -> Maze {
        let mut maze = Maze::new(2, 2);
        maze.carve((0, 0), Direction::East);
        maze.carve((0, 1), Direction::South);
        maze
    }

    #[test]
    fn test_walls_block_moves() {
        let mut game = GameState::with_maze(corridor(), 0, MazePreset::Maze1);
        assert_eq!(game.move_player(Direction::South), Ok(None));
        assert_eq!(game.move_player(Direction::North), Ok(None));
        assert_eq!(game.move_player(Direction::West), Ok(None));
        assert_eq!(game.position(), (0, 0));
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_reaching_goal_wins() {
        let mut game = GameState::with_maze(corridor(), 0, MazePreset::Maze1);
        assert_eq!(game.move_player(Direction::East), Ok(Some((0, 1))));
        assert!(!game.goal_reached());
        assert_eq!(game.move_player(Direction::South), Ok(Some((1, 1))));
        assert!(game.goal_reached());
        assert!(matches!(game.status(), GameStatus::Won { score: 3, .. }));
        assert_eq!(
            game.move_player(Direction::North),
            Err(GameError::AlreadyFinished)
        );
    }

    #[test]
    fn test_visit_counts() {
        let mut game = GameState::with_maze(corridor(), 0, MazePreset::Maze1);
        game.move_player(Direction::East).unwrap();
        game.move_player(Direction::West).unwrap();
        game.move_player(Direction::East).unwrap();
        game.move_player(Direction::West).unwrap();
        game.move_player(Direction::East).unwrap();
        game.move_player(Direction::West).unwrap();
        game.move_player(Direction::East).unwrap();
        assert_eq!(game.visit_count((0, 1)), 4);
        assert_eq!(game.visit_level((0, 1)), 3);
        assert_eq!(game.visit_count((0, 0)), 3);
        assert_eq!(game.visit_count((1, 0)), 0);

        game.restart();
        assert_eq!(game.position(), (0, 0));
        assert_eq!(game.visit_count((0, 1)), 0);
    }

    #[test]
    fn test_hint_follows_player() {
        let mut game = GameState::initialize(14, 14, 12345, MazePreset::Maze1).unwrap();
        assert_eq!(game.shortest_path().first(), Some(&(0, 0)));
        assert_eq!(game.shortest_path().last(), Some(&(13, 13)));

        let hint = game.hint().into_path();
        assert_eq!(hint, game.shortest_path());

        // Follow the hint one step and ask again
        let next = hint[1];
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| game.maze().step((0, 0), d) == Some(next))
            .unwrap();
        game.move_player(direction).unwrap();
        let hint = game.hint().into_path();
        assert_eq!(hint.first(), Some(&next));
        assert_eq!(hint.last(), Some(&(13, 13)));
    }

    #[test]
    fn test_hint_at_goal() {
        let mut game = GameState::with_maze(corridor(), 0, MazePreset::Maze1);
        game.move_player(Direction::East).unwrap();
        game.move_player(Direction::South).unwrap();
        assert_eq!(game.hint(), SolveResult::StartIsGoal((1, 1)));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            GameState::initialize(0, 5, 1, MazePreset::Maze1).err(),
            Some(GameError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }
}

use std::time::Duration;

use crate::{
    error::{GameError, Result},
    game::{GameStatus, MazePreset, Run},
    generators::generate_circular_maze,
    maze::{Coord, RingDirection, RingMaze},
};

fn check_dimensions(rings: u8, sectors: u8) -> Result<()> {
    if rings == 0 || sectors == 0 {
        return Err(GameError::InvalidDimensions {
            width: sectors,
            height: rings,
        });
    }
    Ok(())
}

/// A game on a circular maze: start on the outer ring, reach ring 0.
pub struct RingGameState {
    maze: RingMaze,
    seed: u64,
    current: Coord,
    run: Run,
}

impl RingGameState {
    /// Generate a circular maze and place the player on its outermost ring at `start_sector`
    /// (wrapped into range).
    pub fn initialize(
        rings: u8,
        sectors: u8,
        seed: u64,
        start_sector: u8,
        preset: MazePreset,
    ) -> Result<Self> {
        check_dimensions(rings, sectors)?;
        let maze = generate_circular_maze(rings, sectors, seed);
        RingGameState::with_maze(maze, seed, start_sector, preset)
    }

    /// Start a game on an existing circular maze. Fails if it has no rings or no sectors.
    pub fn with_maze(
        mut maze: RingMaze,
        seed: u64,
        start_sector: u8,
        preset: MazePreset,
    ) -> Result<Self> {
        check_dimensions(maze.rings(), maze.sectors())?;
        let start = (maze.rings() - 1, start_sector % maze.sectors());
        maze.visit(start);
        tracing::info!(
            "[game] New {} game on a {} ring x {} sector maze, starting at {:?}",
            preset,
            maze.rings(),
            maze.sectors(),
            start
        );
        let mut state = RingGameState {
            maze,
            seed,
            current: start,
            run: Run::start(preset),
        };
        if state.goal_reached() {
            state.run.finish();
        }
        Ok(state)
    }

    pub fn maze(&self) -> &RingMaze {
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

    pub fn status(&self) -> GameStatus {
        self.run.status()
    }

    pub fn elapsed(&self) -> Duration {
        self.run.elapsed()
    }

    /// The innermost ring is the goal.
    pub fn goal_reached(&self) -> bool {
        self.current.0 == 0
    }

    /// Attempt to move the player one cell in `direction`, bumping the visit counter of the
    /// cell moved onto.
    ///
    /// Returns `None` if a wall or the maze edge blocks the move.
    pub fn move_player(&mut self, direction: RingDirection) -> Result<Option<Coord>> {
        self.run.ensure_playing()?;

        let Some(new_pos) = self.maze.step(self.current, direction) else {
            tracing::debug!(
                "[game] Move {:?} from {:?} is blocked",
                direction,
                self.current
            );
            return Ok(None);
        };

        let visits = self.maze.visit(new_pos);
        tracing::debug!("[game] Moving to {:?}, visit number {}", new_pos, visits);
        self.current = new_pos;

        if self.goal_reached() {
            tracing::info!("[game] Reached the center in {:?}", self.run.elapsed());
            self.run.finish();
        }

        Ok(Some(new_pos))
    }
}

mod game_settings;
mod game_state;
mod ring_state;

use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use crate::error::{GameError, Result};

pub use game_settings::{DEFAULT_GRID_SEED, GameSettings};
pub use game_state::GameState;
pub use ring_state::RingGameState;

/// Board shape of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeShape {
    Grid { size: u8 },
    Circular { rings: u8, sectors: u8 },
}

/// The fixed mazes a player can pick from.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazePreset {
    #[default]
    Maze1,
    Maze2,
    Maze3,
    Maze4,
}

impl MazePreset {
    pub const ALL: [MazePreset; 4] = [
        MazePreset::Maze1,
        MazePreset::Maze2,
        MazePreset::Maze3,
        MazePreset::Maze4,
    ];

    pub fn shape(self) -> MazeShape {
        match self {
            MazePreset::Maze1 => MazeShape::Grid { size: 14 },
            MazePreset::Maze2 => MazeShape::Grid { size: 19 },
            MazePreset::Maze3 => MazeShape::Circular {
                rings: 8,
                sectors: 36,
            },
            MazePreset::Maze4 => MazeShape::Grid { size: 32 },
        }
    }

    /// Upper bounds in seconds for three, two and one stars.
    fn star_thresholds(self) -> [u64; 3] {
        match self {
            MazePreset::Maze1 => [30, 45, 60],
            MazePreset::Maze2 => [60, 90, 105],
            MazePreset::Maze3 => [90, 105, 120],
            MazePreset::Maze4 => [105, 120, 150],
        }
    }

    /// Stars earned for finishing in `elapsed`: 3 for the fastest bracket down to 0.
    /// Bracket bounds are inclusive.
    pub fn score(self, elapsed: Duration) -> u8 {
        let secs = elapsed.as_secs_f64();
        let brackets_missed = self
            .star_thresholds()
            .iter()
            .take_while(|&&limit| secs > limit as f64)
            .count();
        3 - brackets_missed as u8
    }
}

impl fmt::Display for MazePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            MazePreset::Maze1 => 1,
            MazePreset::Maze2 => 2,
            MazePreset::Maze3 => 3,
            MazePreset::Maze4 => 4,
        };
        write!(f, "Maze {n}")
    }
}

impl FromStr for MazePreset {
    type Err = GameError;

    /// Accepts `"1"`, `"maze1"`, `"Maze 1"` and the like.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(' ', "");
        let digit = normalized.strip_prefix("maze").unwrap_or(&normalized);
        match digit {
            "1" => Ok(MazePreset::Maze1),
            "2" => Ok(MazePreset::Maze2),
            "3" => Ok(MazePreset::Maze3),
            "4" => Ok(MazePreset::Maze4),
            _ => Err(GameError::UnknownPreset(s.to_string())),
        }
    }
}

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won { elapsed: Duration, score: u8 },
}

/// Timer and outcome of a single run.
#[derive(Debug, Clone)]
pub(crate) struct Run {
    preset: MazePreset,
    started_at: Instant,
    status: GameStatus,
}

impl Run {
    pub(crate) fn start(preset: MazePreset) -> Self {
        Run {
            preset,
            started_at: Instant::now(),
            status: GameStatus::Playing,
        }
    }

    pub(crate) fn preset(&self) -> MazePreset {
        self.preset
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn elapsed(&self) -> Duration {
        match self.status {
            GameStatus::Won { elapsed, .. } => elapsed,
            GameStatus::Playing => self.started_at.elapsed(),
        }
    }

    pub(crate) fn ensure_playing(&self) -> Result<()> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Won { .. } => Err(GameError::AlreadyFinished),
        }
    }

    /// Stop the clock and score the run.
    pub(crate) fn finish(&mut self) -> GameStatus {
        if self.status == GameStatus::Playing {
            let elapsed = self.started_at.elapsed();
            self.status = GameStatus::Won {
                elapsed,
                score: self.preset.score(elapsed),
            };
        }
        self.status
    }
}

/// A running game on either board shape.
pub enum Game {
    Grid(GameState),
    Circular(RingGameState),
}

impl Game {
    pub fn status(&self) -> GameStatus {
        match self {
            Game::Grid(state) => state.status(),
            Game::Circular(state) => state.status(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Game::Grid(state) => state.elapsed(),
            Game::Circular(state) => state.elapsed(),
        }
    }

    pub fn position(&self) -> (u8, u8) {
        match self {
            Game::Grid(state) => state.position(),
            Game::Circular(state) => state.position(),
        }
    }
}

/// Format a duration as `MM:SS`, dropping fractions of a second.
pub fn format_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

use rand::Rng;

use crate::{
    error::{GameError, Result},
    game::{Game, GameState, MazePreset, MazeShape, RingGameState},
};

/// Seed used by grid presets when none is given, so their layouts never change.
pub const DEFAULT_GRID_SEED: u64 = 12345;

/// What to play: a preset and, optionally, a fixed seed.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub preset: MazePreset,
    /// Seed for maze generation. When unset, grid presets use [`DEFAULT_GRID_SEED`] and
    /// circular ones draw a fresh seed for every game.
    pub seed: Option<u64>,
}

impl GameSettings {
    /// Read `[preset] [seed]` from command-line style arguments.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let mut settings = GameSettings::default();
        if let Some(preset) = args.next() {
            settings.preset = preset.as_ref().parse()?;
        }
        if let Some(seed) = args.next() {
            let seed = seed.as_ref();
            settings.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| GameError::InvalidSeed(seed.to_string()))?,
            );
        }
        Ok(settings)
    }

    /// The configured seed, else the fixed grid seed, else a random one for circular mazes.
    pub fn resolve_seed(&self) -> u64 {
        match (self.seed, self.preset.shape()) {
            (Some(seed), _) => seed,
            (None, MazeShape::Grid { .. }) => DEFAULT_GRID_SEED,
            (None, MazeShape::Circular { .. }) => rand::rng().random(),
        }
    }

    /// Generate the maze for these settings and start a game on it.
    pub fn start(&self) -> Result<Game> {
        let seed = self.resolve_seed();
        tracing::debug!("[game] Starting {} with seed {}", self.preset, seed);
        match self.preset.shape() {
            MazeShape::Grid { size } => {
                GameState::initialize(size, size, seed, self.preset).map(Game::Grid)
            }
            MazeShape::Circular { rings, sectors } => {
                let start_sector = rand::rng().random_range(0..sectors);
                RingGameState::initialize(rings, sectors, seed, start_sector, self.preset)
                    .map(Game::Circular)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_from_args() {
        assert_eq!(
            GameSettings::from_args(Vec::<String>::new()),
            Ok(GameSettings::default())
        );
        assert_eq!(
            GameSettings::from_args(["2", "12345"]),
            Ok(GameSettings {
                preset: MazePreset::Maze2,
                seed: Some(12345),
            })
        );
        assert_eq!(
            GameSettings::from_args(["maze4", "abc"]),
            Err(GameError::InvalidSeed("abc".to_string()))
        );
        assert!(matches!(
            GameSettings::from_args(["huge"]),
            Err(GameError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let settings = GameSettings {
            preset: MazePreset::Maze1,
            seed: Some(12345),
        };
        assert_eq!(settings.resolve_seed(), 12345);
        let (Ok(Game::Grid(a)), Ok(Game::Grid(b))) = (settings.start(), settings.start()) else {
            panic!("Maze 1 should be a grid game");
        };
        assert_eq!(a.maze(), b.maze());
        assert_eq!(a.maze().width(), 14);
    }

    #[test]
    fn test_grid_presets_default_to_fixed_seed() {
        for preset in [MazePreset::Maze1, MazePreset::Maze2, MazePreset::Maze4] {
            let settings = GameSettings { preset, seed: None };
            assert_eq!(settings.resolve_seed(), DEFAULT_GRID_SEED);
        }
        let explicit = GameSettings {
            preset: MazePreset::Maze2,
            seed: Some(9),
        };
        assert_eq!(explicit.resolve_seed(), 9);

        let Ok(Game::Grid(game)) = GameSettings::default().start() else {
            panic!("Maze 1 should be a grid game");
        };
        assert_eq!(game.seed(), DEFAULT_GRID_SEED);
        assert_eq!(game.maze(), &generate_maze(14, 14, DEFAULT_GRID_SEED));
    }

    #[test]
    fn test_circular_preset() {
        let settings = GameSettings {
            preset: MazePreset::Maze3,
            seed: Some(7),
        };
        let Ok(Game::Circular(game)) = settings.start() else {
            panic!("Maze 3 should be a circular game");
        };
        assert_eq!(game.maze().rings(), 8);
        assert_eq!(game.maze().sectors(), 36);
        assert_eq!(game.position().0, 7);
    }
}

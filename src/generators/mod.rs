mod circular;
mod recur_backtrack;

pub use circular::carve_circular;
pub use recur_backtrack::recursive_backtrack;

use crate::maze::{Maze, RingMaze};

/// Deterministic pseudo-random value in `[0, 1)` derived from `seed` alone.
///
/// There is no hidden state: callers advance the seed themselves, so a whole
/// generation run is reproducible from its initial seed. `libm::sin` gives the same bits on
/// every platform, unlike `f64::sin`.
pub fn seeded_random(seed: u64) -> f64 {
    let x = libm::sin(seed as f64) * 10000.0;
    x - x.floor()
}

/// Map a seed onto an index in `[0, len)`. `len` must be non-zero.
pub fn pick_index(seed: u64, len: usize) -> usize {
    let idx = (seeded_random(seed) * len as f64).floor() as usize;
    // Guard against `x - floor(x)` rounding up to exactly 1.0
    idx.min(len - 1)
}

/// Generate a `height` x `width` perfect maze from `seed`.
pub fn generate_maze(width: u8, height: u8, seed: u64) -> Maze {
    let mut maze = Maze::new(width, height);
    recursive_backtrack(&mut maze, seed);
    maze
}

/// Generate a circular perfect maze with the default center band.
pub fn generate_circular_maze(rings: u8, sectors: u8, seed: u64) -> RingMaze {
    let mut maze = RingMaze::new(rings, sectors, RingMaze::DEFAULT_CENTER_SPACE);
    carve_circular(&mut maze, seed);
    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_in_unit_range() {
        for seed in 0..10_000 {
            let x = seeded_random(seed);
            assert!((0.0..1.0).contains(&x), "seed {seed} gave {x}");
        }
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        assert_eq!(seeded_random(12345), seeded_random(12345));
        assert_ne!(seeded_random(12345), seeded_random(12346));
        // sin(0) == 0
        assert_eq!(seeded_random(0), 0.0);
    }

    #[test]
    fn test_seeded_random_known_values() {
        // Bit patterns of frac(sin(seed) * 10000) as computed by fdlibm
        let expected: [(u64, u64); 3] = [
            (1, 0x3fe6_b713_5189_0000),
            (12345, 0x3fd2_2715_461f_0000),
            (99_999, 0x3fde_e653_186b_0000),
        ];
        for (seed, bits) in expected {
            assert_eq!(seeded_random(seed).to_bits(), bits, "seed {seed}");
        }
        assert_eq!(pick_index(12345, 14), 3);
        assert_eq!(pick_index(12346, 14), 4);
    }

    #[test]
    fn test_pick_index_in_range() {
        for seed in 0..2_000 {
            for len in 1..6 {
                assert!(pick_index(seed, len) < len);
            }
        }
        assert_eq!(pick_index(42, 1), 0);
    }
}

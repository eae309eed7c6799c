use std::fmt;

use crate::maze::{Direction, RingDirection};

/// A cell of a rectangular maze.
///
/// Each flag describes the side of the cell facing that direction: `true` means the wall
/// has been carved away and the side is passable, `false` means the wall is present.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl GridCell {
    /// A cell with all four walls present.
    pub const CLOSED: GridCell = GridCell {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top,
            Direction::East => self.right,
            Direction::South => self.bottom,
            Direction::West => self.left,
        }
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.top = true,
            Direction::East => self.right = true,
            Direction::South => self.bottom = true,
            Direction::West => self.left = true,
        }
    }
}

impl fmt::Display for GridCell {
    /// Renders the cell as its open sides, `NESW` style, with `-` for walls.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = |open: bool, c: char| if open { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            symbol(self.top, 'N'),
            symbol(self.right, 'E'),
            symbol(self.bottom, 'S'),
            symbol(self.left, 'W'),
        )
    }
}

/// A cell of a circular maze, addressed by `(ring, sector)`.
///
/// Flags follow the same convention as [`GridCell`]: `true` means passable.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingCell {
    pub inner: bool,
    pub outer: bool,
    pub clockwise: bool,
    pub counter_clockwise: bool,
    /// How many times the player has stepped onto this cell. Never touched by generation.
    pub visits: u32,
}

impl RingCell {
    pub const CLOSED: RingCell = RingCell {
        inner: false,
        outer: false,
        clockwise: false,
        counter_clockwise: false,
        visits: 0,
    };

    pub fn is_open(&self, direction: RingDirection) -> bool {
        match direction {
            RingDirection::Inner => self.inner,
            RingDirection::Outer => self.outer,
            RingDirection::Clockwise => self.clockwise,
            RingDirection::CounterClockwise => self.counter_clockwise,
        }
    }

    pub(crate) fn open(&mut self, direction: RingDirection) {
        match direction {
            RingDirection::Inner => self.inner = true,
            RingDirection::Outer => self.outer = true,
            RingDirection::Clockwise => self.clockwise = true,
            RingDirection::CounterClockwise => self.counter_clockwise = true,
        }
    }
}

pub mod cell;
pub mod grid;
pub mod ring;

pub use cell::{GridCell, RingCell};
pub use grid::Grid;
pub use ring::RingMaze;

/// A cell coordinate. `(row, col)` in a [`Maze`], `(ring, sector)` in a [`RingMaze`].
pub type Coord = (u8, u8);

/// An ordered route through a maze, start first.
pub type Path = Vec<Coord>;

/// Cardinal directions of a rectangular maze. North is row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Directions of a circular maze. Inner moves toward the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingDirection {
    Inner,
    Outer,
    Clockwise,
    CounterClockwise,
}

impl RingDirection {
    pub const ALL: [RingDirection; 4] = [
        RingDirection::Inner,
        RingDirection::Outer,
        RingDirection::Clockwise,
        RingDirection::CounterClockwise,
    ];

    pub fn opposite(self) -> RingDirection {
        match self {
            RingDirection::Inner => RingDirection::Outer,
            RingDirection::Outer => RingDirection::Inner,
            RingDirection::Clockwise => RingDirection::CounterClockwise,
            RingDirection::CounterClockwise => RingDirection::Clockwise,
        }
    }
}

/// A rectangular maze of `height` rows by `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<GridCell>,
}

impl Maze {
    /// Creates a new maze with the given width and height.
    /// Every cell starts with all four walls present.
    pub fn new(width: u8, height: u8) -> Self {
        Maze {
            grid: Grid::new(height, width, GridCell::CLOSED),
        }
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.grid.rows()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.grid.cols()
    }

    /// Checks if the maze has no cells.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Coord {
        (self.height().saturating_sub(1), self.width().saturating_sub(1))
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        self.grid.coords()
    }

    /// Flattened index of a coordinate, `row * width + col`.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        self.grid.ravel_index(coord)
    }

    /// The in-bounds cell one step from `coord` in `direction`, ignoring walls.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (row, col) = coord;
        // NOTE: wrapping_sub turns an underflow into u8::MAX and saturating_add caps at u8::MAX,
        // both of which are filtered out by the bounds check since the largest index is
        // u8::MAX - 1.
        let next = match direction {
            Direction::North => (row.wrapping_sub(1), col),
            Direction::East => (row, col.saturating_add(1)),
            Direction::South => (row.saturating_add(1), col),
            Direction::West => (row, col.wrapping_sub(1)),
        };
        (self.is_in_bounds(coord) && self.is_in_bounds(next)).then_some(next)
    }

    /// In-bounds neighbors of a cell, in North, East, South, West order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(coord, d).map(|n| (n, d)))
    }

    /// Whether the side of `coord` facing `direction` is carved open.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.grid[coord].is_open(direction)
    }

    /// The neighbor reachable from `coord` by walking in `direction`, if no wall blocks it.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.neighbor(coord, direction)
            .filter(|_| self.is_open(coord, direction))
    }

    /// Removes the wall between `from` and its neighbor in `direction`.
    /// Both cells are updated so the shared wall stays consistent.
    ///
    /// Returns `false` if there is no neighbor in that direction.
    pub fn carve(&mut self, from: Coord, direction: Direction) -> bool {
        let Some(to) = self.neighbor(from, direction) else {
            return false;
        };
        self.grid[from].open(direction);
        self.grid[to].open(direction.opposite());
        true
    }

    /// Number of open passages between pairs of adjacent cells.
    pub fn passage_count(&self) -> usize {
        self.coords()
            .map(|c| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| self.neighbor(c, d).is_some() && self.is_open(c, d))
                    .count()
            })
            .sum()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<GridCell>> + '_ {
        (0..self.height()).map(move |r| (0..self.width()).map(|c| self.grid[(r, c)]).collect())
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

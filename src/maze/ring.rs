use crate::maze::{Coord, Grid, RingCell, RingDirection};

/// A circular maze of concentric rings split into sectors, addressed by `(ring, sector)`.
///
/// Ring 0 is innermost. Sector indices wrap around, so sector `sectors - 1` is the
/// counter-clockwise neighbor of sector 0. Rings below `center_space` form the open
/// center band: they are never carved and are treated as fully passable among themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingMaze {
    grid: Grid<RingCell>,
    center_space: u8,
}

impl RingMaze {
    pub const DEFAULT_CENTER_SPACE: u8 = 2;

    /// Creates a new circular maze with every wall present.
    pub fn new(rings: u8, sectors: u8, center_space: u8) -> Self {
        RingMaze {
            grid: Grid::new(rings, sectors, RingCell::CLOSED),
            center_space,
        }
    }

    pub fn rings(&self) -> u8 {
        self.grid.rows()
    }

    pub fn sectors(&self) -> u8 {
        self.grid.cols()
    }

    pub fn center_space(&self) -> u8 {
        self.center_space
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Whether the cell lies in the open center band.
    pub fn is_center(&self, coord: Coord) -> bool {
        coord.0 < self.center_space
    }

    /// Number of cells outside the center band.
    pub fn carved_cell_count(&self) -> usize {
        self.rings().saturating_sub(self.center_space) as usize * self.sectors() as usize
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        self.grid.coords()
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        self.grid.ravel_index(coord)
    }

    /// The cell one step from `coord` in `direction`, ignoring walls.
    /// Sectors wrap; rings do not.
    pub fn neighbor(&self, coord: Coord, direction: RingDirection) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let (ring, sector) = coord;
        let sectors = self.sectors() as u16;
        let next = match direction {
            RingDirection::Inner => (ring.checked_sub(1)?, sector),
            RingDirection::Outer => (ring.checked_add(1)?, sector),
            RingDirection::Clockwise => (ring, ((sector as u16 + 1) % sectors) as u8),
            RingDirection::CounterClockwise => {
                (ring, ((sector as u16 + sectors - 1) % sectors) as u8)
            }
        };
        self.is_in_bounds(next).then_some(next)
    }

    pub fn is_open(&self, coord: Coord, direction: RingDirection) -> bool {
        self.grid[coord].is_open(direction)
    }

    /// Whether a player may walk from `coord` in `direction`.
    ///
    /// Steps between two center-band cells are always allowed; any other step needs the
    /// carved passage.
    pub fn step(&self, coord: Coord, direction: RingDirection) -> Option<Coord> {
        let next = self.neighbor(coord, direction)?;
        if (self.is_center(coord) && self.is_center(next)) || self.is_open(coord, direction) {
            Some(next)
        } else {
            None
        }
    }

    /// Removes the wall between `from` and its neighbor in `direction`, on both sides.
    pub fn carve(&mut self, from: Coord, direction: RingDirection) -> bool {
        let Some(to) = self.neighbor(from, direction) else {
            return false;
        };
        self.grid[from].open(direction);
        self.grid[to].open(direction.opposite());
        true
    }

    /// Records a player step onto `coord`.
    pub fn visit(&mut self, coord: Coord) -> u32 {
        let cell = &mut self.grid[coord];
        cell.visits = cell.visits.saturating_add(1);
        cell.visits
    }

    /// Number of open passages between carved-region cells (ring >= center space).
    /// With two sectors the clockwise and counter-clockwise passages count separately.
    pub fn passage_count(&self) -> usize {
        self.coords()
            .filter(|&c| !self.is_center(c))
            .map(|c| {
                [RingDirection::Outer, RingDirection::Clockwise]
                    .into_iter()
                    .filter(|&d| {
                        self.neighbor(c, d).is_some_and(|n| n != c) && self.is_open(c, d)
                    })
                    .count()
            })
            .sum()
    }

    /// Sectors of the first carved ring whose inner wall opens into the center band.
    pub fn center_entrances(&self) -> Vec<u8> {
        if self.center_space == 0 || self.center_space >= self.rings() {
            return Vec::new();
        }
        (0..self.sectors())
            .filter(|&s| self.is_open((self.center_space, s), RingDirection::Inner))
            .collect()
    }
}

impl std::ops::Index<Coord> for RingMaze {
    type Output = RingCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sectors_wrap() {
        let maze = RingMaze::new(4, 6, 1);
        assert_eq!(maze.neighbor((2, 5), RingDirection::Clockwise), Some((2, 0)));
        assert_eq!(
            maze.neighbor((2, 0), RingDirection::CounterClockwise),
            Some((2, 5))
        );
        assert_eq!(maze.neighbor((0, 3), RingDirection::Inner), None);
        assert_eq!(maze.neighbor((3, 3), RingDirection::Outer), None);
    }

    #[test]
    fn test_carve_across_seam() {
        let mut maze = RingMaze::new(3, 4, 0);
        assert!(maze.carve((1, 3), RingDirection::Clockwise));
        assert!(maze[(1, 3)].clockwise);
        assert!(maze[(1, 0)].counter_clockwise);
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn test_center_band_moves_freely() {
        let mut maze = RingMaze::new(4, 8, 2);
        assert!(maze.is_center((1, 0)));
        assert!(!maze.is_center((2, 0)));
        assert_eq!(maze.step((1, 0), RingDirection::Clockwise), Some((1, 1)));
        assert_eq!(maze.step((1, 0), RingDirection::Inner), Some((0, 0)));
        // Leaving the center band needs a carved passage
        assert_eq!(maze.step((1, 0), RingDirection::Outer), None);
        assert_eq!(maze.step((2, 0), RingDirection::Inner), None);
        maze.carve((2, 0), RingDirection::Inner);
        assert_eq!(maze.step((2, 0), RingDirection::Inner), Some((1, 0)));
        assert_eq!(maze.step((1, 0), RingDirection::Outer), Some((2, 0)));
        assert_eq!(maze.center_entrances(), vec![0]);
    }

    #[test]
    fn test_visit_counts() {
        let mut maze = RingMaze::new(3, 3, 1);
        assert_eq!(maze.visit((2, 1)), 1);
        assert_eq!(maze.visit((2, 1)), 2);
        assert_eq!(maze[(2, 1)].visits, 2);
        assert_eq!(maze[(2, 2)].visits, 0);
    }

    #[test]
    fn test_carved_cell_count() {
        assert_eq!(RingMaze::new(8, 36, 2).carved_cell_count(), 6 * 36);
        assert_eq!(RingMaze::new(2, 10, 3).carved_cell_count(), 0);
    }
}

/// Flat row-major storage shared by the grid and ring mazes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: u8,
    cols: u8,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: u8, cols: u8, cell: T) -> Self {
        let data = vec![cell; rows as usize * cols as usize].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Flattened index of `(row, col)`, i.e. `row * cols + col`.
    pub fn ravel_index(&self, coord: (u8, u8)) -> usize {
        // Overflow-safe since both axes are u8 (assuming usize is at least 32 bits)
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    /// Inverse of [`Grid::ravel_index`].
    pub fn unravel_index(&self, index: usize) -> (u8, u8) {
        let cols = self.cols as usize;
        ((index / cols) as u8, (index % cols) as u8)
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u8, u8)> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }
}

impl<T> std::ops::Index<(u8, u8)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<(u8, u8)> for Grid<T> {
    fn index_mut(&mut self, index: (u8, u8)) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

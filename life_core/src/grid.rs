// grid.rs - Grid state for one generation of the Game of Life

use rand::Rng;

use crate::error::LifeError;

/// Cell coordinate as `(x, y)`, with `x` the column and `y` the row.
pub type Coord = (usize, usize);

/// Alive/dead values for every cell of a fixed `width x height` rectangle.
///
/// Cells are stored row-major in a flat buffer (`index = y * width + x`).
/// A grid is never mutated after construction: stepping, seeding and
/// toggling all build a new grid, so the previous generation stays intact
/// for comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GridState {
    /// All-dead grid. Both dimensions must be positive.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {width}x{height}");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a grid from a row-major cell buffer.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Builds a grid whose only live cells are `live`.
    pub fn from_live_cells<I>(width: usize, height: usize, live: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::blank(width, height);
        for coord in live {
            let index = grid.index(coord)?;
            grid.cells[index] = true;
        }
        Ok(grid)
    }

    /// New grid of the same size with every cell alive with probability 0.5.
    ///
    /// Draws exactly one value per cell, in row-major order.
    pub fn seed_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let cells = (0..self.cells.len()).map(|_| rng.gen_bool(0.5)).collect();
        Self::from_cells(self.width, self.height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height
    }

    /// Value of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, LifeError> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Unchecked-by-contract lookup for callers that iterate in bounds.
    #[inline]
    pub(crate) fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Copy of this grid with the cell at `coord` flipped.
    pub fn toggled(&self, coord: Coord) -> Result<Self, LifeError> {
        let index = self.index(coord)?;
        let mut cells = self.cells.clone();
        cells[index] = !cells[index];
        Ok(Self::from_cells(self.width, self.height, cells))
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &alive)| ((i % self.width, i / self.width), alive))
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> &[bool] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, (x, y): Coord) -> Result<usize, LifeError> {
        if self.contains((x, y)) {
            Ok(y * self.width + x)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

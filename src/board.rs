use crate::{get_config, parse_rle, step, GridStorage, LifeError, Result};
use std::fmt;
use tracing::{debug, trace};

/// Game of Life on a resizable rectangular grid with clipped edges.
///
/// The board exclusively owns its cell buffer plus a scratch buffer of the same
/// size that receives each next generation before the two are swapped.
#[derive(Clone, Debug)]
pub struct Board {
    grid: GridStorage,
    scratch: GridStorage,
    generation: u64,
}

impl Board {
    /// Creates a `rows x cols` board with every cell dead.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let board = Self::from_grid(GridStorage::blank(rows, cols)?)?;
        debug!(rows, cols, "created board");
        Ok(board)
    }

    /// Creates a board from nested rows, which must be non-empty and rectangular.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        Self::from_grid(GridStorage::from_rows(rows)?)
    }

    /// Parses an RLE pattern; the board gets exactly the size from its header.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        Self::from_grid(parse_rle(data)?)
    }

    /// Creates a board with random cells, see [`Board::randomize`].
    pub fn random(
        rows: i64,
        cols: i64,
        seed: Option<u64>,
        fill_rate: Option<f64>,
    ) -> Result<Self> {
        let mut board = Self::new(rows, cols)?;
        board.randomize(seed, fill_rate)?;
        Ok(board)
    }

    fn from_grid(grid: GridStorage) -> Result<Self> {
        let scratch = GridStorage::blank(grid.rows() as i64, grid.cols() as i64)?;
        Ok(Self {
            grid,
            scratch,
            generation: 0,
        })
    }

    /// Number of rows.
    pub fn get_m(&self) -> i64 {
        self.grid.rows() as i64
    }

    /// Number of columns.
    pub fn get_n(&self) -> i64 {
        self.grid.cols() as i64
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn get_cell(&self, i: i64, j: i64) -> Result<bool> {
        Ok(self.grid.at(self.grid.index(i, j)?))
    }

    pub fn set_cell(&mut self, i: i64, j: i64, value: bool) -> Result<()> {
        let offset = self.grid.index(i, j)?;
        *self.grid.at_mut(offset) = value;
        Ok(())
    }

    pub fn toggle_cell(&mut self, i: i64, j: i64) -> Result<()> {
        let offset = self.grid.index(i, j)?;
        let cell = self.grid.at_mut(offset);
        *cell = !*cell;
        Ok(())
    }

    /// Advances the board by one generation.
    pub fn iterate_once(&mut self) {
        step(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "iterated board");
    }

    /// Advances the board by `generations` generations.
    pub fn iterate(&mut self, generations: u64) {
        for _ in 0..generations {
            self.iterate_once();
        }
    }

    /// Changes the dimensions, keeping the cells of the overlapping region.
    ///
    /// Cells cut off by shrinking are gone for good; growing back yields dead
    /// cells. On error the board is left exactly as it was.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<()> {
        if (rows, cols) == (self.get_m(), self.get_n()) {
            return Ok(());
        }
        let grid = self.grid.resized(rows, cols)?;
        let scratch = GridStorage::blank(rows, cols)?;
        debug!(
            old_rows = self.grid.rows(),
            old_cols = self.grid.cols(),
            rows,
            cols,
            "resized board"
        );
        self.grid = grid;
        self.scratch = scratch;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Fills the board with random cells.
    ///
    /// `seed` - random seed (if `None`, the configured default seed)
    ///
    /// `fill_rate` - probability of a cell being alive (if `None`, the configured default);
    /// must lie in `[0, 1]`, otherwise the board is left untouched
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: Option<f64>) -> Result<()> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let config = get_config();
        let fill_rate = fill_rate.unwrap_or(config.default_fill_rate);
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(LifeError::FillRate(fill_rate));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(config.default_seed));
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self.grid.set(i, j, rng.gen_bool(fill_rate));
            }
        }
        Ok(())
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Generations computed since the board was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major copy of all cells.
    pub fn cells(&self) -> Vec<bool> {
        self.grid.cells().to_vec()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.grid
            .cells()
            .chunks_exact(self.cols())
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl fmt::Display for Board {
    /// One line per row, cells as space separated `0`/`1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.cells().chunks_exact(self.cols()) {
            for (j, &cell) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

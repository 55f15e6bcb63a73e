use crate::{get_config, CellGrid, LifeError, Result};

/// Flat row-major cell buffer together with its dimensions.
///
/// `cells.len() == rows * cols` and both dimensions are positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridStorage {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl GridStorage {
    /// Creates a grid with every cell dead.
    pub fn blank(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = checked_dimensions(rows, cols)?;
        Ok(Self {
            cells: allocate(rows, cols)?,
            rows,
            cols,
        })
    }

    /// Copies an arbitrary grid into a freshly allocated buffer.
    pub fn copy_of<G: CellGrid + ?Sized>(src: &G) -> Result<Self> {
        let (rows, cols) = src.size();
        let mut result = Self::blank(rows as i64, cols as i64)?;
        for i in 0..rows {
            for j in 0..cols {
                result.set(i, j, src.get(i, j));
            }
        }
        Ok(result)
    }

    /// Builds a grid from nested rows, which must be non-empty and rectangular.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        check_rectangular(rows)?;
        Self::copy_of(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Linear offset of `(i, j)`, or `IndexError` when it lies outside the grid.
    pub fn index(&self, i: i64, j: i64) -> Result<usize> {
        let out_of_bounds = || LifeError::Index {
            i,
            j,
            rows: self.rows,
            cols: self.cols,
        };
        let y = usize::try_from(i)
            .ok()
            .filter(|&y| y < self.rows)
            .ok_or_else(out_of_bounds)?;
        let x = usize::try_from(j)
            .ok()
            .filter(|&x| x < self.cols)
            .ok_or_else(out_of_bounds)?;
        Ok(x + y * self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[j + i * self.cols]
    }

    pub fn set(&mut self, i: usize, j: usize, state: bool) {
        self.cells[j + i * self.cols] = state;
    }

    pub fn at(&self, offset: usize) -> bool {
        self.cells[offset]
    }

    pub fn at_mut(&mut self, offset: usize) -> &mut bool {
        &mut self.cells[offset]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(super) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl CellGrid for GridStorage {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, i: usize, j: usize) -> bool {
        GridStorage::get(self, i, j)
    }

    fn set(&mut self, i: usize, j: usize, state: bool) {
        GridStorage::set(self, i, j, state)
    }
}

fn checked_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
    if rows <= 0 || cols <= 0 {
        return Err(LifeError::InvalidDimension { rows, cols });
    }
    let cells = rows as u128 * cols as u128;
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(rows), Ok(cols)) => Ok((rows, cols)),
        _ => Err(LifeError::Allocation { cells }),
    }
}

pub(crate) fn check_rectangular(rows: &[Vec<bool>]) -> Result<()> {
    let expected = rows.first().map_or(0, Vec::len);
    if expected == 0 {
        return Err(LifeError::InvalidDimension {
            rows: rows.len() as i64,
            cols: expected as i64,
        });
    }
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(LifeError::RaggedGrid {
            row,
            expected,
            found: rows[row].len(),
        }),
        None => Ok(()),
    }
}

/// Zero-filled buffer of `rows * cols` cells; never aborts on allocation failure.
fn allocate(rows: usize, cols: usize) -> Result<Vec<bool>> {
    let cells = rows as u128 * cols as u128;
    if cells > get_config().max_cells() {
        return Err(LifeError::Allocation { cells });
    }
    let len = usize::try_from(cells).map_err(|_| LifeError::Allocation { cells })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| LifeError::Allocation { cells })?;
    buffer.resize(len, false);
    Ok(buffer)
}

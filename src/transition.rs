use crate::{grid::check_rectangular, GridStorage, Result};

/// Read/write access to a rectangular grid of cells addressed by `(row, column)`.
pub trait CellGrid {
    /// `(rows, cols)`
    fn size(&self) -> (usize, usize);

    fn get(&self, i: usize, j: usize) -> bool;

    fn set(&mut self, i: usize, j: usize, state: bool);
}

impl CellGrid for [Vec<bool>] {
    fn size(&self) -> (usize, usize) {
        (self.len(), self.first().map_or(0, Vec::len))
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self[i][j]
    }

    fn set(&mut self, i: usize, j: usize, state: bool) {
        self[i][j] = state;
    }
}

/// B3/S23
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Number of live cells among the up to 8 neighbors of `(i, j)`.
///
/// Cells beyond the edges do not exist: there is no wraparound.
///
/// # Panics
///
/// If the grid is empty or `(i, j)` lies outside it.
pub fn live_neighbors<G: CellGrid + ?Sized>(grid: &G, i: usize, j: usize) -> u8 {
    let (rows, cols) = grid.size();
    let (y1, y2) = (i.saturating_sub(1), (i + 1).min(rows - 1));
    let (x1, x2) = (j.saturating_sub(1), (j + 1).min(cols - 1));
    let mut count = 0;
    for y in y1..=y2 {
        for x in x1..=x2 {
            if (y, x) != (i, j) && grid.get(y, x) {
                count += 1;
            }
        }
    }
    count
}

/// Writes the generation following `src` into `dst`.
///
/// `src` is only read and `dst` only written, so no cell ever sees a
/// neighbor's next state.
///
/// # Panics
///
/// If the two grids differ in size or either one is ragged; use
/// [`iterate_once`] for nested grids that have not been validated.
pub fn step<S, D>(src: &S, dst: &mut D)
where
    S: CellGrid + ?Sized,
    D: CellGrid + ?Sized,
{
    assert_eq!(src.size(), dst.size());
    let (rows, cols) = src.size();
    for i in 0..rows {
        for j in 0..cols {
            let next = next_state(src.get(i, j), live_neighbors(src, i, j));
            dst.set(i, j, next);
        }
    }
}

/// Advances a nested grid by one generation in place.
///
/// The grid must be non-empty and rectangular; otherwise it is left untouched.
pub fn iterate_once(grid: &mut [Vec<bool>]) -> Result<()> {
    check_rectangular(grid)?;
    let snapshot = GridStorage::copy_of(&*grid)?;
    step(&snapshot, grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifeError;

    fn parse(picture: &[&str]) -> Vec<Vec<bool>> {
        picture
            .iter()
            .map(|row| row.bytes().map(|c| c == b'#').collect())
            .collect()
    }

    #[test]
    fn test_next_state() {
        for neighbors in 0..=8 {
            assert_eq!(next_state(true, neighbors), neighbors == 2 || neighbors == 3);
            assert_eq!(next_state(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn test_neighbors_are_clipped() {
        let full = vec![vec![true; 4]; 4];
        let full = full.as_slice();
        assert_eq!(live_neighbors(full, 0, 0), 3);
        assert_eq!(live_neighbors(full, 3, 3), 3);
        assert_eq!(live_neighbors(full, 0, 3), 3);
        assert_eq!(live_neighbors(full, 0, 1), 5);
        assert_eq!(live_neighbors(full, 2, 0), 5);
        assert_eq!(live_neighbors(full, 1, 2), 8);

        let single = vec![vec![true]];
        assert_eq!(live_neighbors(single.as_slice(), 0, 0), 0);
    }

    #[test]
    fn test_no_wraparound() {
        // a torus would see three neighbors at the opposite edge and give birth there
        let mut grid = parse(&["....#", "....#", "....#", "....."]);
        iterate_once(&mut grid).unwrap();
        assert_eq!(grid, parse(&[".....", "...##", ".....", "....."]));
    }

    #[test]
    fn test_blinker() {
        let mut grid = parse(&[".....", "..#..", "..#..", "..#..", "....."]);
        iterate_once(&mut grid).unwrap();
        assert_eq!(grid, parse(&[".....", ".....", ".###.", ".....", "....."]));
        iterate_once(&mut grid).unwrap();
        assert_eq!(grid, parse(&[".....", "..#..", "..#..", "..#..", "....."]));
    }

    #[test]
    fn test_block_in_corner() {
        let block = parse(&["##.", "##.", "..."]);
        let mut grid = block.clone();
        iterate_once(&mut grid).unwrap();
        assert_eq!(grid, block);
    }

    #[test]
    fn test_step_between_representations() {
        let nested = parse(&[".#..", "..#.", "###.", "...."]);
        let src = GridStorage::from_rows(&nested).unwrap();
        let mut dst = GridStorage::blank(4, 4).unwrap();
        step(&src, &mut dst);

        let mut expected = nested.clone();
        iterate_once(&mut expected).unwrap();
        assert_eq!(dst, GridStorage::from_rows(&expected).unwrap());
    }

    #[test]
    #[should_panic]
    fn test_step_size_mismatch() {
        let src = GridStorage::blank(3, 3).unwrap();
        let mut dst = GridStorage::blank(3, 4).unwrap();
        step(&src, &mut dst);
    }

    #[test]
    fn test_invalid_nested_grids() {
        let mut empty: Vec<Vec<bool>> = vec![];
        assert_eq!(
            iterate_once(&mut empty),
            Err(LifeError::InvalidDimension { rows: 0, cols: 0 })
        );

        let mut ragged = parse(&["###", "##", "###"]);
        let before = ragged.clone();
        assert_eq!(
            iterate_once(&mut ragged),
            Err(LifeError::RaggedGrid {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(ragged, before);
    }
}

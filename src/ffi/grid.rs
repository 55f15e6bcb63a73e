use super::status::{guard, LifeStatus};
use crate::{step, CellGrid, GridStorage, LifeError};
use std::slice;

/// Host-owned grid given as an array of row pointers, one byte per cell.
struct HostGrid<'a> {
    rows: &'a [*mut u8],
    cols: usize,
}

impl CellGrid for HostGrid<'_> {
    fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.cols)
    }

    fn get(&self, i: usize, j: usize) -> bool {
        assert!(j < self.cols);
        unsafe { *self.rows[i].add(j) != 0 }
    }

    fn set(&mut self, i: usize, j: usize, state: bool) {
        assert!(j < self.cols);
        unsafe { *self.rows[i].add(j) = state as u8 }
    }
}

/// Advances a host-owned `m x n` grid by one generation in place.
///
/// `rows` points to `m` row pointers, each addressing `n` bytes. A nonzero
/// byte is a live cell; the result is written back as 0/1. On failure the
/// grid is not touched.
///
/// # Safety
///
/// `rows` must be null or valid for reading `m` pointers, and every non-null
/// row pointer must be valid for reads and writes of `n` bytes that no one
/// else accesses during the call.
#[no_mangle]
pub unsafe extern "C" fn life_iterate_once(rows: *const *mut u8, m: i64, n: i64) -> LifeStatus {
    guard(|| {
        if rows.is_null() {
            return Err(LifeError::NullPointer);
        }
        if m <= 0 || n <= 0 {
            return Err(LifeError::InvalidDimension { rows: m, cols: n });
        }
        let (m, n) = match (usize::try_from(m), usize::try_from(n)) {
            (Ok(m), Ok(n)) => (m, n),
            _ => {
                return Err(LifeError::Allocation {
                    cells: m as u128 * n as u128,
                })
            }
        };
        let rows = unsafe { slice::from_raw_parts(rows, m) };
        if rows.iter().any(|row| row.is_null()) {
            return Err(LifeError::NullPointer);
        }
        let mut grid = HostGrid { rows, cols: n };
        let snapshot = GridStorage::copy_of(&grid)?;
        step(&snapshot, &mut grid);
        Ok(())
    })
}

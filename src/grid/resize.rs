use super::GridStorage;
use crate::Result;

impl GridStorage {
    /// Returns a `new_rows x new_cols` copy of the grid.
    ///
    /// The overlapping top-left rectangle keeps its cells at the same
    /// coordinates, new cells are dead and cells outside the new bounds are
    /// dropped. `self` is never modified, so a failure leaves it intact.
    pub fn resized(&self, new_rows: i64, new_cols: i64) -> Result<GridStorage> {
        let mut result = GridStorage::blank(new_rows, new_cols)?;
        let (rows, cols) = (self.rows().min(result.rows()), self.cols().min(result.cols()));
        let (src_cols, dst_cols) = (self.cols(), result.cols());
        let dst = result.cells_mut();
        for i in 0..rows {
            dst[i * dst_cols..i * dst_cols + cols]
                .copy_from_slice(&self.cells()[i * src_cols..i * src_cols + cols]);
        }
        Ok(result)
    }
}

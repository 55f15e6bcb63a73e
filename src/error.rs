/// Every way an operation on a board can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    #[error("Index ({i}, {j}) out of bounds for a {rows}x{cols} board")]
    Index { i: i64, j: i64, rows: usize, cols: usize },

    #[error("Board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },

    #[error("Failed to allocate a board of {cells} cells")]
    Allocation { cells: u128 },

    #[error("Cell value must be 0 or 1, got {0}")]
    InvalidValue(i64),

    #[error("Fill rate must lie in [0, 1], got {0}")]
    FillRate(f64),

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed RLE: {0}")]
    Rle(String),

    #[error("Null pointer passed across the FFI boundary")]
    NullPointer,
}

pub type Result<T> = std::result::Result<T, LifeError>;

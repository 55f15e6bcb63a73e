#![warn(clippy::all)]

mod board;
mod error;
pub mod ffi;
mod grid;
mod transition;
mod utils;

pub use board::Board;
pub use error::{LifeError, Result};
pub use grid::GridStorage;
pub use transition::{iterate_once, live_neighbors, next_state, step, CellGrid};
pub use utils::{
    get_config, parse_rle, set_default_fill_rate, set_default_seed, set_max_cells_log2,
    ConfigSnapshot,
};

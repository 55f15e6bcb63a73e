//! C ABI for scripting hosts (Python `ctypes`/`cffi`, LuaJIT FFI and the like).
//!
//! The logic lives in [`Board`](crate::Board) and the shared transition step. These
//! functions are thin wrappers that handle null checks, integer conversions and
//! the translation of [`LifeError`](crate::LifeError) into [`LifeStatus`] codes.
//!
//! A board handle comes from `life_board_new` and is released exactly once by
//! `life_board_free`; the cell buffer itself never leaves the library.

mod board;
mod grid;
mod status;

pub use board::{
    life_board_free, life_board_get_cell, life_board_get_m, life_board_get_n,
    life_board_iterate_once, life_board_new, life_board_resize, life_board_set_cell,
    life_board_toggle_cell, LifeBoard,
};
pub use grid::life_iterate_once;
pub use status::{life_last_error_length, life_last_error_message, LifeStatus};

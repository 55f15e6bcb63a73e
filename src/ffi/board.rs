use super::status::{guard, record, LifeStatus};
use crate::{Board, LifeError, Result};
use std::ptr;

/// Opaque board handle handed out to the host.
pub type LifeBoard = Board;

unsafe fn board_ref<'a>(board: *const LifeBoard) -> Result<&'a LifeBoard> {
    unsafe { board.as_ref() }.ok_or(LifeError::NullPointer)
}

unsafe fn board_mut<'a>(board: *mut LifeBoard) -> Result<&'a mut LifeBoard> {
    unsafe { board.as_mut() }.ok_or(LifeError::NullPointer)
}

/// Creates a `rows x cols` board with every cell dead.
///
/// Returns null on failure; the reason is available via `life_last_error_message`.
/// The handle must be released with `life_board_free`.
#[no_mangle]
pub extern "C" fn life_board_new(rows: i64, cols: i64) -> *mut LifeBoard {
    let mut handle = ptr::null_mut();
    guard(|| {
        handle = Box::into_raw(Box::new(Board::new(rows, cols)?));
        Ok(())
    });
    handle
}

/// Releases a board. Null is ignored.
///
/// # Safety
///
/// `board` must be null or a handle from `life_board_new` that was not freed yet.
#[no_mangle]
pub unsafe extern "C" fn life_board_free(board: *mut LifeBoard) {
    if !board.is_null() {
        drop(unsafe { Box::from_raw(board) });
    }
}

/// Number of rows, or -1 for a null handle.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_get_m(board: *const LifeBoard) -> i64 {
    match unsafe { board_ref(board) } {
        Ok(board) => board.get_m(),
        Err(err) => {
            record(&err);
            -1
        }
    }
}

/// Number of columns, or -1 for a null handle.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_get_n(board: *const LifeBoard) -> i64 {
    match unsafe { board_ref(board) } {
        Ok(board) => board.get_n(),
        Err(err) => {
            record(&err);
            -1
        }
    }
}

/// Stores the state of cell `(i, j)` into `out`.
///
/// # Safety
///
/// `board` must be null or a live handle; `out` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn life_board_get_cell(
    board: *const LifeBoard,
    i: i64,
    j: i64,
    out: *mut bool,
) -> LifeStatus {
    guard(|| {
        let board = unsafe { board_ref(board) }?;
        let out = unsafe { out.as_mut() }.ok_or(LifeError::NullPointer)?;
        *out = board.get_cell(i, j)?;
        Ok(())
    })
}

/// Sets cell `(i, j)`; `value` must be 0 or 1.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_set_cell(
    board: *mut LifeBoard,
    i: i64,
    j: i64,
    value: i32,
) -> LifeStatus {
    guard(|| {
        let board = unsafe { board_mut(board) }?;
        let value = match value {
            0 => false,
            1 => true,
            other => return Err(LifeError::InvalidValue(other.into())),
        };
        board.set_cell(i, j, value)
    })
}

/// Flips cell `(i, j)`.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_toggle_cell(
    board: *mut LifeBoard,
    i: i64,
    j: i64,
) -> LifeStatus {
    guard(|| unsafe { board_mut(board) }?.toggle_cell(i, j))
}

/// Resizes the board, keeping the overlapping cells.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_resize(
    board: *mut LifeBoard,
    rows: i64,
    cols: i64,
) -> LifeStatus {
    guard(|| unsafe { board_mut(board) }?.resize(rows, cols))
}

/// Advances the board by one generation.
///
/// # Safety
///
/// `board` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn life_board_iterate_once(board: *mut LifeBoard) -> LifeStatus {
    guard(|| {
        unsafe { board_mut(board) }?.iterate_once();
        Ok(())
    })
}

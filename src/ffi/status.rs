use crate::{LifeError, Result};
use std::cell::RefCell;
use std::ffi::c_char;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Outcome of an FFI call. Hosts map every non-`Ok` code onto their own
/// exception type (`IndexError`, `ValueError`, `MemoryError`, `TypeError`,
/// `RuntimeError`), taking the text from `life_last_error_message`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    Ok = 0,
    IndexError = 1,
    InvalidDimension = 2,
    AllocationFailure = 3,
    InvalidValue = 4,
    NullPointer = 5,
    Panic = 6,
}

impl From<&LifeError> for LifeStatus {
    fn from(err: &LifeError) -> Self {
        match err {
            LifeError::Index { .. } => LifeStatus::IndexError,
            LifeError::InvalidDimension { .. } | LifeError::RaggedGrid { .. } => {
                LifeStatus::InvalidDimension
            }
            LifeError::Allocation { .. } => LifeStatus::AllocationFailure,
            LifeError::InvalidValue(_) | LifeError::FillRate(_) | LifeError::Rle(_) => {
                LifeStatus::InvalidValue
            }
            LifeError::NullPointer => LifeStatus::NullPointer,
        }
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(message: Option<String>) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

pub(super) fn record(err: &LifeError) -> LifeStatus {
    let status = LifeStatus::from(err);
    warn!(?status, "{}", err);
    set_last_error(Some(err.to_string()));
    status
}

/// Runs `f`, turning its error or panic into a status and the last error message.
pub(super) fn guard<F: FnOnce() -> Result<()>>(f: F) -> LifeStatus {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => {
            set_last_error(None);
            LifeStatus::Ok
        }
        Ok(Err(err)) => record(&err),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(%reason, "panic caught at the FFI boundary");
            set_last_error(Some(format!("Internal error: {}", reason)));
            LifeStatus::Panic
        }
    }
}

/// Length in bytes of the last error message on this thread, 0 if the last call succeeded.
#[no_mangle]
pub extern "C" fn life_last_error_length() -> usize {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map_or(0, String::len))
}

/// Copies the last error message of this thread into `buf` as a NUL-terminated
/// string, truncated to `len - 1` bytes.
///
/// Returns the number of bytes written, not counting the terminator.
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn life_last_error_message(buf: *mut c_char, len: usize) -> usize {
    if buf.is_null() || len == 0 {
        return 0;
    }
    LAST_ERROR.with(|slot| {
        let slot = slot.borrow();
        let message = slot.as_deref().unwrap_or("").as_bytes();
        let n = message.len().min(len - 1);
        unsafe {
            std::ptr::copy_nonoverlapping(message.as_ptr(), buf.cast::<u8>(), n);
            *buf.add(n) = 0;
        }
        n
    })
}

mod resize;
mod storage;

pub use storage::GridStorage;

pub(crate) use storage::check_rectangular;

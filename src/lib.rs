pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod stroke;
pub mod viewport;

pub use error::{EraseAbort, InkcutError, Result};

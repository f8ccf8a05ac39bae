pub mod erase;
mod region_erase;

pub use erase::{EraseFragment, EraseOutcome, EraseParams};
pub use region_erase::RegionErase;

pub mod path;
pub mod rect;
pub mod segment;

pub use path::{CurveLocation, IntersectionPoint, Path, PathCommand};
pub use rect::Rect2;
pub use segment::Segment;

use crate::geometry::path::merge_intersections;
use crate::geometry::{IntersectionPoint, Path};

/// All crossings of `path` with the edges of the eraser polyline, sorted
/// along `path`.
///
/// Hits found on two adjacent eraser edges at a shared vertex are merged, so
/// each location on `path` is reported once.
pub(super) fn collect(path: &Path, eraser: &Path) -> Vec<IntersectionPoint> {
    let mut hits: Vec<IntersectionPoint> = eraser
        .segments()
        .flat_map(|edge| path.intersection(&edge.start(), &edge.end()))
        .collect();
    merge_intersections(&mut hits);
    hits
}

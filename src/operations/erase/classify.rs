use crate::geometry::{CurveLocation, Path};
use crate::math::Point2;
use crate::stroke::StrokePart;

use super::EraseContext;

/// Sample point deciding whether a fragment with no crossings lies inside
/// the eraser: the bounding box center for fills, a point on the path for
/// outlines.
pub(super) fn representative_point(part: &StrokePart) -> Point2 {
    if part.is_filled() {
        part.path.exact_bbox().center()
    } else {
        part.path.representative_point()
    }
}

/// Whether a fragment with no crossings lies inside the eraser.
///
/// A fill also needs its own start point inside: without crossings its
/// boundary is wholly on one side, so an eraser sitting inside the fill
/// leaves it whole.
pub(super) fn inside_eraser(ctx: &EraseContext<'_>, part: &StrokePart) -> bool {
    if !ctx.eraser_contains(&representative_point(part)) {
        return false;
    }
    !part.is_filled() || ctx.eraser_contains(&part.path.start_point())
}

/// Where the eraser boundary passes a crossing point.
#[derive(Debug, Clone, Copy)]
pub(super) struct EraserAnchor {
    /// Location on the eraser nearest to the crossing.
    pub location: CurveLocation,
    /// Whether walking forward along the eraser from here enters the region.
    pub enters: bool,
}

/// Anchors `point` on the eraser and samples a short distance along the
/// eraser's direction to see which side of the crossing lies in `region`.
pub(super) fn anchor_on_eraser(ctx: &EraseContext<'_>, region: &Path, point: &Point2) -> EraserAnchor {
    let (nearest, _) = ctx.eraser.nearest_point_to(point);
    let location = ctx.eraser.normalize_location(nearest);
    let anchor = ctx.eraser.point_at(location);
    let distance = ctx.params.tangent_sample_pixels * ctx.pixel_size;
    let enters = ctx
        .eraser
        .tangent_at(location)
        .is_some_and(|tangent| region.closed_contains_point(&(anchor + tangent * distance)));
    EraserAnchor { location, enters }
}

/// Which eraser span replaces the erased part of a filled boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CutDirection {
    /// Along the eraser from the first anchor to the second.
    Forward,
    /// Along the eraser from the second anchor to the first, then reversed.
    Backward,
    /// Both or neither anchor enters the region.
    Ambiguous,
}

pub(super) fn cut_direction(first: &EraserAnchor, second: &EraserAnchor) -> CutDirection {
    match (first.enters, second.enters) {
        (true, false) => CutDirection::Forward,
        (false, true) => CutDirection::Backward,
        _ => CutDirection::Ambiguous,
    }
}

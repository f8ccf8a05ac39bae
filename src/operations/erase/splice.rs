use tracing::trace;

use crate::geometry::{IntersectionPoint, Path};

use super::classify::{self, CutDirection};
use super::outcome::Collector;
use super::EraseContext;

/// Erases a filled region crossed exactly twice by the eraser boundary.
///
/// The part of the fill boundary inside the eraser is replaced by the span
/// of the eraser boundary that runs through the fill, leaving one closed
/// fragment.
pub(super) fn erase(
    ctx: &EraseContext<'_>,
    fill: &Path,
    hits: &[IntersectionPoint],
    collector: &mut Collector<'_>,
) {
    let [mut first, mut second] = [hits[0], hits[1]];
    // The removed span is the forward one from `first` to `second`; it must
    // be the span holding the start point when the start is erased.
    if ctx.eraser_contains(&fill.start_point()) {
        std::mem::swap(&mut first, &mut second);
    }

    let anchor_first = classify::anchor_on_eraser(ctx, fill, &first.point);
    let anchor_second = classify::anchor_on_eraser(ctx, fill, &second.point);
    let direction = classify::cut_direction(&anchor_first, &anchor_second);

    let forward = || {
        ctx.eraser
            .sub_path(anchor_first.location, anchor_second.location, ctx.round_point)
    };
    let backward = || {
        ctx.eraser
            .sub_path(anchor_second.location, anchor_first.location, ctx.round_point)
            .reversed()
    };
    let cut = match direction {
        CutDirection::Forward => forward(),
        CutDirection::Backward => backward(),
        CutDirection::Ambiguous => {
            // The cut must run through the fill; test the middle of the
            // forward span instead of the tangent samples.
            let span = forward();
            let through_fill = fill.closed_contains_point(&span.representative_point());
            trace!(through_fill, "eraser direction through fill is ambiguous");
            if through_fill {
                span
            } else {
                backward()
            }
        }
    }
    .map_points(ctx.round_point);

    let remainder = fill.spliced(first.location, second.location, Some(&cut), ctx.round_point);
    let removed = fill
        .sub_path(first.location, second.location, ctx.round_point)
        .union(&cut.reversed());

    collector.discard(&removed);
    collector.keep(remainder);
}

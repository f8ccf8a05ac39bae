use crate::error::EraseAbort;
use crate::geometry::{CurveLocation, IntersectionPoint, Path, Rect2, Segment};
use crate::math::Point2;

use super::outcome::Collector;
use super::EraseContext;

/// Subtracts the eraser from a filled region with many crossings.
///
/// Both boundaries are split at the crossings. Fill pieces outside the
/// eraser and eraser pieces inside the fill form the new boundary; eraser
/// pieces run against the fill's orientation. The kept pieces are then
/// stitched end to start into closed loops.
pub(super) fn erase(
    ctx: &EraseContext<'_>,
    fill: &Path,
    hits: &[IntersectionPoint],
    collector: &mut Collector<'_>,
) {
    let fill_locations: Vec<CurveLocation> = hits.iter().map(|hit| hit.location).collect();
    let eraser_locations: Vec<CurveLocation> = hits
        .iter()
        .map(|hit| ctx.eraser.nearest_point_to(&hit.point).0)
        .collect();

    let same_orientation = fill.signed_area() * ctx.eraser.signed_area() > 0.0;
    let mut boundary = Vec::new();
    let mut removed: Option<Rect2> = None;
    let mut note_removed = |piece: &Path| {
        let bbox = piece.exact_bbox();
        removed = Some(removed.map_or(bbox, |r| r.union(&bbox)));
    };

    for piece in loop_pieces(fill, &fill_locations, ctx.round_point) {
        if ctx.eraser_contains(&piece.representative_point()) {
            note_removed(&piece);
        } else {
            boundary.push(piece);
        }
    }
    for piece in loop_pieces(ctx.eraser, &eraser_locations, ctx.round_point) {
        if fill.closed_contains_point(&piece.representative_point()) {
            note_removed(&piece);
            let piece = piece.map_points(ctx.round_point);
            boundary.push(if same_orientation {
                piece.reversed()
            } else {
                piece
            });
        }
    }

    if let Some(region) = removed {
        collector.discard_extent(region.max_dimension());
    }
    match stitch(&boundary, ctx.stitch_tolerance()) {
        Some(loops) => {
            for closed in loops {
                collector.keep(closed);
            }
        }
        None => collector.abort(EraseAbort::DegenerateGeometry),
    }
}

/// Splits a closed path at `locations`, rejoining the pieces on either side
/// of the start point. Empty pieces are dropped.
fn loop_pieces(
    path: &Path,
    locations: &[CurveLocation],
    map_point: &dyn Fn(Point2) -> Point2,
) -> Vec<Path> {
    let mut pieces = path.split_at(locations, map_point);
    if pieces.len() > 1 {
        if let Some(last) = pieces.pop() {
            pieces[0] = last.concatenated(&pieces[0]);
        }
    }
    pieces.retain(|piece| piece.command_count() > 0);
    pieces
}

/// Chains pieces end to start into closed loops.
///
/// Each step takes the unused piece whose start is nearest the current end
/// within `tolerance`. Returns `None` if a chain cannot be closed.
fn stitch(pieces: &[Path], tolerance: f64) -> Option<Vec<Path>> {
    let n = pieces.len();
    let mut used = vec![false; n];
    let mut loops = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let origin = pieces[start].start_point();
        let mut end = pieces[start].end_point();
        let mut segments: Vec<Segment> = pieces[start].segments().collect();

        while (end - origin).norm() > tolerance {
            let (next, _) = (0..n)
                .filter(|&candidate| !used[candidate])
                .map(|candidate| (candidate, (pieces[candidate].start_point() - end).norm()))
                .filter(|&(_, dist)| dist <= tolerance)
                .min_by(|a, b| a.1.total_cmp(&b.1))?;
            used[next] = true;
            segments.extend(pieces[next].segments());
            end = pieces[next].end_point();
        }
        loops.push(Path::from_segments(origin, &segments).as_closed());
    }
    Some(loops)
}

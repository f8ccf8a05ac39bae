use crate::error::EraseAbort;
use crate::geometry::{CurveLocation, IntersectionPoint, Path};

use super::outcome::Collector;
use super::sequence::parity_at;
use super::EraseContext;

/// Erases an outline stroke by cutting it at every crossing.
///
/// Pieces alternate between outside and inside the eraser. Each piece's
/// midpoint must agree with that alternation; a disagreement means a
/// tangential touch was counted as a crossing, and the erase is abandoned.
/// Pieces outside the eraser survive as separate open paths, except that
/// the two pieces meeting at a closed outline's start are rejoined.
pub(super) fn erase(
    ctx: &EraseContext<'_>,
    path: &Path,
    hits: &[IntersectionPoint],
    collector: &mut Collector<'_>,
) {
    let locations: Vec<CurveLocation> = hits.iter().map(|hit| hit.location).collect();
    let mut pieces = path.split_at(&locations, ctx.round_point);
    if path.is_closed() && pieces.len() > 1 {
        if let Some(last) = pieces.pop() {
            pieces[0] = last.concatenated(&pieces[0]);
        }
    }

    // A crossing right at the start leaves an empty first piece and puts
    // the start point on the eraser boundary.
    let starts_on_crossing = locations
        .first()
        .is_some_and(|loc| *loc == CurveLocation::new(0, 0.0));
    pieces.retain(|piece| piece.command_count() > 0);
    let Some(first) = pieces.first() else {
        return;
    };
    let seed = if starts_on_crossing {
        ctx.eraser_contains(&first.representative_point())
    } else {
        ctx.eraser_contains(&path.start_point())
    };

    for (k, piece) in pieces.iter().enumerate() {
        let inside = parity_at(seed, k);
        if ctx.eraser_contains(&piece.representative_point()) != inside {
            collector.abort(EraseAbort::AmbiguousCrossing);
            return;
        }
        if inside {
            collector.discard(piece);
        } else {
            collector.keep(piece.clone());
        }
    }
}

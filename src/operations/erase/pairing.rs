use crate::geometry::{CurveLocation, IntersectionPoint, Path};

use super::outcome::Collector;
use super::sequence::{mirrored_pairs, parity_at};
use super::EraseContext;

/// Erases a filled region crossed a small number of times by pairing the
/// boundary pieces from both ends inwards.
///
/// Splitting at `n` crossings gives `n + 1` pieces; piece `i` is closed up
/// with piece `n - i`, and an odd middle piece closes on itself. The
/// resulting fragments alternate between outside and inside the eraser,
/// starting from the side the fill's start point lies on.
pub(super) fn erase(
    ctx: &EraseContext<'_>,
    fill: &Path,
    hits: &[IntersectionPoint],
    collector: &mut Collector<'_>,
) {
    let locations: Vec<CurveLocation> = hits.iter().map(|hit| hit.location).collect();
    let pieces = fill.split_at(&locations, ctx.round_point);
    let seed = ctx.eraser_contains(&fill.start_point());

    let (pairs, middle) = mirrored_pairs(pieces.len());
    let fragments = pairs
        .iter()
        .map(|&(i, j)| pieces[i].union(&pieces[j]))
        .chain(middle.map(|m| pieces[m].as_closed()));

    for (k, fragment) in fragments.enumerate() {
        if parity_at(seed, k) {
            collector.discard(&fragment);
        } else {
            collector.keep(fragment);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::erase::{intersect, EraseParams};
    use crate::stroke::{Color, Style, StrokePart};
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn identity(point: Point2) -> Point2 {
        point
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
        Path::from_points(&[p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)], true).unwrap()
    }

    #[test]
    fn band_splits_square_in_two() {
        let fill = rect(0.0, 0.0, 10.0, 10.0);
        let eraser = rect(-5.0, 4.0, 15.0, 6.0);
        let params = EraseParams::default();
        let ctx = EraseContext {
            eraser: &eraser,
            round_point: &identity,
            pixel_size: 1.0,
            params: &params,
        };
        let source = StrokePart::new(fill.clone(), Style::fill(Color::BLACK));
        let hits = intersect::collect(&fill, &eraser);
        assert_eq!(hits.len(), 4);

        let mut collector = Collector::new(&source);
        erase(&ctx, &fill, &hits, &mut collector);
        let outcome = collector.finish(eraser.exact_bbox().max_dimension(), params.safety_ratio);
        assert!(!outcome.aborted());
        assert_eq!(outcome.fragments.len(), 2);

        let total: f64 = outcome.fragments.iter().map(|f| f.path.area()).sum();
        assert_abs_diff_eq!(total, 80.0, epsilon = 1e-9);
        for fragment in &outcome.fragments {
            assert!(fragment.path.is_closed());
            assert_abs_diff_eq!(fragment.path.area(), 40.0, epsilon = 1e-9);
            assert!(!fragment.path.closed_contains_point(&p(5.0, 5.0)));
        }
    }

    #[test]
    fn band_over_start_point_discards_pair_through_start() {
        // Start (0, 0) lies inside the eraser band along the bottom edge.
        let fill = rect(0.0, 0.0, 10.0, 10.0);
        let eraser = rect(-5.0, -2.0, 15.0, 2.0);
        let params = EraseParams::default();
        let ctx = EraseContext {
            eraser: &eraser,
            round_point: &identity,
            pixel_size: 1.0,
            params: &params,
        };
        let source = StrokePart::new(fill.clone(), Style::fill(Color::BLACK));
        let hits = intersect::collect(&fill, &eraser);
        assert_eq!(hits.len(), 2);

        let mut collector = Collector::new(&source);
        erase(&ctx, &fill, &hits, &mut collector);
        let outcome = collector.finish(eraser.exact_bbox().max_dimension(), params.safety_ratio);
        assert_eq!(outcome.fragments.len(), 1);
        assert_abs_diff_eq!(outcome.fragments[0].path.area(), 80.0, epsilon = 1e-9);
    }
}

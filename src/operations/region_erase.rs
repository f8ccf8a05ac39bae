use tracing::{debug, trace};

use crate::geometry::Path;
use crate::math::Point2;
use crate::stroke::Stroke;
use crate::viewport::Viewport;

use super::erase::{EraseFragment, EraseParams};

/// Erases a region out of a whole stroke.
///
/// Every part is erased against the same flattened eraser outline. The
/// stroke is all-or-nothing: if any part falls back, the original stroke is
/// returned unchanged. Otherwise each surviving part becomes its own stroke
/// at the original z-index.
pub struct RegionErase<'a> {
    stroke: &'a Stroke,
    eraser: &'a Path,
    viewport: &'a dyn Viewport,
    params: EraseParams,
}

impl<'a> RegionErase<'a> {
    /// Creates a new region erase operation.
    #[must_use]
    pub fn new(stroke: &'a Stroke, eraser: &'a Path, viewport: &'a dyn Viewport) -> Self {
        Self {
            stroke,
            eraser,
            viewport,
            params: EraseParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: EraseParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the erase, returning the strokes that replace the input.
    ///
    /// An untouched stroke comes back as a single clone of itself; a fully
    /// erased one yields an empty list.
    #[must_use]
    pub fn execute(&self) -> Vec<Stroke> {
        let pixel_size = self.viewport.size_of_pixel_on_canvas();
        let outline = self
            .eraser
            .polyline_approximation(self.params.polyline_tolerance_pixels * pixel_size)
            .as_closed();

        if !outline.exact_bbox().intersects(&self.stroke.bbox()) {
            trace!("eraser misses stroke bounds");
            return vec![self.stroke.clone()];
        }

        let tolerance = self.params.rounding_tolerance_pixels * pixel_size;
        let round_point = |point: Point2| self.viewport.round_point(point, tolerance);

        let mut survivors = Vec::new();
        let mut changed = false;
        for (index, part) in self.stroke.parts().iter().enumerate() {
            let outcome = EraseFragment::new(part, &outline, &round_point)
                .with_pixel_size(pixel_size)
                .with_params(self.params)
                .execute();
            if let Some(reason) = outcome.abort {
                debug!(part = index, %reason, "erase fell back; keeping stroke");
                return vec![self.stroke.clone()];
            }
            changed |= !outcome.is_unchanged(part);
            survivors.extend(outcome.fragments);
        }

        if !changed {
            return vec![self.stroke.clone()];
        }
        debug!(
            parts = self.stroke.parts().len(),
            survivors = survivors.len(),
            "stroke erased"
        );
        survivors
            .into_iter()
            .map(|part| Stroke::from_part(part, self.stroke.z_index()))
            .collect()
    }
}

impl Stroke {
    /// Strokes left after erasing `eraser` out of this one.
    ///
    /// See [`RegionErase`].
    #[must_use]
    pub fn with_region_erased(&self, eraser: &Path, viewport: &dyn Viewport) -> Vec<Stroke> {
        RegionErase::new(self, eraser, viewport).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::stroke::{Color, Style, StrokePart};
    use crate::viewport::{eraser_outline, CanvasViewport};
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
        Path::from_points(&[p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)], true).unwrap()
    }

    fn viewport() -> CanvasViewport {
        CanvasViewport::new(1.0).unwrap()
    }

    #[test]
    fn missed_stroke_is_returned_as_is() {
        let stroke = Stroke::from_part(
            StrokePart::new(rect(0.0, 0.0, 10.0, 10.0), Style::fill(Color::BLACK)),
            7,
        );
        let result = stroke.with_region_erased(&rect(50.0, 50.0, 60.0, 60.0), &viewport());
        assert_eq!(result, vec![stroke]);
    }

    #[test]
    fn survivors_become_separate_strokes() {
        let line = StrokePart::new(
            Path::from_points(&[p(0.0, 5.0), p(20.0, 5.0)], false).unwrap(),
            Style::stroke(Color::BLACK, 1.0).unwrap(),
        );
        let stroke = Stroke::from_part(line, 4);
        let result = stroke.with_region_erased(&rect(5.0, 0.0, 15.0, 10.0), &viewport());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.z_index() == 4 && s.parts().len() == 1));
    }

    #[test]
    fn fully_erased_stroke_vanishes() {
        let stroke = Stroke::from_part(
            StrokePart::new(rect(4.0, 4.0, 6.0, 6.0), Style::fill(Color::BLACK)),
            0,
        );
        let result = stroke.with_region_erased(&rect(0.0, 0.0, 10.0, 10.0), &viewport());
        assert!(result.is_empty());
    }

    #[test]
    fn one_aborting_part_keeps_whole_stroke() {
        let fill = StrokePart::new(rect(0.0, 0.0, 10.0, 10.0), Style::fill(Color::BLACK));
        let touching = StrokePart::new(
            Path::from_points(&[p(0.0, 20.0), p(20.0, 20.0)], false).unwrap(),
            Style::stroke(Color::BLACK, 1.0).unwrap(),
        );
        let stroke = Stroke::new(vec![fill, touching], 1).unwrap();
        // Touches the line from below at two vertices and bites the square.
        let eraser = Path::from_points(
            &[p(5.0, 20.0), p(10.0, 17.0), p(15.0, 20.0), p(12.0, 5.0), p(7.0, 5.0)],
            true,
        )
        .unwrap();
        let result = stroke.with_region_erased(&eraser, &viewport());
        assert_eq!(result, vec![stroke]);
    }

    #[test]
    fn new_vertices_sit_on_rounding_grid() {
        let stroke = Stroke::from_part(
            StrokePart::new(rect(0.0, 0.0, 10.0, 10.0), Style::fill(Color::BLACK)),
            0,
        );
        let eraser = rect(5.37, -4.71, 15.37, 5.29);
        // Half a pixel at scale 1 rounds to tenths.
        let result = RegionErase::new(&stroke, &eraser, &viewport())
            .with_params(EraseParams::default().with_rounding_tolerance_pixels(0.5))
            .execute();
        assert_eq!(result.len(), 1);

        let path = &result[0].parts()[0].path;
        let on_grid = |c: f64| ((c * 10.0).round() / 10.0 - c).abs() < 1e-9;
        for seg in path.segments() {
            for point in [seg.start(), seg.end()] {
                assert!(on_grid(point.x) && on_grid(point.y), "off grid: {point:?}");
            }
        }
        assert!(path.closed_contains_point(&p(2.0, 8.0)));
        assert!(!path.closed_contains_point(&p(8.0, 2.0)));
        assert_abs_diff_eq!(path.area(), 100.0 - 4.6 * 5.3, epsilon = 1e-9);
    }

    #[test]
    fn swept_eraser_bites_fill() {
        let stroke = Stroke::from_part(
            StrokePart::new(rect(0.0, 0.0, 10.0, 10.0), Style::fill(Color::BLACK)),
            2,
        );
        let eraser = eraser_outline(p(10.0, 0.0), p(10.0, 0.0), 10.0).unwrap();
        let result = stroke.with_region_erased(&eraser, &viewport());
        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(result[0].parts()[0].path.area(), 75.0, epsilon = 1e-9);
    }
}

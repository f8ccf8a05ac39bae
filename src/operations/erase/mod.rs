mod classify;
mod hygiene;
mod intersect;
mod outcome;
mod pairing;
mod params;
mod planar;
pub mod sequence;
mod splice;
mod stroked;

pub use outcome::EraseOutcome;
pub use params::EraseParams;

use tracing::trace;

use crate::geometry::Path;
use crate::math::Point2;
use crate::stroke::{StrokePart, StyleKind};

use outcome::Collector;

/// State shared by the erase strategies for one fragment.
pub(crate) struct EraseContext<'a> {
    /// Closed polyline outline of the eraser.
    eraser: &'a Path,
    round_point: &'a dyn Fn(Point2) -> Point2,
    pixel_size: f64,
    params: &'a EraseParams,
}

impl EraseContext<'_> {
    fn eraser_contains(&self, point: &Point2) -> bool {
        self.eraser.closed_contains_point(point)
    }

    /// Largest gap between piece endpoints still treated as a join.
    fn stitch_tolerance(&self) -> f64 {
        self.pixel_size
    }
}

/// Erases a closed eraser region out of a single stroke fragment.
///
/// Crossings between the fragment and the eraser outline select a strategy:
/// - none: the fragment is kept or dropped whole;
/// - filled with two crossings: the erased span is spliced out;
/// - filled with a few crossings: boundary pieces are paired into fragments;
/// - filled with many crossings: a planar subtraction;
/// - outlines: the path is cut at every crossing.
///
/// Results that look implausible are abandoned and the fragment comes back
/// unchanged, with the reason on the outcome.
pub struct EraseFragment<'a> {
    part: &'a StrokePart,
    eraser: &'a Path,
    round_point: &'a dyn Fn(Point2) -> Point2,
    pixel_size: f64,
    params: EraseParams,
}

impl<'a> EraseFragment<'a> {
    /// Creates a new erase operation.
    ///
    /// `eraser` must be a closed polyline. New points are passed through
    /// `round_point`.
    #[must_use]
    pub fn new(
        part: &'a StrokePart,
        eraser: &'a Path,
        round_point: &'a dyn Fn(Point2) -> Point2,
    ) -> Self {
        Self {
            part,
            eraser,
            round_point,
            pixel_size: 1.0,
            params: EraseParams::default(),
        }
    }

    /// Sets the size of one screen pixel in canvas units.
    #[must_use]
    pub fn with_pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: EraseParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the erase.
    #[must_use]
    pub fn execute(&self) -> EraseOutcome {
        let ctx = EraseContext {
            eraser: self.eraser,
            round_point: self.round_point,
            pixel_size: self.pixel_size,
            params: &self.params,
        };
        let kind = self.part.style.kind();
        let path = match kind {
            StyleKind::Fill => self.part.path.as_closed(),
            StyleKind::Stroke => self.part.path.clone(),
        };
        let hits = intersect::collect(&path, self.eraser);
        trace!(crossings = hits.len(), ?kind, "erasing fragment");

        let mut collector = Collector::new(self.part);
        if hits.is_empty() {
            if classify::inside_eraser(&ctx, self.part) {
                collector.discard(&path);
            } else {
                collector.keep_source();
            }
        } else {
            match kind {
                StyleKind::Fill if hits.len() == 2 => {
                    splice::erase(&ctx, &path, &hits, &mut collector);
                }
                StyleKind::Fill if hits.len() <= self.params.max_lens_intersections => {
                    pairing::erase(&ctx, &path, &hits, &mut collector);
                }
                StyleKind::Fill => planar::erase(&ctx, &path, &hits, &mut collector),
                StyleKind::Stroke => stroked::erase(&ctx, &path, &hits, &mut collector),
            }
        }

        collector.finish(
            self.eraser.exact_bbox().max_dimension(),
            self.params.safety_ratio,
        )
    }
}

use crate::error::{GeometryError, Result};
use crate::geometry::Path;
use crate::math::{Point2, Vector2, TOLERANCE};

/// The visible canvas region an erase runs against.
///
/// Supplies pixel-scale tolerances so results are deterministic at a given
/// zoom level.
pub trait Viewport {
    /// Rounds `point` to a precision appropriate for `tolerance`.
    fn round_point(&self, point: Point2, tolerance: f64) -> Point2;

    /// Size of one screen pixel in canvas units.
    fn size_of_pixel_on_canvas(&self) -> f64;
}

/// A viewport described only by its zoom factor.
#[derive(Debug, Clone, Copy)]
pub struct CanvasViewport {
    scale: f64,
}

impl CanvasViewport {
    /// Creates a viewport where one canvas unit spans `scale` screen pixels.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `scale` is not a positive,
    /// finite number.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeometryError::Degenerate(format!("viewport scale {scale}")).into());
        }
        Ok(Self { scale })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Viewport for CanvasViewport {
    fn round_point(&self, point: Point2, tolerance: f64) -> Point2 {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return point;
        }
        // Snap to the power-of-ten grid just below the tolerance. Dividing by
        // an exact power of ten keeps decimal grid values exact.
        let exponent = tolerance.log10().floor();
        let snap = |c: f64| {
            if exponent < 0.0 {
                let factor = 10f64.powf(-exponent);
                (c * factor).round() / factor
            } else {
                let step = 10f64.powf(exponent);
                (c / step).round() * step
            }
        };
        Point2::new(snap(point.x), snap(point.y))
    }

    fn size_of_pixel_on_canvas(&self) -> f64 {
        1.0 / self.scale
    }
}

/// Closed region swept by a square eraser brush of side `size` moving from
/// `from` to `to`.
///
/// The outline is the convex hull of the brush square at both positions,
/// wound counter-clockwise.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `size` is not positive and finite.
pub fn eraser_outline(from: Point2, to: Point2, size: f64) -> Result<Path> {
    if !size.is_finite() || size <= 0.0 {
        return Err(GeometryError::Degenerate(format!("eraser size {size}")).into());
    }
    let half = size * 0.5;
    let offsets = [
        Vector2::new(-half, -half),
        Vector2::new(half, -half),
        Vector2::new(half, half),
        Vector2::new(-half, half),
    ];
    let mut corners: Vec<Point2> = offsets
        .iter()
        .flat_map(|o| [from + o, to + o])
        .collect();
    Path::from_points(&convex_hull(&mut corners), true)
}

/// Andrew's monotone chain; returns the hull counter-clockwise.
fn convex_hull(points: &mut [Point2]) -> Vec<Point2> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let turn = |o: &Point2, a: &Point2, b: &Point2| {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    };

    let mut hull: Vec<Point2> = Vec::with_capacity(points.len() + 1);
    for pass in 0..2 {
        let start = hull.len();
        let chain: Vec<Point2> = if pass == 0 {
            points.to_vec()
        } else {
            points.iter().rev().copied().collect()
        };
        for pt in &chain {
            while hull.len() >= start + 2
                && turn(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) <= TOLERANCE
            {
                hull.pop();
            }
            hull.push(*pt);
        }
        // Last point of each chain starts the next one.
        hull.pop();
    }
    hull
}

use crate::math::distance_2d::closest_param_on_segment;
use crate::math::intersect_2d::{line_quadratic_intersect_2d, segment_segment_intersect_2d};
use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};

use super::rect::Rect2;

/// A single drawing segment: a straight line or a quadratic Bézier.
///
/// Parameters run over `[0, 1]` from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point2,
        end: Point2,
    },
    Quadratic {
        start: Point2,
        control: Point2,
        end: Point2,
    },
}

impl Segment {
    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match *self {
            Self::Line { start, .. } | Self::Quadratic { start, .. } => start,
        }
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match *self {
            Self::Line { end, .. } | Self::Quadratic { end, .. } => end,
        }
    }

    /// Evaluates the segment at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        match *self {
            Self::Line { start, end } => start + (end - start) * t,
            Self::Quadratic {
                start,
                control,
                end,
            } => {
                let mt = 1.0 - t;
                Point2::from(
                    mt * mt * start.coords + 2.0 * mt * t * control.coords + t * t * end.coords,
                )
            }
        }
    }

    /// First derivative with respect to `t` (not normalized).
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector2 {
        match *self {
            Self::Line { start, end } => end - start,
            Self::Quadratic {
                start,
                control,
                end,
            } => 2.0 * (1.0 - t) * (control - start) + 2.0 * t * (end - control),
        }
    }

    /// Unit tangent at `t`, or `None` if the segment is degenerate there.
    ///
    /// A quadratic whose control point coincides with an endpoint has a zero
    /// derivative at that end; the chord direction is used instead.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Option<Vector2> {
        let d = self.derivative_at(t);
        let len = d.norm();
        if len > TOLERANCE {
            return Some(d / len);
        }
        let chord = self.end() - self.start();
        let chord_len = chord.norm();
        (chord_len > TOLERANCE).then(|| chord / chord_len)
    }

    /// Splits the segment at `t` into two segments covering `[0, t]` and `[t, 1]`.
    #[must_use]
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        match *self {
            Self::Line { start, end } => {
                let mid = self.point_at(t);
                (
                    Self::Line { start, end: mid },
                    Self::Line { start: mid, end },
                )
            }
            Self::Quadratic {
                start,
                control,
                end,
            } => {
                // De Casteljau.
                let c0 = start + (control - start) * t;
                let c1 = control + (end - control) * t;
                let mid = c0 + (c1 - c0) * t;
                (
                    Self::Quadratic {
                        start,
                        control: c0,
                        end: mid,
                    },
                    Self::Quadratic {
                        start: mid,
                        control: c1,
                        end,
                    },
                )
            }
        }
    }

    /// Returns the part of the segment between parameters `t0 <= t1`.
    #[must_use]
    pub fn sub_segment(&self, t0: f64, t1: f64) -> Self {
        if t1 <= t0 {
            let p = self.point_at(t0);
            return Self::Line { start: p, end: p };
        }
        let (_, tail) = self.split_at(t0);
        if t0 >= 1.0 - TOLERANCE {
            return tail;
        }
        let local = ((t1 - t0) / (1.0 - t0)).clamp(0.0, 1.0);
        tail.split_at(local).0
    }

    /// Returns the segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match *self {
            Self::Line { start, end } => Self::Line {
                start: end,
                end: start,
            },
            Self::Quadratic {
                start,
                control,
                end,
            } => Self::Quadratic {
                start: end,
                control,
                end: start,
            },
        }
    }

    /// Returns a copy with its endpoints replaced (control point kept).
    #[must_use]
    pub fn with_endpoints(&self, start: Point2, end: Point2) -> Self {
        match *self {
            Self::Line { .. } => Self::Line { start, end },
            Self::Quadratic { control, .. } => Self::Quadratic {
                start,
                control,
                end,
            },
        }
    }

    /// Exact axis-aligned bounding box, including quadratic extrema.
    #[must_use]
    pub fn exact_bbox(&self) -> Rect2 {
        let mut rect = Rect2::from_corners(self.start(), self.end());
        if let Self::Quadratic {
            start,
            control,
            end,
        } = *self
        {
            // Each axis has at most one extremum: t = (p0 - p1) / (p0 - 2p1 + p2).
            for axis in 0..2 {
                let denom = start[axis] - 2.0 * control[axis] + end[axis];
                if denom.abs() < TOLERANCE {
                    continue;
                }
                let t = (start[axis] - control[axis]) / denom;
                if t > 0.0 && t < 1.0 {
                    rect = rect.including(self.point_at(t));
                }
            }
        }
        rect
    }

    /// Intersections with the line segment `a → b`.
    ///
    /// Returns `(t_segment, u_line, point)` ordered by `t_segment`.
    #[must_use]
    pub fn intersect_line(&self, a: &Point2, b: &Point2) -> Vec<(f64, f64, Point2)> {
        match *self {
            Self::Line { start, end } => segment_segment_intersect_2d(&start, &end, a, b)
                .map(|(pt, t, u)| vec![(t, u, pt)])
                .unwrap_or_default(),
            Self::Quadratic {
                start,
                control,
                end,
            } => line_quadratic_intersect_2d(&start, &control, &end, a, b)
                .into_iter()
                .map(|(pt, t, u)| (t, u, pt))
                .collect(),
        }
    }

    /// Parameter and squared distance of the point on the segment nearest to `point`.
    #[must_use]
    pub fn nearest_to(&self, point: &Point2) -> (f64, f64) {
        match *self {
            Self::Line { start, end } => {
                let t = closest_param_on_segment(point, &start, &end);
                (t, (self.point_at(t) - point).norm_squared())
            }
            Self::Quadratic { .. } => self.nearest_on_quadratic(point),
        }
    }

    /// Coarse sampling followed by Newton refinement of `(B(t) - p)·B'(t) = 0`.
    fn nearest_on_quadratic(&self, point: &Point2) -> (f64, f64) {
        const SAMPLES: u32 = 16;
        let mut best_t = 0.0;
        let mut best_d = f64::INFINITY;
        for i in 0..=SAMPLES {
            let t = f64::from(i) / f64::from(SAMPLES);
            let d = (self.point_at(t) - point).norm_squared();
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }

        let second = match *self {
            Self::Quadratic {
                start,
                control,
                end,
            } => 2.0 * (start.coords - 2.0 * control.coords + end.coords),
            Self::Line { .. } => Vector2::zeros(),
        };
        let mut t = best_t;
        for _ in 0..8 {
            let diff = self.point_at(t) - point;
            let d1 = self.derivative_at(t);
            let f = diff.dot(&d1);
            let df = d1.norm_squared() + diff.dot(&second);
            if df.abs() < TOLERANCE {
                break;
            }
            t = (t - f / df).clamp(0.0, 1.0);
        }
        let d = (self.point_at(t) - point).norm_squared();
        if d < best_d {
            (t, d)
        } else {
            (best_t, best_d)
        }
    }

    /// Approximates the segment as a polyline, returning points after `start`.
    ///
    /// `tolerance` bounds the distance between the curve and its chords.
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point2> {
        match *self {
            Self::Line { end, .. } => vec![end],
            Self::Quadratic {
                start,
                control,
                end,
            } => {
                let n = quadratic_subdivision_count(&start, &control, &end, tolerance);
                (1..=n)
                    .map(|i| self.point_at(f64::from(i) / f64::from(n)))
                    .collect()
            }
        }
    }

    /// Exact contribution of this segment to a closed path's signed area
    /// (Green's theorem).
    #[must_use]
    pub fn signed_area_contribution(&self) -> f64 {
        match *self {
            Self::Line { start, end } => 0.5 * cross_2d(&start.coords, &end.coords),
            Self::Quadratic {
                start,
                control,
                end,
            } => {
                // Chord term plus two thirds of the control triangle.
                0.5 * cross_2d(&start.coords, &end.coords)
                    + cross_2d(&(control - start), &(end - start)) / 3.0
            }
        }
    }

    /// Approximate arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match *self {
            Self::Line { start, end } => (end - start).norm(),
            Self::Quadratic { start, .. } => {
                let mut prev = start;
                let mut total = 0.0;
                for p in self.flatten(1e-3) {
                    total += (p - prev).norm();
                    prev = p;
                }
                total
            }
        }
    }

    /// Returns `true` if every defining point coincides.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let start = self.start();
        let far = match *self {
            Self::Line { end, .. } => (end - start).norm(),
            Self::Quadratic { control, end, .. } => (end - start).norm().max((control - start).norm()),
        };
        far < TOLERANCE
    }
}

/// Number of uniform subdivisions keeping a quadratic within `tolerance` of
/// its chords.
fn quadratic_subdivision_count(p0: &Point2, p1: &Point2, p2: &Point2, tolerance: f64) -> u32 {
    let dd = (p0.coords - 2.0 * p1.coords + p2.coords).norm();
    if dd < TOLERANCE || tolerance <= 0.0 {
        return 1;
    }
    // Chord error of a step h is |B''| h² / 8 = |p0 - 2p1 + p2| h² / 4.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (dd / (4.0 * tolerance)).sqrt().ceil() as u32;
    n.clamp(1, 256)
}

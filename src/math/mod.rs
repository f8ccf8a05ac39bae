pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance used when deciding whether two path locations coincide.
pub const POINT_MERGE_TOLERANCE: f64 = 1e-7;

/// 2D cross product of two vectors.
#[inline]
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` if both coordinates of `point` are finite.
#[inline]
#[must_use]
pub fn is_finite_point(point: &Point2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

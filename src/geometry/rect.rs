use crate::math::{is_finite_point, Point2, Vector2};

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Rect2 {
    /// Creates a rectangle from two corners in any order.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a zero-size rectangle at `point`.
    #[must_use]
    pub fn from_point(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The larger of width and height.
    #[must_use]
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the rectangle extended to contain `point`.
    #[must_use]
    pub fn including(&self, point: Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.including(other.min).including(other.max)
    }

    /// Returns the rectangle grown by `amount` on every side.
    #[must_use]
    pub fn grown_by(&self, amount: f64) -> Self {
        let delta = Vector2::new(amount, amount);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Returns `true` if the rectangles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Returns `true` if both corners and the area are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite_point(&self.min) && is_finite_point(&self.max) && self.area().is_finite()
    }
}

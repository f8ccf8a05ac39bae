use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` is the parameter on
/// `a0 → a1` and `u` the parameter on `b0 → b1`, both in `[0, 1]`.
/// Parallel and collinear segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = cross_2d(&da, &db);
    let scale = da.norm() * db.norm();
    if cross.abs() <= TOLERANCE * scale.max(TOLERANCE) {
        return None;
    }

    let d = b0 - a0;
    let t = cross_2d(&d, &db) / cross;
    let u = cross_2d(&d, &da) / cross;

    // Small epsilon so that hits on endpoints are kept.
    let eps = 1e-9;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of a quadratic Bézier `p0, p1, p2` with the segment `a → b`.
///
/// Substitutes the curve into the implicit form of the line, so each hit is
/// the root of a quadratic in the curve parameter.
///
/// Returns `(point, t_curve, u_segment)` triples with both parameters in
/// `[0, 1]`, ordered by `t_curve`. A tangential touch yields a single root.
#[must_use]
pub fn line_quadratic_intersect_2d(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    a: &Point2,
    b: &Point2,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    let dir = b - a;
    let len_sq = dir.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return results;
    }
    let normal = Vector2::new(-dir.y, dir.x);

    // B(t) = p0 + 2t(p1 - p0) + t²(p0 - 2p1 + p2)
    let second = p0.coords - 2.0 * p1.coords + p2.coords;
    let first = 2.0 * (p1 - p0);
    let qa = normal.dot(&second);
    let qb = normal.dot(&first);
    let qc = normal.dot(&(p0 - a));

    let eps = 1e-9;
    for t in solve_quadratic(qa, qb, qc) {
        if t < -eps || t > 1.0 + eps {
            continue;
        }
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let point = Point2::from(mt * mt * p0.coords + 2.0 * mt * t * p1.coords + t * t * p2.coords);
        let u = (point - a).dot(&dir) / len_sq;
        if u < -eps || u > 1.0 + eps {
            continue;
        }
        results.push((point, t, u.clamp(0.0, 1.0)));
    }
    results.sort_by(|x, y| x.1.total_cmp(&y.1));
    results
}

/// Real roots of `a·t² + b·t + c = 0`, ascending.
///
/// Falls back to the linear solution when `a` is negligible and reports a
/// double root once.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let scale = b.abs().max(c.abs()).max(1.0);
    if a.abs() < TOLERANCE * scale {
        if b.abs() < TOLERANCE * scale {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -TOLERANCE * scale * scale {
        return Vec::new();
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();
    if disc_sqrt < TOLERANCE * 100.0 * scale {
        // Tangent case: single root.
        return vec![-b / (2.0 * a)];
    }

    // Numerically stable form avoids cancellation for the smaller root.
    let q = -0.5 * (b + b.signum() * disc_sqrt);
    let mut roots = vec![q / a, c / q];
    roots.sort_by(f64::total_cmp);
    roots
}

use super::Point2;

/// Returns the parameter in `[0, 1]` of the point on segment `a → b`
/// closest to `point`.
#[must_use]
pub fn closest_param_on_segment(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return 0.0;
    }
    // Project point onto the infinite line, clamp to [0, 1].
    ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

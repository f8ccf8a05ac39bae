use super::Point2;

/// Winding number of `point` with respect to the closed polygon `verts`.
///
/// Non-zero => inside, zero => outside.
#[must_use]
pub fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = verts[i];
        let v1 = verts[(i + 1) % n];
        let side = (v1.x - v0.x) * (point.y - v0.y) - (point.x - v0.x) * (v1.y - v0.y);

        if v0.y <= point.y {
            if v1.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if v1.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Point-in-polygon test using the non-zero winding rule.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    winding_number_2d(point, polygon) != 0
}

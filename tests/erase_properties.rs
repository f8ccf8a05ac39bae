#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use inkcut::geometry::Path;
use inkcut::math::Point2;
use inkcut::stroke::{Color, Stroke, StrokePart, Style};
use inkcut::viewport::{eraser_outline, CanvasViewport};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    Path::from_points(&[p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)], true).unwrap()
}

fn fill(path: Path) -> Stroke {
    Stroke::from_part(StrokePart::new(path, Style::fill(Color::BLACK)), 0)
}

fn outline(points: &[Point2], closed: bool) -> Stroke {
    Stroke::from_part(
        StrokePart::new(
            Path::from_points(points, closed).unwrap(),
            Style::stroke(Color::BLACK, 1.0).unwrap(),
        ),
        0,
    )
}

fn viewport() -> CanvasViewport {
    CanvasViewport::new(1.0).unwrap()
}

fn total_area(strokes: &[Stroke]) -> f64 {
    strokes
        .iter()
        .flat_map(Stroke::parts)
        .map(|part| part.path.area())
        .sum()
}

/// Closed outline made of four quadratic arcs around the origin.
fn rounded_diamond() -> Path {
    Path::new(p(10.0, 0.0))
        .quad_to(p(10.0, 10.0), p(0.0, 10.0))
        .quad_to(p(-10.0, 10.0), p(-10.0, 0.0))
        .quad_to(p(-10.0, -10.0), p(0.0, -10.0))
        .quad_to(p(10.0, -10.0), p(10.0, 0.0))
        .as_closed()
}

fn assert_valid(strokes: &[Stroke]) {
    for stroke in strokes {
        for part in stroke.parts() {
            assert!(part.bbox().is_finite());
            if part.is_filled() {
                assert!(part.path.is_closed());
                assert!(!part.is_visually_empty());
            } else {
                assert!(part.path.length() > 0.0);
            }
        }
    }
}

#[test]
fn disjoint_eraser_leaves_stroke_unchanged() {
    let eraser = rect(100.0, 100.0, 110.0, 110.0);
    for stroke in [
        fill(rect(0.0, 0.0, 10.0, 10.0)),
        fill(rounded_diamond()),
        outline(&[p(0.0, 0.0), p(50.0, 50.0)], false),
    ] {
        let result = stroke.with_region_erased(&eraser, &viewport());
        assert_eq!(result, vec![stroke]);
    }
}

#[test]
fn disjoint_eraser_inside_bbox_leaves_stroke_unchanged() {
    // Bounding boxes overlap, but the eraser sits in the L-shape's notch.
    let l_shape = Path::from_points(
        &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 4.0), p(4.0, 4.0), p(4.0, 10.0), p(0.0, 10.0)],
        true,
    )
    .unwrap();
    let stroke = fill(l_shape);
    let result = stroke.with_region_erased(&rect(6.0, 6.0, 9.0, 9.0), &viewport());
    assert_eq!(result, vec![stroke]);
}

#[test]
fn contained_strokes_are_erased_entirely() {
    let eraser = rect(-20.0, -20.0, 20.0, 20.0);
    for stroke in [
        fill(rect(0.0, 0.0, 10.0, 10.0)),
        fill(rounded_diamond()),
        outline(&[p(-5.0, -5.0), p(5.0, 0.0), p(-5.0, 5.0)], false),
        outline(&[p(-5.0, -5.0), p(5.0, -5.0), p(0.0, 5.0)], true),
    ] {
        assert!(stroke.with_region_erased(&eraser, &viewport()).is_empty());
    }
}

#[test]
fn eraser_inside_fill_keeps_fill() {
    // Covers the center and more than half the fill, but never crosses it.
    let stroke = fill(rect(0.0, 0.0, 10.0, 10.0));
    for eraser in [rect(2.0, 2.0, 5.5, 8.0), rect(1.0, 1.0, 9.0, 9.0)] {
        let result = stroke.with_region_erased(&eraser, &viewport());
        assert_eq!(result, vec![stroke.clone()]);
    }
}

#[test]
fn corner_bite_conserves_area() {
    let stroke = fill(rect(0.0, 0.0, 10.0, 10.0));
    let result = stroke.with_region_erased(&rect(5.0, -5.0, 15.0, 5.0), &viewport());
    assert_valid(&result);
    // Kept plus the 5 x 5 overlap equals the original.
    assert_abs_diff_eq!(total_area(&result) + 25.0, 100.0, epsilon = 1e-9);
}

#[test]
fn corner_bite_yields_l_shape() {
    let stroke = fill(rect(0.0, 0.0, 10.0, 10.0));
    let result = stroke.with_region_erased(&rect(5.0, -5.0, 15.0, 5.0), &viewport());
    assert_eq!(result.len(), 1);
    let part = &result[0].parts()[0];
    let bbox = part.path.exact_bbox();
    assert_abs_diff_eq!(bbox.min.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bbox.min.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bbox.max.x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bbox.max.y, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(part.path.area(), 75.0, epsilon = 1e-9);
    assert_eq!(part.style, stroke.parts()[0].style);
}

#[test]
fn band_splits_square_and_conserves_area() {
    let stroke = fill(rect(0.0, 0.0, 10.0, 10.0));
    let result = stroke.with_region_erased(&rect(-5.0, 4.0, 15.0, 6.0), &viewport());
    assert_eq!(result.len(), 2);
    assert_valid(&result);
    assert_abs_diff_eq!(total_area(&result) + 20.0, 100.0, epsilon = 1e-9);
}

#[test]
fn curved_fill_cut_in_half() {
    let diamond = rounded_diamond();
    let stroke = fill(diamond.clone());
    let result = stroke.with_region_erased(&rect(0.0, -20.0, 20.0, 20.0), &viewport());
    assert_eq!(result.len(), 1);
    assert_valid(&result);
    let kept = &result[0].parts()[0].path;
    assert_abs_diff_eq!(kept.area(), diamond.area() / 2.0, epsilon = 1e-6);
    assert!(kept.exact_bbox().max.x <= 1e-9);
}

#[test]
fn tangential_touch_is_a_no_op() {
    let stroke = outline(&[p(0.0, 0.0), p(20.0, 0.0)], false);
    let eraser = Path::from_points(
        &[p(2.0, 4.0), p(5.0, 0.0), p(10.0, 3.0), p(15.0, 0.0), p(18.0, 4.0)],
        true,
    )
    .unwrap();
    let result = stroke.with_region_erased(&eraser, &viewport());
    assert_eq!(result, vec![stroke]);
}

#[test]
fn swept_eraser_cuts_outline() {
    let stroke = outline(&[p(0.0, 0.0), p(20.0, 0.0)], false);
    let eraser = eraser_outline(p(10.0, -5.0), p(10.0, 5.0), 2.0).unwrap();
    let result = stroke.with_region_erased(&eraser, &viewport());
    assert_eq!(result.len(), 2);
    assert_valid(&result);
    let lengths: f64 = result
        .iter()
        .flat_map(Stroke::parts)
        .map(|part| part.path.length())
        .sum();
    assert_abs_diff_eq!(lengths, 18.0, epsilon = 1e-9);
}

#[test]
fn multi_part_stroke_keeps_z_index() {
    let square = StrokePart::new(rect(0.0, 0.0, 10.0, 10.0), Style::fill(Color::BLACK));
    let far = StrokePart::new(rect(30.0, 0.0, 40.0, 10.0), Style::fill(Color::BLACK));
    let stroke = Stroke::new(vec![square, far.clone()], 9).unwrap();
    let result = stroke.with_region_erased(&rect(5.0, -5.0, 15.0, 5.0), &viewport());
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|s| s.z_index() == 9));
    assert!(result.iter().any(|s| s.parts()[0] == far));
}

use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::{Point2, Vector2, POINT_MERGE_TOLERANCE, TOLERANCE};

use super::rect::Rect2;
use super::segment::Segment;

/// Parameter tolerance used when snapping locations onto segment ends.
const PARAMETER_TOLERANCE: f64 = 1e-9;

/// A drawing command appended after the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    LineTo(Point2),
    QuadTo { control: Point2, end: Point2 },
}

impl PathCommand {
    /// Returns the point this command ends at.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match *self {
            Self::LineTo(end) | Self::QuadTo { end, .. } => end,
        }
    }

    /// Returns the segment drawn by this command from `start`.
    #[must_use]
    pub fn to_segment(&self, start: Point2) -> Segment {
        match *self {
            Self::LineTo(end) => Segment::Line { start, end },
            Self::QuadTo { control, end } => Segment::Quadratic {
                start,
                control,
                end,
            },
        }
    }

    /// Returns the command that draws `segment` from its start point.
    #[must_use]
    pub fn from_segment(segment: &Segment) -> Self {
        match *segment {
            Segment::Line { end, .. } => Self::LineTo(end),
            Segment::Quadratic { control, end, .. } => Self::QuadTo { control, end },
        }
    }

    fn map_points(&self, map_point: &dyn Fn(Point2) -> Point2) -> Self {
        match *self {
            Self::LineTo(end) => Self::LineTo(map_point(end)),
            Self::QuadTo { control, end } => Self::QuadTo {
                control: map_point(control),
                end: map_point(end),
            },
        }
    }
}

/// A position on a path: command index plus parameter on that command.
///
/// Locations order by `(curve_index, parameter)`, which is the path's own
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CurveLocation {
    pub curve_index: usize,
    pub parameter: f64,
}

impl CurveLocation {
    #[must_use]
    pub fn new(curve_index: usize, parameter: f64) -> Self {
        Self {
            curve_index,
            parameter,
        }
    }

    /// Total order along the path; NaN parameters compare equal.
    #[must_use]
    pub fn cmp_along(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// A point where a path meets another curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    /// Location in space.
    pub point: Point2,
    /// Location along the intersected path.
    pub location: CurveLocation,
}

/// An ordered sequence of line and quadratic commands from a start point.
///
/// Paths are immutable values: every operation returns a new path. A closed
/// path always ends with a command that returns to its start point.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    start: Point2,
    commands: Vec<PathCommand>,
    closed: bool,
}

impl Path {
    /// Creates an open path consisting of only a start point.
    #[must_use]
    pub fn new(start: Point2) -> Self {
        Self {
            start,
            commands: Vec::new(),
            closed: false,
        }
    }

    /// Creates a path of straight lines through `points`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPath` if `points` is empty, or
    /// `GeometryError::NonFinite` if any coordinate is not finite.
    pub fn from_points(points: &[Point2], closed: bool) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(GeometryError::EmptyPath)?;
        if points.iter().any(|p| !crate::math::is_finite_point(p)) {
            return Err(GeometryError::NonFinite("path point").into());
        }
        let path = Self {
            start: *first,
            commands: rest.iter().map(|p| PathCommand::LineTo(*p)).collect(),
            closed: false,
        };
        Ok(if closed { path.as_closed() } else { path })
    }

    /// Appends a straight line to `end`.
    #[must_use]
    pub fn line_to(mut self, end: Point2) -> Self {
        self.commands.push(PathCommand::LineTo(end));
        self.closed = false;
        self
    }

    /// Appends a quadratic curve through `control` to `end`.
    #[must_use]
    pub fn quad_to(mut self, control: Point2, end: Point2) -> Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self.closed = false;
        self
    }

    /// Builds a path from contiguous segments, joining gaps with lines.
    #[must_use]
    pub fn from_segments(start: Point2, segments: &[Segment]) -> Self {
        let mut path = Self::new(start);
        let mut cursor = start;
        for seg in segments {
            if (seg.start() - cursor).norm() > POINT_MERGE_TOLERANCE {
                path.commands.push(PathCommand::LineTo(seg.start()));
            }
            path.commands.push(PathCommand::from_segment(seg));
            cursor = seg.end();
        }
        path
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.commands.last().map_or(self.start, PathCommand::end)
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Iterates over the segments drawn by the commands.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.commands.iter().scan(self.start, |cursor, cmd| {
            let seg = cmd.to_segment(*cursor);
            *cursor = cmd.end();
            Some(seg)
        })
    }

    /// Returns the segment drawn by command `index`.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Segment> {
        self.segments().nth(index)
    }

    /// Location of the path's final point.
    #[must_use]
    pub fn end_location(&self) -> CurveLocation {
        CurveLocation::new(self.commands.len().saturating_sub(1), 1.0)
    }

    /// Canonical form of a location: parameters at the end of a command move
    /// to the start of the next one (wrapping to the start on closed paths).
    #[must_use]
    pub fn normalize_location(&self, location: CurveLocation) -> CurveLocation {
        let count = self.commands.len();
        if count == 0 {
            return CurveLocation::new(0, 0.0);
        }
        let index = location.curve_index.min(count - 1);
        let t = location.parameter.clamp(0.0, 1.0);
        if t >= 1.0 - PARAMETER_TOLERANCE {
            if index + 1 < count {
                return CurveLocation::new(index + 1, 0.0);
            }
            if self.closed {
                return CurveLocation::new(0, 0.0);
            }
            return CurveLocation::new(index, 1.0);
        }
        if t <= PARAMETER_TOLERANCE {
            return CurveLocation::new(index, 0.0);
        }
        CurveLocation::new(index, t)
    }

    /// Evaluates the path at `location`.
    #[must_use]
    pub fn point_at(&self, location: CurveLocation) -> Point2 {
        self.segment(location.curve_index)
            .map_or(self.start, |seg| seg.point_at(location.parameter.clamp(0.0, 1.0)))
    }

    /// Unit tangent at `location`, following the path direction.
    #[must_use]
    pub fn tangent_at(&self, location: CurveLocation) -> Option<Vector2> {
        self.segment(location.curve_index)?
            .tangent_at(location.parameter.clamp(0.0, 1.0))
    }

    /// Intersections of the path with the line segment `a → b`.
    ///
    /// Hits at the same path location (for example on a shared vertex) are
    /// reported once. Results are sorted along the path.
    #[must_use]
    pub fn intersection(&self, a: &Point2, b: &Point2) -> Vec<IntersectionPoint> {
        let mut hits = Vec::new();
        for (i, seg) in self.segments().enumerate() {
            for (t, _, point) in seg.intersect_line(a, b) {
                hits.push(IntersectionPoint {
                    point,
                    location: self.normalize_location(CurveLocation::new(i, t)),
                });
            }
        }
        merge_intersections(&mut hits);
        hits
    }

    /// Location and position of the point on the path nearest to `point`.
    #[must_use]
    pub fn nearest_point_to(&self, point: &Point2) -> (CurveLocation, Point2) {
        let mut best = (CurveLocation::new(0, 0.0), self.start);
        let mut best_d = f64::INFINITY;
        for (i, seg) in self.segments().enumerate() {
            let (t, d) = seg.nearest_to(point);
            if d < best_d {
                best_d = d;
                best = (CurveLocation::new(i, t), seg.point_at(t));
            }
        }
        best
    }

    /// Splits the path at every location.
    ///
    /// `k` distinct locations produce `k + 1` open pieces; consecutive pieces
    /// share their joining point exactly. New points pass through `map_point`.
    #[must_use]
    pub fn split_at(
        &self,
        locations: &[CurveLocation],
        map_point: &dyn Fn(Point2) -> Point2,
    ) -> Vec<Self> {
        let mut cuts: Vec<CurveLocation> = locations
            .iter()
            .map(|loc| self.normalize_location(*loc))
            .collect();
        cuts.sort_by(CurveLocation::cmp_along);
        cuts.dedup_by(|a, b| same_location(a, b));

        let mut bounds = Vec::with_capacity(cuts.len() + 2);
        bounds.push((CurveLocation::new(0, 0.0), self.start));
        for cut in cuts {
            bounds.push((cut, map_point(self.point_at(cut))));
        }
        bounds.push((self.end_location(), self.end_point()));

        bounds
            .windows(2)
            .map(|w| self.span(w[0], w[1]))
            .collect()
    }

    /// The forward part of the path between two locations.
    ///
    /// On a closed path a `from` that lies after `to` wraps through the start
    /// point.
    #[must_use]
    pub fn sub_path(
        &self,
        from: CurveLocation,
        to: CurveLocation,
        map_point: &dyn Fn(Point2) -> Point2,
    ) -> Self {
        let from = self.normalize_location(from);
        let to = self.normalize_location(to);
        let from_point = map_point(self.point_at(from));
        let to_point = map_point(self.point_at(to));

        if from.cmp_along(&to) != Ordering::Greater {
            return self.span((from, from_point), (to, to_point));
        }
        let head = self.span((from, from_point), (self.end_location(), self.end_point()));
        let tail = self.span((CurveLocation::new(0, 0.0), self.start), (to, to_point));
        let segments: Vec<Segment> = head.segments().chain(tail.segments()).collect();
        Self::from_segments(from_point, &segments)
    }

    /// Replaces the forward span `from → to` with `insert`.
    ///
    /// Without an insert path the gap is bridged by a straight line. The
    /// insert's endpoints are snapped onto the splice points. A wrapping span
    /// on a closed path yields a closed path starting at `to`.
    #[must_use]
    pub fn spliced(
        &self,
        from: CurveLocation,
        to: CurveLocation,
        insert: Option<&Self>,
        map_point: &dyn Fn(Point2) -> Point2,
    ) -> Self {
        let from = self.normalize_location(from);
        let to = self.normalize_location(to);
        let from_point = map_point(self.point_at(from));
        let to_point = map_point(self.point_at(to));
        let bridge = snapped_insert(insert, from_point, to_point);

        if from.cmp_along(&to) == Ordering::Greater {
            let kept = self.span((to, to_point), (from, from_point));
            let segments: Vec<Segment> = kept.segments().chain(bridge).collect();
            return Self::from_segments(to_point, &segments).as_closed();
        }

        let head = self.span((CurveLocation::new(0, 0.0), self.start), (from, from_point));
        let tail = self.span((to, to_point), (self.end_location(), self.end_point()));
        let segments: Vec<Segment> = head
            .segments()
            .chain(bridge)
            .chain(tail.segments())
            .collect();
        let result = Self::from_segments(self.start, &segments);
        if self.closed {
            result.as_closed()
        } else {
            result
        }
    }

    /// The path traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let segments: Vec<Segment> = self
            .segments()
            .collect::<Vec<_>>()
            .iter()
            .rev()
            .map(Segment::reversed)
            .collect();
        let mut path = Self::from_segments(self.end_point(), &segments);
        path.closed = self.closed;
        path
    }

    /// Closed copy of the path, adding a closing line when needed.
    #[must_use]
    pub fn as_closed(&self) -> Self {
        let mut path = self.clone();
        if path.closed {
            return path;
        }
        if !path.commands.is_empty() && (path.end_point() - path.start).norm() > TOLERANCE {
            path.commands.push(PathCommand::LineTo(path.start));
        }
        path.closed = true;
        path
    }

    /// Open path running along `self` and then `other`.
    ///
    /// Used to rejoin the last and first pieces of a split closed path.
    #[must_use]
    pub fn concatenated(&self, other: &Self) -> Self {
        let segments: Vec<Segment> = self.segments().chain(other.segments()).collect();
        Self::from_segments(self.start, &segments)
    }

    /// Concatenates `other` onto this path and closes the result.
    ///
    /// The end of `self` is joined to the start of `other` by a straight line
    /// when they do not meet.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut segments: Vec<Segment> = self.segments().collect();
        if other.commands.is_empty() {
            if (other.start - self.end_point()).norm() > POINT_MERGE_TOLERANCE {
                segments.push(Segment::Line {
                    start: self.end_point(),
                    end: other.start,
                });
            }
        } else {
            segments.extend(other.segments());
        }
        Self::from_segments(self.start, &segments).as_closed()
    }

    /// Applies `map_point` to every point of the path.
    #[must_use]
    pub fn map_points(&self, map_point: &dyn Fn(Point2) -> Point2) -> Self {
        Self {
            start: map_point(self.start),
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.map_points(map_point))
                .collect(),
            closed: self.closed,
        }
    }

    /// Exact axis-aligned bounding box.
    #[must_use]
    pub fn exact_bbox(&self) -> Rect2 {
        self.segments()
            .fold(Rect2::from_point(self.start), |acc, seg| {
                acc.union(&seg.exact_bbox())
            })
    }

    /// Start point followed by the flattened points of every segment.
    #[must_use]
    pub fn flattened_points(&self, tolerance: f64) -> Vec<Point2> {
        let mut points = vec![self.start];
        for seg in self.segments() {
            points.extend(seg.flatten(tolerance));
        }
        points
    }

    /// Approximates the path with straight lines within `tolerance`.
    #[must_use]
    pub fn polyline_approximation(&self, tolerance: f64) -> Self {
        let points = self.flattened_points(tolerance);
        let mut path = Self {
            start: self.start,
            commands: points[1..].iter().map(|p| PathCommand::LineTo(*p)).collect(),
            closed: false,
        };
        if self.closed {
            path = path.as_closed();
        }
        path
    }

    /// Tests containment against the path treated as closed (non-zero rule).
    #[must_use]
    pub fn closed_contains_point(&self, point: &Point2) -> bool {
        let bbox = self.exact_bbox();
        if !bbox.contains_point(point) {
            return false;
        }
        let tolerance = (bbox.max_dimension() * 1e-4).max(1e-9);
        let mut polygon = self.flattened_points(tolerance);
        if polygon.len() > 1 {
            let first = polygon[0];
            if polygon.last().is_some_and(|last| (*last - first).norm() < TOLERANCE) {
                polygon.pop();
            }
        }
        point_in_polygon_2d(point, &polygon)
    }

    /// Signed area enclosed by the path treated as closed.
    ///
    /// Positive for counter-clockwise traversal.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.as_closed()
            .segments()
            .map(|seg| seg.signed_area_contribution())
            .sum()
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Approximate arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|seg| seg.length()).sum()
    }

    /// Point halfway through the middle command, used as a representative
    /// sample of the path.
    #[must_use]
    pub fn representative_point(&self) -> Point2 {
        if self.commands.is_empty() {
            return self.start;
        }
        self.point_at(CurveLocation::new(self.commands.len() / 2, 0.5))
    }

    /// Segments covering `from → to` with the endpoints pinned to the given
    /// points. Requires `from <= to`.
    fn span(&self, from: (CurveLocation, Point2), to: (CurveLocation, Point2)) -> Self {
        let (from_loc, from_point) = from;
        let (to_loc, to_point) = to;
        let all: Vec<Segment> = self.segments().collect();
        let mut segments = Vec::new();

        if !all.is_empty() {
            let last = all.len() - 1;
            let fi = from_loc.curve_index.min(last);
            let ti = to_loc.curve_index.min(last);
            if fi == ti {
                segments.push(all[fi].sub_segment(from_loc.parameter, to_loc.parameter));
            } else if fi < ti {
                segments.push(all[fi].sub_segment(from_loc.parameter, 1.0));
                segments.extend_from_slice(&all[fi + 1..ti]);
                segments.push(all[ti].sub_segment(0.0, to_loc.parameter));
            }
        }
        segments.retain(|seg| !seg.is_degenerate());

        if let Some(first) = segments.first_mut() {
            *first = first.with_endpoints(from_point, first.end());
        }
        if let Some(last) = segments.last_mut() {
            *last = last.with_endpoints(last.start(), to_point);
        }
        Self::from_segments(from_point, &segments)
    }
}

/// Sorts intersections along the path and merges hits at the same location.
pub fn merge_intersections(hits: &mut Vec<IntersectionPoint>) {
    hits.sort_by(|a, b| a.location.cmp_along(&b.location));
    hits.dedup_by(|a, b| {
        same_location(&a.location, &b.location)
            || (a.location.curve_index == b.location.curve_index
                && (a.point - b.point).norm() < POINT_MERGE_TOLERANCE)
    });
}

fn same_location(a: &CurveLocation, b: &CurveLocation) -> bool {
    a.curve_index == b.curve_index && (a.parameter - b.parameter).abs() < PARAMETER_TOLERANCE
}

/// Segments bridging `from → to`: the insert path pinned onto both points, or
/// a straight line.
fn snapped_insert(insert: Option<&Path>, from: Point2, to: Point2) -> Vec<Segment> {
    let mut segments: Vec<Segment> = insert
        .map(|path| path.segments().filter(|s| !s.is_degenerate()).collect())
        .unwrap_or_default();
    if segments.is_empty() {
        if (to - from).norm() > TOLERANCE {
            segments.push(Segment::Line {
                start: from,
                end: to,
            });
        }
        return segments;
    }
    if let Some(first) = segments.first_mut() {
        *first = first.with_endpoints(from, first.end());
    }
    if let Some(last) = segments.last_mut() {
        *last = last.with_endpoints(last.start(), to);
    }
    segments
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn identity(point: Point2) -> Point2 {
        point
    }

    fn square() -> Path {
        Path::from_points(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)], true).unwrap()
    }

    #[test]
    fn from_points_closed_adds_closing_line() {
        let sq = square();
        assert!(sq.is_closed());
        assert_eq!(sq.command_count(), 4);
        assert_eq!(sq.end_point(), p(0.0, 0.0));
    }

    #[test]
    fn from_points_rejects_empty() {
        assert!(Path::from_points(&[], false).is_err());
        assert!(Path::from_points(&[p(f64::NAN, 0.0)], false).is_err());
    }

    #[test]
    fn square_area_and_bbox() {
        let sq = square();
        assert_abs_diff_eq!(sq.signed_area(), 100.0, epsilon = 1e-9);
        let bbox = sq.exact_bbox();
        assert_eq!(bbox.min, p(0.0, 0.0));
        assert_eq!(bbox.max, p(10.0, 10.0));
    }

    #[test]
    fn intersection_merges_shared_vertex_hits() {
        // The line passes exactly through the corner (10, 0).
        let hits = square().intersection(&p(5.0, -5.0), &p(15.0, 5.0));
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert_eq!(hits[0].location, CurveLocation::new(1, 0.0));
    }

    #[test]
    fn intersection_sorted_along_path() {
        let hits = square().intersection(&p(5.0, 12.0), &p(5.0, -2.0));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].location.curve_index, 0);
        assert_eq!(hits[1].location.curve_index, 2);
    }

    #[test]
    fn split_produces_k_plus_one_pieces() {
        let line = Path::from_points(&[p(0.0, 0.0), p(10.0, 0.0)], false).unwrap();
        let pieces = line.split_at(
            &[CurveLocation::new(0, 0.7), CurveLocation::new(0, 0.2)],
            &identity,
        );
        assert_eq!(pieces.len(), 3);
        assert_abs_diff_eq!(pieces[0].end_point().x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pieces[1].start_point().x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pieces[1].end_point().x, 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pieces[2].end_point().x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn split_closed_path_keeps_corners() {
        let pieces = square().split_at(
            &[CurveLocation::new(0, 0.5), CurveLocation::new(1, 0.5)],
            &identity,
        );
        assert_eq!(pieces.len(), 3);
        // (5,0) → (10,0) → (10,5)
        assert_eq!(pieces[1].command_count(), 2);
        // (10,5) → (10,10) → (0,10) → (0,0)
        assert_eq!(pieces[2].command_count(), 3);
    }

    #[test]
    fn sub_path_wraps_on_closed_path() {
        let sub = square().sub_path(CurveLocation::new(3, 0.5), CurveLocation::new(0, 0.5), &identity);
        assert_eq!(sub.start_point(), p(0.0, 5.0));
        assert_eq!(sub.end_point(), p(5.0, 0.0));
        assert_eq!(sub.command_count(), 2);
    }

    #[test]
    fn spliced_replaces_forward_span() {
        let cut = Path::from_points(&[p(5.0, 0.0), p(5.0, 5.0), p(10.0, 5.0)], false).unwrap();
        let result = square().spliced(
            CurveLocation::new(0, 0.5),
            CurveLocation::new(1, 0.5),
            Some(&cut),
            &identity,
        );
        assert!(result.is_closed());
        assert_abs_diff_eq!(result.signed_area(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn spliced_wrapping_span_starts_at_to() {
        let result = square().spliced(
            CurveLocation::new(2, 0.5),
            CurveLocation::new(1, 0.5),
            None,
            &identity,
        );
        assert_eq!(result.start_point(), p(10.0, 5.0));
        assert!(result.is_closed());
        // Triangle (10,5) → (10,10) → (5,10).
        assert_abs_diff_eq!(result.area(), 12.5, epsilon = 1e-9);
    }

    #[test]
    fn reversed_flips_orientation() {
        let rev = square().reversed();
        assert!(rev.is_closed());
        assert_abs_diff_eq!(rev.signed_area(), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn concatenated_rejoins_wrapped_pieces() {
        let pieces = square().split_at(
            &[CurveLocation::new(1, 0.5), CurveLocation::new(3, 0.5)],
            &identity,
        );
        let joined = pieces[2].concatenated(&pieces[0]);
        assert!(!joined.is_closed());
        assert_eq!(joined.start_point(), p(0.0, 5.0));
        assert_eq!(joined.end_point(), p(10.0, 5.0));
        assert_eq!(joined.command_count(), 3);
    }

    #[test]
    fn union_joins_and_closes() {
        let a = Path::from_points(&[p(0.0, 0.0), p(4.0, 0.0)], false).unwrap();
        let b = Path::from_points(&[p(4.0, 4.0), p(0.0, 4.0)], false).unwrap();
        let u = a.union(&b);
        assert!(u.is_closed());
        assert_abs_diff_eq!(u.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn containment_with_curves() {
        let lens = Path::new(p(0.0, 0.0))
            .quad_to(p(2.0, 2.0), p(4.0, 0.0))
            .quad_to(p(2.0, -2.0), p(0.0, 0.0))
            .as_closed();
        assert!(lens.closed_contains_point(&p(2.0, 0.5)));
        assert!(!lens.closed_contains_point(&p(2.0, 1.5)));
        assert!(!lens.closed_contains_point(&p(9.0, 0.0)));
    }

    #[test]
    fn nearest_point_on_square_edge() {
        let (loc, point) = square().nearest_point_to(&p(12.0, 4.0));
        assert_eq!(loc.curve_index, 1);
        assert_abs_diff_eq!(point.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn tangent_follows_direction() {
        let t = square().tangent_at(CurveLocation::new(2, 0.5)).unwrap();
        assert_abs_diff_eq!(t.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn polyline_approximation_has_only_lines() {
        let curve = Path::new(p(0.0, 0.0)).quad_to(p(5.0, 10.0), p(10.0, 0.0));
        let poly = curve.polyline_approximation(0.05);
        assert!(poly.command_count() > 1);
        assert!(poly
            .commands()
            .iter()
            .all(|c| matches!(c, PathCommand::LineTo(_))));
        assert_eq!(poly.end_point(), p(10.0, 0.0));
    }
}

//! Smooth spline paths through ordered point sequences.

use crate::geometry::Point;

/// A single drawing command of a [`SplinePath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a contour at the given point.
    MoveTo(Point),
    /// Cubic Bezier segment from the current point.
    CubicTo {
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// Segment end point.
        to: Point,
    },
}

/// An ordered command sequence forming a smooth curve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplinePath {
    commands: Vec<PathCommand>,
}

impl SplinePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path's drawing commands, in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawing commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Samples the path into a polyline, `segments_per_curve` line segments
    /// per cubic. Anchor points always appear in the output.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Point> {
        let segments = segments_per_curve.max(1);
        let mut points = Vec::new();
        let mut cursor: Option<Point> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => {
                    points.push(to);
                    cursor = Some(to);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if let Some(start) = cursor {
                        for step in 1..=segments {
                            let t = step as f64 / segments as f64;
                            points.push(cubic_bezier(start, ctrl1, ctrl2, to, t));
                        }
                    } else {
                        points.push(to);
                    }
                    cursor = Some(to);
                }
            }
        }

        points
    }
}

/// Evaluates a cubic Bezier at parameter `t` in `[0, 1]`.
pub fn cubic_bezier(start: Point, ctrl1: Point, ctrl2: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    start * (u * u * u) + ctrl1 * (3.0 * u * u * t) + ctrl2 * (3.0 * u * t * t) + end * (t * t * t)
}

/// Fits a smooth curve through `points` with Catmull-Rom style tangents.
///
/// Walks the sequence once, carrying the previous segment's exit tangent:
/// the first point contributes `(next - current) / 3`, interior points
/// `(next - prev) / 6`, and the last point `(current - prev) / 3`. This gives
/// C1-continuous curvature through every sample point in O(n) with one point
/// of look-ahead and no closed-form spline solve.
pub fn build_spline(points: &[Point]) -> SplinePath {
    let mut path = SplinePath::new();
    let mut prev_delta = Point::ZERO;

    for (i, &current) in points.iter().enumerate() {
        let prev = if i > 0 { Some(points[i - 1]) } else { None };
        let next = points.get(i + 1).copied();

        let delta = match (prev, next) {
            (None, Some(next)) => (next - current) * (1.0 / 3.0),
            (Some(prev), Some(next)) => (next - prev) * (1.0 / 6.0),
            (Some(prev), None) => (current - prev) * (1.0 / 3.0),
            (None, None) => Point::ZERO,
        };

        match prev {
            None => path.commands.push(PathCommand::MoveTo(current)),
            Some(prev) => path.commands.push(PathCommand::CubicTo {
                ctrl1: prev + prev_delta,
                ctrl2: current - delta,
                to: current,
            }),
        }

        prev_delta = delta;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchors() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.5),
        ]
    }

    #[test]
    fn test_empty_input_builds_empty_path() {
        let path = build_spline(&[]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_single_point_is_a_bare_move() {
        let point = Point::new(0.3, -0.7);
        let path = build_spline(&[point]);
        assert_eq!(path.commands(), &[PathCommand::MoveTo(point)]);
    }

    #[test]
    fn test_command_count_is_one_per_point() {
        let path = build_spline(&anchors());
        assert_eq!(path.command_count(), 4);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        for command in &path.commands()[1..] {
            assert!(matches!(command, PathCommand::CubicTo { .. }));
        }
    }

    #[test]
    fn test_segments_end_on_anchor_points() {
        let points = anchors();
        let path = build_spline(&points);
        let mut ends = vec![];
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(to) | PathCommand::CubicTo { to, .. } => ends.push(to),
            }
        }
        assert_eq!(ends, points);
    }

    #[test]
    fn test_first_segment_control_points() {
        let points = anchors();
        let path = build_spline(&points);

        // exit tangent of the first point is (p1 - p0) / 3
        let exit = (points[1] - points[0]) * (1.0 / 3.0);
        // entry tangent of an interior point is (p2 - p0) / 6
        let entry = (points[2] - points[0]) * (1.0 / 6.0);

        match path.commands()[1] {
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                assert_eq!(ctrl1, points[0] + exit);
                assert_eq!(ctrl2, points[1] - entry);
                assert_eq!(to, points[1]);
            }
            _ => panic!("expected a cubic segment"),
        }
    }

    #[test]
    fn test_last_segment_entry_tangent() {
        let points = anchors();
        let path = build_spline(&points);

        let entry = (points[3] - points[2]) * (1.0 / 3.0);
        match path.commands()[3] {
            PathCommand::CubicTo { ctrl2, to, .. } => {
                assert_eq!(ctrl2, points[3] - entry);
                assert_eq!(to, points[3]);
            }
            _ => panic!("expected a cubic segment"),
        }
    }

    #[test]
    fn test_two_points_share_the_chord_tangents() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 3.0)];
        let path = build_spline(&points);
        let third = (points[1] - points[0]) * (1.0 / 3.0);
        match path.commands()[1] {
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                assert_eq!(ctrl1, points[0] + third);
                assert_eq!(ctrl2, points[1] - third);
                assert_eq!(to, points[1]);
            }
            _ => panic!("expected a cubic segment"),
        }
    }

    #[test]
    fn test_cubic_bezier_hits_endpoints() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(1.0, 1.0);
        let ctrl1 = Point::new(0.2, 0.8);
        let ctrl2 = Point::new(0.8, 0.2);
        assert_eq!(cubic_bezier(start, ctrl1, ctrl2, end, 0.0), start);
        assert_eq!(cubic_bezier(start, ctrl1, ctrl2, end, 1.0), end);
    }

    #[test]
    fn test_flatten_passes_through_anchors() {
        let points = anchors();
        let flat = build_spline(&points).flatten(8);
        // 1 move + 3 cubics * 8 segments
        assert_eq!(flat.len(), 25);
        for anchor in &points {
            assert!(flat
                .iter()
                .any(|p| (p.x - anchor.x).abs() < 1e-9 && (p.y - anchor.y).abs() < 1e-9));
        }
    }

    #[test]
    fn test_flatten_empty_path() {
        assert!(SplinePath::new().flatten(8).is_empty());
    }
}

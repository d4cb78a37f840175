//! Interpolation of point sequences into path commands
//!
//! `Monotone` uses monotone cubic tangents (Fritsch-Carlson, as in the
//! usual monotone-x curve): the curve never overshoots between two points,
//! so a monotone run of values stays monotone on screen.

use crate::scene::{PathCommand, Point};

use super::options::Curve;

/// Commands that continue a path from `points[0]` through every other point
///
/// The caller is responsible for reaching `points[0]` (move or line).
pub fn through(points: &[Point], curve: Curve) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    match curve {
        Curve::Linear => points[1..]
            .iter()
            .map(|&to| PathCommand::LineTo { to })
            .collect(),
        Curve::Monotone if points.len() == 2 => vec![PathCommand::LineTo { to: points[1] }],
        Curve::Monotone => {
            let tangents = monotone_tangents(points);
            points
                .windows(2)
                .zip(tangents.windows(2))
                .map(|(p, t)| {
                    let (p0, p1) = (p[0], p[1]);
                    let dx = (p1.x - p0.x) / 3.0;
                    PathCommand::CubicTo {
                        c1: Point::new(p0.x + dx, p0.y + dx * t[0]),
                        c2: Point::new(p1.x - dx, p1.y - dx * t[1]),
                        to: p1,
                    }
                })
                .collect()
        }
    }
}

/// Full open path: move to the first point, then interpolate
pub fn open_path(points: &[Point], curve: Curve) -> Vec<PathCommand> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut commands = vec![PathCommand::MoveTo { to: first }];
    commands.extend(through(points, curve));
    commands
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn slope(p0: Point, p1: Point) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        0.0
    } else {
        (p1.y - p0.y) / h
    }
}

/// Tangent at every point; requires at least three points
fn monotone_tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];

    for i in 1..n - 1 {
        let (p0, p1, p2) = (points[i - 1], points[i], points[i + 1]);
        let h0 = p1.x - p0.x;
        let h1 = p2.x - p1.x;
        let s0 = slope(p0, p1);
        let s1 = slope(p1, p2);
        let p = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        t[i] = if tangent.is_finite() { tangent } else { 0.0 };
    }

    // End tangents: one-sided three-point estimate
    t[0] = end_tangent(points[0], points[1], t[1]);
    t[n - 1] = end_tangent(points[n - 2], points[n - 1], t[n - 2]);
    t
}

fn end_tangent(p0: Point, p1: Point, neighbor: f64) -> f64 {
    if p1.x - p0.x == 0.0 {
        neighbor
    } else {
        (3.0 * slope(p0, p1) - neighbor) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_linear_emits_line_segments() {
        let commands = through(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]), Curve::Linear);
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[1], PathCommand::LineTo { to } if to == Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_monotone_two_points_is_straight() {
        let commands = through(&pts(&[(0.0, 0.0), (10.0, 5.0)]), Curve::Monotone);
        assert_eq!(commands, vec![PathCommand::LineTo { to: Point::new(10.0, 5.0) }]);
    }

    #[test]
    fn test_monotone_ends_at_each_point() {
        let input = pts(&[(0.0, 10.0), (10.0, 20.0), (20.0, 15.0), (30.0, 40.0)]);
        let commands = through(&input, Curve::Monotone);
        assert_eq!(commands.len(), 3);
        for (cmd, expected) in commands.iter().zip(&input[1..]) {
            match cmd {
                PathCommand::CubicTo { to, .. } => assert_eq!(to, expected),
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_monotone_flat_at_local_extremum() {
        // Middle point is a peak, so its tangent must be horizontal
        let input = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        let commands = through(&input, Curve::Monotone);
        match (commands[0], commands[1]) {
            (PathCommand::CubicTo { c2, .. }, PathCommand::CubicTo { c1, .. }) => {
                assert_eq!(c2.y, 10.0);
                assert_eq!(c1.y, 10.0);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_monotone_control_points_stay_in_range() {
        let input = pts(&[(0.0, 0.0), (10.0, 1.0), (20.0, 100.0), (30.0, 101.0)]);
        for cmd in through(&input, Curve::Monotone) {
            if let PathCommand::CubicTo { c1, c2, .. } = cmd {
                assert!((0.0..=101.0).contains(&c1.y));
                assert!((0.0..=101.0).contains(&c2.y));
            }
        }
    }

    #[test]
    fn test_open_path_starts_with_move() {
        let commands = open_path(&pts(&[(1.0, 2.0)]), Curve::Monotone);
        assert_eq!(commands, vec![PathCommand::MoveTo { to: Point::new(1.0, 2.0) }]);
        assert!(open_path(&[], Curve::Linear).is_empty());
    }
}

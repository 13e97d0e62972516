//! Intersection tests, projections and distances between points, lines and segments.
//!
//! Suffixes name the kinds of the arguments: `l` for a line, `s` for a segment and
//! `p` for a point.

use super::{ccw, Line, Point};
use crate::geometry::EPS;
use crate::{Error, Result};

pub fn intersects_ll(a: Line, b: Line) -> bool {
    // not parallel, or the same line
    !intersects_lp(Line::new(Point::ORIGIN, a.direction()), b.direction()) || intersects_lp(a, b.a)
}

pub fn intersects_ls(a: Line, s: Line) -> bool {
    let dir = a.direction();
    dir.cross(s.a - a.a) * dir.cross(s.b - a.a) < EPS
}

pub fn intersects_lp(a: Line, p: Point) -> bool {
    let c = ccw(a.a, a.b, p);
    c != 1 && c != -1
}

pub fn intersects_ss(a: Line, b: Line) -> bool {
    ccw(a.a, a.b, b.a) * ccw(a.a, a.b, b.b) <= 0 && ccw(b.a, b.b, a.a) * ccw(b.a, b.b, a.b) <= 0
}

pub fn intersects_sp(s: Line, p: Point) -> bool {
    ccw(s.a, s.b, p) == 0
}

/// The foot of the perpendicular from `p` to the line `a`.
pub fn projection(a: Line, p: Point) -> Point {
    let dir = a.direction();
    let t = dir.dot(p - a.a) / dir.norm_sqr();
    a.a + dir * t
}

/// The mirror image of `p` across the line `a`.
pub fn reflection(a: Line, p: Point) -> Point {
    p + (projection(a, p) - p) * 2.0
}

pub fn distance_lp(a: Line, p: Point) -> f64 {
    projection(a, p).dist(p)
}

pub fn distance_ll(a: Line, b: Line) -> f64 {
    if intersects_ll(a, b) {
        0.0
    } else {
        distance_lp(a, b.a)
    }
}

pub fn distance_ls(a: Line, s: Line) -> f64 {
    if intersects_ls(a, s) {
        0.0
    } else {
        distance_lp(a, s.a).min(distance_lp(a, s.b))
    }
}

pub fn distance_sp(s: Line, p: Point) -> f64 {
    let foot = projection(s, p);
    if intersects_sp(s, foot) {
        foot.dist(p)
    } else {
        p.dist(s.a).min(p.dist(s.b))
    }
}

pub fn distance_ss(a: Line, b: Line) -> f64 {
    if intersects_ss(a, b) {
        return 0.0;
    }
    distance_sp(a, b.a)
        .min(distance_sp(a, b.b))
        .min(distance_sp(b, a.a).min(distance_sp(b, a.b)))
}

/// The intersection of two lines. If they are the same line, returns `a.a`.
///
/// Fails with [`Error::ParallelLines`] if the lines are parallel and distinct.
pub fn crosspoint_ll(a: Line, b: Line) -> Result<Point> {
    let dir_a = a.direction();
    let dir_b = b.direction();
    // scaling dir_a by d1 / d2 reaches b
    let d1 = dir_b.cross(b.a - a.a);
    let d2 = dir_b.cross(dir_a);
    if d1.abs() < EPS && d2.abs() < EPS {
        return Ok(a.a);
    }
    if d2.abs() < EPS {
        return Err(Error::ParallelLines);
    }
    Ok(a.a + dir_a * (d1 / d2))
}

#[cfg(test)]
mod tests {
    use super::super::{p, Line};
    use super::*;

    // a and b cross. a and b_far don't. b and b_far are on one line, but don't overlap.
    fn figure() -> (Line, Line, Line) {
        (
            Line::new(p(0.0, 0.0), p(1.0, 2.0)),
            Line::new(p(1.0, 0.0), p(-4.0, 1.0)),
            Line::new(p(11.0, -2.0), p(16.0, -3.0)),
        )
    }

    fn shifted(l: Line) -> Line {
        Line::new(l.a + p(1.0, 1.0), l.b + p(1.0, 1.0))
    }

    #[test]
    fn intersections() {
        let (a, b, far) = figure();
        assert!(intersects_ll(a, b));
        assert!(intersects_ll(a, shifted(b)));
        assert!(intersects_ls(a, b));
        assert!(!intersects_lp(a, b.a));
        assert!(!intersects_lp(a, b.b));
        assert!(intersects_ss(a, b));
        assert!(!intersects_sp(a, b.a));

        assert!(intersects_ll(a, far));
        assert!(!intersects_ls(a, far));
        assert!(!intersects_ss(a, far));
        assert!(intersects_ls(far, a));
        assert!(!intersects_ss(far, a));
        assert!(intersects_ll(b, far));
        assert!(intersects_ls(b, far));
        assert!(intersects_ls(far, b));
        assert!(intersects_lp(b, far.a));
        assert!(!intersects_ss(b, far));
        assert!(!intersects_ll(b, shifted(far)));

        assert!(intersects_ll(a, a));
        assert!(intersects_lp(a, a.a));
        assert!(intersects_ss(a, a));
        assert!(intersects_sp(a, a.b));

        // c passes through a.b
        let c = Line::new(p(3287.0, 282.0 + 2844.0 / 4379.0), p(-2154281.0 / 187.0, -982.0));
        assert!(intersects_ss(a, c));
        assert!(!intersects_ss(a, Line::new(c.a + p(0.0, 1.0), c.b)));
        assert!(!intersects_ss(a, Line::new(c.a, c.b + p(-0.1, 0.0))));
    }

    #[test]
    fn crosspoints() {
        let (a, b, far) = figure();
        assert_eq!(crosspoint_ll(a, b), Ok(p(1.0 / 11.0, 2.0 / 11.0)));
        let c = Line::new(p(3287.0, 282.0 + 2844.0 / 4379.0), p(-2154281.0 / 187.0, -982.0));
        assert_eq!(crosspoint_ll(a, c), Ok(a.b));
        assert_eq!(crosspoint_ll(b, far), Ok(b.a));
        assert_eq!(crosspoint_ll(b, shifted(far)), Err(Error::ParallelLines));
    }

    #[test]
    fn projections() {
        let l = Line::new(p(0.0, 0.0), p(2.0, 0.0));
        assert_eq!(projection(l, p(5.0, 3.0)), p(5.0, 0.0));
        assert_eq!(reflection(l, p(5.0, 3.0)), p(5.0, -3.0));
        let diagonal = Line::new(p(0.0, 0.0), p(1.0, 1.0));
        assert_eq!(reflection(diagonal, p(2.0, 0.0)), p(0.0, 2.0));
    }

    #[test]
    fn distances() {
        let close = |x: f64, y: f64| (x - y).abs() < EPS;
        let (a, b, far) = figure();
        let sqrt = f64::sqrt;
        assert!(close(distance_ll(a, b), 0.0));
        assert!(close(distance_ls(a, b), 0.0));
        assert!(close(distance_ss(a, b), 0.0));
        assert!(close(distance_lp(a, b.a), 2.0 / sqrt(5.0)));
        assert!(close(distance_sp(a, b.a), 2.0 / sqrt(5.0)));
        assert!(close(distance_lp(a, b.b), 9.0 / sqrt(5.0)));
        assert!(close(distance_sp(a, b.b), sqrt(17.0)));
        assert!(close(distance_lp(a, p(1.0, 1.0)), 1.0 / sqrt(5.0)));

        assert!(close(distance_ll(a, far), 0.0));
        assert!(close(distance_ls(a, far), 24.0 / sqrt(5.0)));
        assert!(close(distance_ls(far, a), 0.0));
        assert!(close(distance_ss(a, far), sqrt(116.0)));
        assert!(close(distance_ll(b, far), 0.0));
        assert!(close(distance_ls(b, far), 0.0));
        assert!(close(distance_ss(b, far), sqrt(104.0)));
        assert!(close(distance_sp(b, far.b), sqrt(234.0)));
        assert!(close(distance_ll(b, shifted(far)), 3.0 * sqrt(2.0 / 13.0)));

        assert!(close(distance_ll(a, a), 0.0));
        assert!(close(distance_ls(a, a), 0.0));
        assert!(close(distance_lp(a, a.a), 0.0));
        assert!(close(distance_sp(a, a.b), 0.0));

        let unit = Line::new(p(0.0, 0.0), p(2.0, 0.0));
        assert!(close(distance_ss(unit, Line::new(p(1.0, 1.0), p(1.0, 2.0))), 1.0));

        let nearly = Line::new(p(0.0, 8385.0 / 4379.0), p(-8385.0 / 374.0, 0.0));
        assert!(close(distance_ls(nearly, a), 1.0 / (13.0 * sqrt(114293.0))));
    }
}

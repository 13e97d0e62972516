//! Projections and distances between points, lines, segments and planes.
//!
//! A plane is given by a point `a` on it and a normal `n`.

use super::{ccw, Line3, Point3};
use crate::geometry::{approx_eq, EPS};

/// The foot of the perpendicular from `p` to the plane.
pub fn project_on_plane(a: Point3, n: Point3, p: Point3) -> Point3 {
    let t = n.dot(p - a) / n.norm_sqr();
    p - n * t
}

/// The foot of the perpendicular from `p` to the line.
pub fn project_on_line(l: Line3, p: Point3) -> Point3 {
    let dir = l.direction();
    let t = dir.dot(p - l.a) / dir.norm_sqr();
    l.a + dir * t
}

pub fn distance_plane_p(a: Point3, n: Point3, p: Point3) -> f64 {
    project_on_plane(a, n, p).dist(p)
}

pub fn distance_lp(l: Line3, p: Point3) -> f64 {
    project_on_line(l, p).dist(p)
}

pub fn distance_sp(s: Line3, p: Point3) -> f64 {
    let foot = project_on_line(s, p);
    let to_a = s.a - foot;
    let to_b = s.b - foot;
    let dot = to_a.dot(to_b);
    // the foot is on the segment when the ends lie in opposite directions from it
    if dot < EPS && approx_eq(dot * dot, to_a.norm_sqr() * to_b.norm_sqr()) {
        foot.dist(p)
    } else {
        s.a.dist(p).min(s.b.dist(p))
    }
}

/// The distance between two lines. [`crosspoint_ll`] gives the closest point on `a`.
pub fn distance_ll(a: Line3, b: Line3) -> f64 {
    let n = a.direction().cross(b.direction());
    if n.norm_sqr() < EPS {
        return distance_lp(a, b.a);
    }
    // the plane through b spanned by n is parallel to a
    distance_plane_p(b.a, n, a.a)
}

pub fn distance_ls(a: Line3, s: Line3) -> f64 {
    let n = a.direction().cross(s.direction());
    if n.norm_sqr() < EPS {
        return distance_lp(a, s.a);
    }
    // seen along n, does s cross a?
    if ccw(a.a, a.b, s.a, n) * ccw(a.a, a.b, s.b, n) <= 0 {
        return distance_plane_p(s.a, n, a.a);
    }
    distance_lp(a, s.a).min(distance_lp(a, s.b))
}

pub fn distance_ss(a: Line3, b: Line3) -> f64 {
    let n = a.direction().cross(b.direction());
    if n.norm_sqr() > EPS
        && ccw(a.a, a.b, b.a, n) * ccw(a.a, a.b, b.b, n) <= 0
        && ccw(b.a, b.b, a.a, n) * ccw(b.a, b.b, a.b, n) <= 0
    {
        return distance_plane_p(b.a, n, a.a);
    }
    distance_sp(a, b.a)
        .min(distance_sp(a, b.b))
        .min(distance_sp(b, a.a).min(distance_sp(b, a.b)))
}

/// The intersection of two lines. Skew lines give the point of `a` closest to `b`,
/// and parallel lines give `a.a`.
pub fn crosspoint_ll(a: Line3, b: Line3) -> Point3 {
    let dir_a = a.direction();
    let dir_b = b.direction();
    let n = dir_a.cross(dir_b);
    if n.norm_sqr() < EPS {
        return a.a;
    }
    // seen along n this is the planar crossing
    let d1 = n.dot(dir_b.cross(b.a - a.a));
    let d2 = n.dot(dir_b.cross(dir_a));
    a.a + dir_a * (d1 / d2)
}

#[cfg(test)]
mod tests {
    use super::super::p;
    use super::*;

    fn l(a: Point3, b: Point3) -> Line3 {
        Line3::new(a, b)
    }

    fn close(x: f64, y: f64) -> bool {
        approx_eq(x, y)
    }

    #[test]
    fn projections() {
        let up = p(0.0, 0.0, 2.0);
        assert_eq!(project_on_plane(p(5.0, 5.0, 1.0), up, p(1.0, 2.0, 3.0)), p(1.0, 2.0, 1.0));
        assert!(close(distance_plane_p(p(5.0, 5.0, 1.0), up, p(1.0, 2.0, 3.0)), 2.0));
        let axis = l(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        assert_eq!(project_on_line(axis, p(-3.0, 4.0, 1.0)), p(-3.0, 0.0, 0.0));
        assert!(close(distance_sp(axis, p(-3.0, 4.0, 0.0)), 5.0));
        assert!(close(distance_sp(axis, p(1.0, 4.0, 0.0)), 4.0));
    }

    #[test]
    fn distances() {
        let sqrt = f64::sqrt;
        let (o, a) = (p(0.0, 0.0, 0.0), p(3.0, 6.0, 1.0));
        let b = l(p(1.0, 2.0, 3.0), p(9.0, 8.0, 7.0));
        assert!(close(distance_lp(l(o, a), p(1.0, 2.0, 3.0)), 4.0 * sqrt(10.0 / 23.0)));
        assert!(close(distance_ll(l(o, a), b), 4.0 * sqrt(10.0 / 31.0)));
        assert!(close(distance_ll(l(p(-8.0, -1.0, -4.0), p(-3.0, -6.0, -1.0)), b), 8.0 * sqrt(10.0 / 159.0)));
        assert!(close(
            distance_ll(l(p(0.0, 12.0, 0.0), a), l(p(65.0, -8.0, 16.0), p(7.0, 8.0, 16.0))),
            468.0 * sqrt(5.0 / 4681.0)
        ));

        let diagonal = l(o, p(1.0, 1.0, 1.0));
        let far = l(p(8.0, 8.0, 1.0), p(7.0, 7.0, -1.0));
        assert!(close(distance_ll(diagonal, far), 0.0));
        assert!(close(distance_ls(diagonal, far), 7.0 * sqrt(2.0 / 3.0)));
        assert!(close(distance_ls(far, diagonal), 14.0 / sqrt(3.0)));
        assert!(close(distance_ss(diagonal, far), 2.0 * sqrt(19.0)));

        let crossing = l(p(1.0, 0.0, 1.0), p(0.0, 1.0, 0.0));
        let short = l(o, p(0.25, 0.25, 0.25));
        assert!(close(distance_ll(diagonal, crossing), 0.0));
        assert!(close(distance_ss(diagonal, crossing), 0.0));
        assert!(close(distance_ss(short, crossing), 1.0 / sqrt(6.0)));
        assert!(close(distance_ls(short, crossing), 0.0));
        assert!(close(distance_ll(short, crossing), 0.0));

        let stub = l(p(1.0, 0.0, 1.0), p(0.75, 0.25, 0.75));
        assert!(close(distance_ss(diagonal, stub), 1.0 / sqrt(6.0)));
        assert!(close(distance_ls(diagonal, stub), 1.0 / sqrt(6.0)));
        assert!(close(distance_ll(diagonal, stub), 0.0));
    }

    #[test]
    fn crosspoints() {
        let diagonal = l(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let crossing = l(p(1.0, 0.0, 1.0), p(0.0, 1.0, 0.0));
        assert_eq!(crosspoint_ll(diagonal, crossing), p(0.5, 0.5, 0.5));
        // skew lines: the point of the x axis below the other line
        let x_axis = l(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let above = l(p(3.0, -1.0, 2.0), p(3.0, 1.0, 2.0));
        assert_eq!(crosspoint_ll(x_axis, above), p(3.0, 0.0, 0.0));
        let parallel = l(p(0.0, 1.0, 0.0), p(2.0, 1.0, 0.0));
        assert_eq!(crosspoint_ll(x_axis, parallel), x_axis.a);
    }
}

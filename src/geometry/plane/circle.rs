//! Circles, given by a center and a radius.

use super::{crosspoint_ll, distance_lp, distance_sp, projection, Line, Point};
use crate::geometry::{approx_eq, EPS};
use crate::Result;

/// The distance between the line `a` and the disc around `c`.
pub fn distance_lc(a: Line, c: Point, r: f64) -> f64 {
    (distance_lp(a, c) - r).max(0.0)
}

/// The distance between the segment `s` and the circle (not the disc) around `c`.
pub fn distance_sc(s: Line, c: Point, r: f64) -> f64 {
    let d1 = (c - s.a).norm_sqr();
    let d2 = (c - s.b).norm_sqr();
    let a_inside = d1 < r * r;
    let b_inside = d2 < r * r;
    if a_inside && b_inside {
        return r - d1.max(d2).sqrt();
    }
    if a_inside != b_inside {
        return 0.0;
    }
    (distance_sp(s, c) - r).max(0.0)
}

/// The points where the line `a` meets the circle. One point if it touches.
pub fn crosspoint_lc(a: Line, c: Point, r: f64) -> Vec<Point> {
    let foot = projection(a, c);
    let foot_sqr = foot.dist_sqr(c);
    if approx_eq(r * r, foot_sqr) {
        return vec![foot];
    }
    if r * r < foot_sqr {
        return Vec::new();
    }
    let dir = a.direction();
    let offset = dir * ((r * r - foot_sqr).sqrt() / dir.norm());
    vec![foot + offset, foot - offset]
}

/// How two circles lie:
///
/// * `2`: touching from outside,
/// * `3`: touching from inside,
/// * `-1`: one strictly inside the other,
/// * `-2`: apart,
/// * `1`: crossing at two points.
pub fn intersection_cc(a: Point, ar: f64, b: Point, br: f64) -> i32 {
    let d = a.dist_sqr(b);
    let outer = (ar + br) * (ar + br);
    let inner = (ar - br) * (ar - br);
    if approx_eq(d, outer) {
        2
    } else if approx_eq(d, inner) {
        3
    } else if d < inner {
        -1
    } else if outer < d {
        -2
    } else {
        1
    }
}

pub fn distance_cc(a: Point, ar: f64, b: Point, br: f64) -> f64 {
    let d = a.dist(b);
    if d + EPS < (ar - br).abs() {
        (ar - br).abs() - d
    } else if ar + br + EPS < d {
        d - ar - br
    } else {
        0.0
    }
}

/// The points where two circles meet. Empty for concentric circles.
pub fn crosspoint_cc(a: Point, ar: f64, b: Point, br: f64) -> Vec<Point> {
    let ab = b - a;
    let d = ab.norm();
    // distance from a to the chord through the crosspoints, by the law of cosines
    let to_chord = (ab.norm_sqr() + ar * ar - br * br) / (2.0 * d);
    if d < EPS || ar < to_chord.abs() {
        return Vec::new();
    }
    let half_chord = (ar * ar - to_chord * to_chord).sqrt();
    let normal = ab * Point::new(0.0, 1.0) * (half_chord / d);
    let mid = a + ab * (to_chord / d);
    let (p, q) = (mid + normal, mid - normal);
    if p == q {
        vec![p]
    } else {
        vec![p, q]
    }
}

/// The points where the tangents through `p` touch the circle, or nothing when `p` is
/// inside. A point on the circle is returned twice.
pub fn tangent(c: Point, r: f64, p: Point) -> Vec<Point> {
    let pc = c - p;
    let len = pc.norm();
    if len < r {
        return Vec::new();
    }
    let cos = (pc.norm_sqr() - r * r).sqrt() / len;
    let sin = r / len;
    let left = pc * Point::new(cos, sin);
    let right = pc * Point::new(cos, -sin);
    vec![p + left * cos, p + right * cos]
}

/// The common tangents of two circles, as returned by [`tangent_lines`]. Each tangent
/// runs from its touching point on the first circle to the one on the second.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CommonTangents {
    /// Tangents with both circles on the same side.
    pub outer: Vec<Line>,
    /// Tangents separating the circles.
    pub inner: Vec<Line>,
}

/// The common tangents of two circles.
///
/// For each kind, the tangent touching the first circle on the left of `a -> b` comes
/// first. Where the two tangents of a kind coincide, only one is listed. A circle inside
/// the other has no common tangents, and neither do identical circles.
pub fn tangent_lines(a: Point, ar: f64, b: Point, br: f64) -> CommonTangents {
    let mut tangents = CommonTangents::default();
    let d = a.dist(b);
    let v = (b - a) * (1.0 / d);

    for sign in [1.0, -1.0] {
        // signed sine of the angle between a -> b and the tangent
        let sin = (ar - sign * br) / d;
        if sin * sin > 1.0 + EPS || sin.is_nan() {
            break;
        }
        let cos = (1.0 - sin * sin).max(0.0).sqrt();
        let lines = if sign > 0.0 {
            &mut tangents.outer
        } else {
            &mut tangents.inner
        };
        for side in [1.0, -1.0] {
            let normal = v * Point::new(sin, cos * side);
            lines.push(Line::new(a + normal * ar, b + normal * (sign * br)));
            if cos < EPS {
                break;
            }
        }
    }
    tangents
}

/// The center of the circle through `a`, `b` and `c`.
///
/// Fails with [`crate::Error::ParallelLines`] if the points are collinear.
pub fn circumcenter(a: Point, b: Point, c: Point) -> Result<Point> {
    let a = (a - c) * 0.5;
    let b = (b - c) * 0.5;
    let up = Point::new(0.0, 1.0);
    // the perpendicular bisectors of ca and cb
    let center = crosspoint_ll(Line::new(a, a + a * up), Line::new(b, b + b * up))?;
    Ok(center + c)
}

/// The center of the circle touching the three sides of the triangle.
pub fn incenter(a: Point, b: Point, c: Point) -> Point {
    let la = b.dist(c);
    let lb = c.dist(a);
    let lc = a.dist(b);
    (a * la + b * lb + c * lc) * (1.0 / (la + lb + lc))
}

/// The centers of the circles of radius `r` through `a` and `b`.
pub fn circles_through_points_with_radius(a: Point, b: Point, r: f64) -> Vec<Point> {
    let half = (b - a) * 0.5;
    let d_sqr = half.norm_sqr();
    if d_sqr == 0.0 || d_sqr > r * r {
        return Vec::new();
    }
    let to_center = (r * r - d_sqr).sqrt();
    let mid = a + half;
    if to_center == 0.0 {
        return vec![mid];
    }
    let normal = half * Point::new(0.0, 1.0) * (to_center / d_sqr.sqrt());
    vec![mid + normal, mid - normal]
}

/// The centers of the circles through `a` and `b` tangent to the line `l`.
pub fn circles_through_points_with_tangent(a: Point, b: Point, l: Line) -> Vec<Point> {
    // A center p lies on the bisector p = mid + k m, and |n| |p - a| = n . (p - l.a)
    // for the normal n of l. Substituting gives qa k^2 + 2 qb k + qc = 0.
    let n = l.direction() * Point::new(0.0, 1.0);
    let m = (b - a) * Point::new(0.0, 0.5);
    let mid = (a + b) * 0.5;

    let n_dot_m = n.dot(m);
    let offset = (mid - l.a).dot(n);
    let qa = n.norm_sqr() * m.norm_sqr() - n_dot_m * n_dot_m;
    let qb = -offset * n_dot_m;
    let qc = n.norm_sqr() * m.norm_sqr() - offset * offset;
    let discriminant = qb * qb - qa * qc;

    if discriminant < -EPS {
        return Vec::new();
    }
    if approx_eq(qa, 0.0) {
        if approx_eq(qb, 0.0) {
            return Vec::new();
        }
        return vec![mid + m * (-qc / qb / 2.0)];
    }
    let t = -qb / qa;
    if discriminant < EPS {
        return vec![mid + m * t];
    }
    let root = discriminant.sqrt() / qa;
    vec![mid + m * (t + root), mid + m * (t - root)]
}

/// The center and radius of the smallest circle containing every point, by repeatedly
/// stepping toward the farthest point with a shrinking step.
pub fn min_enclosing_circle(ps: &[Point]) -> (Point, f64) {
    let mut c = Point::ORIGIN;
    let mut step = 0.5;
    // the final step is 2^-40
    for _ in 0..39 {
        for _ in 0..50 {
            let mut farthest = 0.0;
            let mut k = 0;
            for (j, p) in ps.iter().enumerate() {
                if farthest < p.dist_sqr(c) {
                    farthest = p.dist_sqr(c);
                    k = j;
                }
            }
            if let Some(&p) = ps.get(k) {
                c = c + (p - c) * step;
            }
        }
        step /= 2.0;
    }
    let radius = ps.iter().map(|p| p.dist(c)).fold(0.0, f64::max);
    (c, radius)
}

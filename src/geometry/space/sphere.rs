//! Crossings with spheres.

use super::{project_on_line, project_on_plane, Line3, Point3};
use crate::geometry::{approx_eq, EPS};

/// Where the line crosses the sphere: none, one touching point or two points.
pub fn crosspoint_line_sphere(l: Line3, c: Point3, r: f64) -> Vec<Point3> {
    let foot = project_on_line(l, c);
    let foot_sqr = foot.dist_sqr(c);
    if approx_eq(r * r, foot_sqr) {
        return vec![foot];
    }
    if r * r < foot_sqr {
        return Vec::new();
    }
    let dir = l.direction();
    let offset = dir * ((r * r - foot_sqr).sqrt() / dir.norm());
    vec![foot + offset, foot - offset]
}

/// The center of the circle where two spheres meet. The circle lies in the plane
/// normal to `b - a`. `None` if the spheres don't meet, or are concentric.
pub fn crosspoint_sphere_sphere(a: Point3, ar: f64, b: Point3, br: f64) -> Option<Point3> {
    let ab = b - a;
    let d = ab.norm();
    if d < EPS {
        return None;
    }
    // law of cosines
    let to_circle = (ab.norm_sqr() + ar * ar - br * br) / (2.0 * d);
    if ar < to_circle.abs() {
        return None;
    }
    Some(a + ab * (to_circle / d))
}

/// The center of the circle where the plane through `a` with normal `n` cuts the sphere.
/// Its radius is `sqrt(r² - d²)` for `d` the distance from `c` to the plane.
pub fn crosspoint_plane_sphere(a: Point3, n: Point3, c: Point3, r: f64) -> Option<Point3> {
    let center = project_on_plane(a, n, c);
    if r * r < center.dist_sqr(c) {
        return None;
    }
    Some(center)
}

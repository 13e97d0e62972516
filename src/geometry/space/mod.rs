//! Geometry in space. Coordinates are right handed: x points right, y up and z towards
//! the viewer. Faces are counterclockwise seen from the side their normal points to.

use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;
use std::ops::{Add, Mul, Neg, Sub};

use super::{approx_eq, cmp_approx, EPS};

mod dice;
mod distance;
mod polyhedron;
mod sphere;

pub use dice::Dice;
pub use distance::*;
pub use polyhedron::*;
pub use sphere::*;

#[derive(Clone, Copy, Default, Debug)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    pub fn dot(self, p: Point3) -> f64 {
        self.x * p.x + self.y * p.y + self.z * p.z
    }

    /// Perpendicular to both, with length `|self| |p| |sin θ|`.
    pub fn cross(self, p: Point3) -> Point3 {
        Point3::new(
            self.y * p.z - self.z * p.y,
            self.z * p.x - self.x * p.z,
            self.x * p.y - self.y * p.x,
        )
    }

    pub fn norm_sqr(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    pub fn dist_sqr(self, p: Point3) -> f64 {
        (self - p).norm_sqr()
    }

    pub fn dist(self, p: Point3) -> f64 {
        (self - p).norm()
    }

    /// Lexicographic by `x`, `y`, then `z`, with `EPS` tolerance.
    pub fn cmp_approx(&self, other: &Point3) -> Ordering {
        cmp_approx(self.x, other.x)
            .then_with(|| cmp_approx(self.y, other.y))
            .then_with(|| cmp_approx(self.z, other.z))
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Point3) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Point3) -> Option<Ordering> {
        Some(self.cmp_approx(other))
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, p: Point3) -> Point3 {
        Point3::new(self.x + p.x, self.y + p.y, self.z + p.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, p: Point3) -> Point3 {
        Point3::new(self.x - p.x, self.y - p.y, self.z - p.z)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, k: f64) -> Point3 {
        Point3::new(k * self.x, k * self.y, k * self.z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(x, y, z)
    }
}

/// A line through `a` and `b`, or the segment between them.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Line3 {
    pub a: Point3,
    pub b: Point3,
}

impl Line3 {
    pub const fn new(a: Point3, b: Point3) -> Self {
        Line3 { a, b }
    }

    pub fn direction(&self) -> Point3 {
        self.b - self.a
    }
}

/// The turn `a -> b -> c` as seen looking down `normal`: `1` counterclockwise, `-1`
/// clockwise, `0` when the projections are collinear.
pub fn ccw(a: Point3, b: Point3, c: Point3, normal: Point3) -> i32 {
    let d = normal.dot((b - a).cross(c - a));
    if d > EPS {
        1
    } else if d + EPS < 0.0 {
        -1
    } else {
        0
    }
}

/// `p` rotated by `theta` radians around the unit vector `axis`.
pub fn rotate(p: Point3, axis: Point3, theta: f64) -> Point3 {
    let along = axis * axis.dot(p);
    along + (p - along) * theta.cos() - p.cross(axis) * theta.sin()
}

/// Some vector perpendicular to `n`, not necessarily of unit length.
pub fn perpendicular(n: Point3) -> Point3 {
    let other = if approx_eq(n.x, 0.0) {
        Point3::new(1.0, 0.0, 0.0)
    } else {
        Point3::new(0.0, 1.0, 0.0)
    };
    n.cross(other)
}

/// The scalar triple product: the signed volume of the parallelepiped spanned by the
/// three vectors. A sixth of it is the volume of the tetrahedron they span.
pub fn box_product(a: Point3, b: Point3, c: Point3) -> f64 {
    a.dot(b.cross(c))
}

/// The point at distance `r`, polar angle `theta` from the z axis, and azimuth `phi`.
pub fn spherical_polar(r: f64, theta: f64, phi: f64) -> Point3 {
    Point3::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

/// The great circle distance on the unit sphere between two (latitude, longitude) pairs
/// in radians. Multiply by the radius for other spheres.
pub fn spherical_distance(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let p1 = spherical_polar(1.0, lat1 + FRAC_PI_2, long1);
    let p2 = spherical_polar(1.0, lat2 + FRAC_PI_2, long2);
    p1.dot(p2).clamp(-1.0, 1.0).acos()
}

/// Parses `"x y z  x y z ..."`, for building test figures.
#[cfg(test)]
pub(crate) fn points(description: &str) -> Vec<Point3> {
    let numbers: Vec<f64> = description
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    numbers
        .chunks(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect()
}

#[cfg(test)]
pub(crate) fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

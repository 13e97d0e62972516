//! Plane geometry. The x axis points right, the y axis up, and angles grow
//! counterclockwise.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use super::{approx_eq, cmp_approx, EPS};

mod arrangement;
mod circle;
mod convex_intersection;
mod intersection;
mod polygon;

pub use arrangement::*;
pub use circle::*;
pub use convex_intersection::convex_intersection;
pub use intersection::*;
pub use polygon::*;

/// A point, or a vector from the origin.
#[derive(Clone, Copy, Default, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// `|self| |p| cos θ`
    pub fn dot(self, p: Point) -> f64 {
        self.x * p.x + self.y * p.y
    }

    /// `|self| |p| sin θ`, positive when `p` is counterclockwise from `self`.
    pub fn cross(self, p: Point) -> f64 {
        self.x * p.y - self.y * p.x
    }

    pub fn norm_sqr(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dist_sqr(self, p: Point) -> f64 {
        (self - p).norm_sqr()
    }

    pub fn dist(self, p: Point) -> f64 {
        (self - p).norm()
    }

    /// Rotated counterclockwise by `theta` radians around the origin.
    pub fn rotate(self, theta: f64) -> Point {
        self * Point::new(theta.cos(), theta.sin())
    }

    /// Lexicographic by `x`, then `y`, with `EPS` tolerance.
    pub fn cmp_approx(&self, other: &Point) -> Ordering {
        cmp_approx(self.x, other.x).then_with(|| cmp_approx(self.y, other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        Some(self.cmp_approx(other))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, p: Point) -> Point {
        Point::new(self.x + p.x, self.y + p.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, p: Point) -> Point {
        Point::new(self.x - p.x, self.y - p.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(k * self.x, k * self.y)
    }
}

/// Complex multiplication: `(x + yi)(p.x + p.y i)`.
impl Mul for Point {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        Point::new(self.x * p.x - self.y * p.y, self.x * p.y + p.x * self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A line through `a` and `b`, or the segment between them, depending on the function
/// it is passed to. `a` and `b` should differ.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub const fn new(a: Point, b: Point) -> Self {
        Line { a, b }
    }

    /// The vector from `a` to `b`.
    pub fn direction(&self) -> Point {
        self.b - self.a
    }
}

/// Where `c` lies as seen walking from `a` to `b`:
///
/// * `1`: to the left,
/// * `-1`: to the right,
/// * `2`: on the line, behind `a` (`c--a--b`),
/// * `-2`: on the line, beyond `b` (`a--b--c`), also when `a == b`,
/// * `0`: on the segment `a--c--b`.
pub fn ccw(a: Point, b: Point, c: Point) -> i32 {
    let b = b - a;
    let c = c - a;
    if b.cross(c) > EPS {
        1
    } else if b.cross(c) + EPS < 0.0 {
        -1
    } else if b.dot(c) + EPS < 0.0 {
        2
    } else if b.norm_sqr() < c.norm_sqr() {
        -2
    } else {
        0
    }
}

/// Parses `"x y  x y ..."`, for building test figures.
#[cfg(test)]
pub(crate) fn points(description: &str) -> Vec<Point> {
    let numbers: Vec<f64> = description
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    numbers.chunks(2).map(|c| Point::new(c[0], c[1])).collect()
}

#[cfg(test)]
pub(crate) fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

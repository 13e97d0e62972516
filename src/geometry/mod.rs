//! Floating point geometry in the plane ([`plane`]) and in space ([`space`]).
//!
//! Coordinates are `f64`. Two values closer than [`EPS`] are considered equal, and
//! points compare equal when all their coordinates do. This makes `==` on points
//! approximate and not transitive, which is what geometric predicates want.

pub mod plane;
pub mod space;

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// Whether a point lies inside a polygon or polyhedron.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Containment {
    Outside,
    Inside,
    OnBoundary,
}

/// Orders by `a` with `EPS` tolerance.
pub(crate) fn cmp_approx(a: f64, b: f64) -> std::cmp::Ordering {
    if approx_eq(a, b) {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}

//! Convex polyhedra, as lists of faces. Each face is a polygon, counterclockwise when
//! seen from outside the polyhedron.

use super::{ccw, perpendicular, project_on_plane, Point3};
use crate::geometry::{approx_eq, cmp_approx, Containment, EPS};

/// The faces of the convex hull, by trying every plane through three points. `O(n^4)`.
///
/// If all points lie in one plane, the hull is that polygon twice, facing both ways.
pub fn convex_hull(ps: &[Point3]) -> Vec<Vec<Point3>> {
    let n = ps.len();
    let mut faces = Vec::new();
    let mut coplanar = Vec::new();
    for i1 in 0..n {
        for i2 in i1 + 1..n {
            'planes: for i3 in i2 + 1..n {
                let edge = ps[i2] - ps[i1];
                let normal = edge.cross(ps[i3] - ps[i1]);
                if normal.norm_sqr() < EPS {
                    continue;
                }

                coplanar.clear();
                let mut faces_out = true;
                let mut faces_in = true;
                for (k, &q) in ps.iter().enumerate() {
                    let side = (q - ps[i1]).dot(normal);
                    if approx_eq(side, 0.0) {
                        if k != i1 && k != i2 && k < i3 && edge.cross(q - ps[i1]).norm_sqr() > EPS {
                            // found already through an earlier third point
                            faces_out = false;
                            faces_in = false;
                        }
                        coplanar.push(q);
                    } else if side > 0.0 {
                        faces_out = false;
                    } else {
                        faces_in = false;
                    }
                    if !faces_out && !faces_in {
                        continue 'planes;
                    }
                }

                if faces_out {
                    faces.push(convex_hull_2d(&coplanar, normal));
                }
                if faces_in {
                    faces.push(convex_hull_2d(&coplanar, -normal));
                }
            }
        }
    }
    faces
}

/// The convex hull of the points projected along `normal`, counterclockwise when seen
/// from the side `normal` points to. The points need not be coplanar.
pub fn convex_hull_2d(ps: &[Point3], normal: Point3) -> Vec<Point3> {
    if ps.len() < 2 {
        return ps.to_vec();
    }
    let dir = perpendicular(normal);
    let mut ps = ps.to_vec();
    // descending along dir
    ps.sort_by(|o1, o2| cmp_approx(dir.dot(*o2 - *o1), 0.0));

    let mut hull: Vec<Point3> = Vec::with_capacity(2 * ps.len());
    for &q in &ps {
        while hull.len() >= 2 && ccw(hull[hull.len() - 2], hull[hull.len() - 1], q, normal) <= 0 {
            hull.pop();
        }
        hull.push(q);
    }
    let lower = hull.len();
    for &q in ps.iter().rev().skip(1) {
        while hull.len() > lower && ccw(hull[hull.len() - 2], hull[hull.len() - 1], q, normal) <= 0 {
            hull.pop();
        }
        hull.push(q);
    }
    // the last point closes the loop
    hull.pop();
    hull
}

/// The outward normal of a face with no degenerate vertices among its first three.
/// Not normalized.
pub fn normal_of(face: &[Point3]) -> Point3 {
    (face[1] - face[0]).cross(face[2] - face[1])
}

/// Whether no face has a vertex of another face in front of it. `O(faces * vertices)`.
pub fn is_convex(polyhedron: &[Vec<Point3>]) -> bool {
    polyhedron.iter().enumerate().all(|(i, face)| {
        let normal = normal_of(face);
        polyhedron
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .flat_map(|(_, other)| other)
            .all(|&q| (q - face[0]).dot(normal) <= EPS)
    })
}

/// Locates `p` against a convex polyhedron. `O(faces)`.
pub fn contains_convex(polyhedron: &[Vec<Point3>], p: Point3) -> Containment {
    let mut on_face = false;
    for face in polyhedron {
        let d = (p - face[0]).dot(normal_of(face));
        if approx_eq(d, 0.0) {
            on_face = true;
        } else if d > 0.0 {
            return Containment::Outside;
        }
    }
    if on_face {
        Containment::OnBoundary
    } else {
        Containment::Inside
    }
}

/// The signed area of a planar polygon, positive for counterclockwise seen along its normal.
pub fn area(face: &[Point3]) -> f64 {
    let n = normal_of(face);
    let twice: f64 = (0..face.len())
        .map(|i| n.dot(face[i].cross(face[(i + 1) % face.len()])))
        .sum();
    twice / 2.0 / n.norm()
}

/// The center of mass of a planar polygon.
pub fn centroid(face: &[Point3]) -> Point3 {
    let n = face.len();
    let normal = normal_of(face);
    let normal = normal * (1.0 / normal.norm());
    let mut area_sum = 0.0;
    let mut weighted = Point3::ORIGIN;
    for i in 0..n {
        let (a, b) = (face[i], face[(i + 1) % n]);
        let area = normal.dot(a.cross(b));
        area_sum += area;
        weighted = weighted + (a + b) * area;
    }
    // the sum only sees the in-plane component, put it back on the face
    project_on_plane(face[0], normal, weighted * (1.0 / (area_sum * 3.0)))
}

/// The volume of a polyhedron whose faces are oriented outward, by the divergence theorem.
pub fn volume(polyhedron: &[Vec<Point3>]) -> f64 {
    let sum: f64 = polyhedron
        .iter()
        .map(|face| {
            let n = normal_of(face);
            (n * (1.0 / n.norm())).dot(centroid(face)) * area(face)
        })
        .sum();
    sum / 3.0
}

#[cfg(test)]
mod tests {
    use super::super::{p, points};
    use super::*;

    fn dodecahedron() -> Vec<Point3> {
        let golden = (1.0 + 5f64.sqrt()) / 2.0;
        let mut ps = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let (fx, fy, fz) = (x as f64, y as f64, z as f64);
                    if x * y * z != 0 {
                        ps.push(p(fx, fy, fz));
                    } else if y * z != 0 {
                        ps.push(p(0.0, fy / golden, fz * golden));
                    } else if z * x != 0 {
                        ps.push(p(fx * golden, 0.0, fz / golden));
                    } else if x * y != 0 {
                        ps.push(p(fx / golden, fy * golden, 0.0));
                    }
                }
            }
        }
        ps
    }

    /// Point sets with the volumes of their hulls.
    fn solids() -> Vec<(Vec<Point3>, f64)> {
        let sqrt5 = 5f64.sqrt();
        vec![
            // a cube
            (points("0 0 0  1 1 1  0 0 1  0 1 0  0 1 1  1 0 0  1 0 1  1 1 0  0.5 0.5 0.5  0.5 0 0.5"), 1.0),
            // a pyramid
            (points("0 0 0  1 0 0  0 1 0  1 1 0  0 0 1  0.5 0.5 0  0.5 0.5 0.1"), 1.0 / 3.0),
            // the same, moved
            (points("-5 -10 -10  -4 -10 -10  -5 -9 -10  -4 -9 -10  -5 -10 -9  -4.5 -9.5 -10  -4.5 -9.5 -9.9"), 1.0 / 3.0),
            // flat
            (points("0 0 0  1 0 0  0 1 0  1 1 0  0.5 0.5 0  0.5 0 0"), 0.0),
            // a hexagonal base
            (points("0 0 0  1 0 0  0 1 0  1 1 0  0.6 2 0  0.4 2 0  0 0 1  0.5 0 0"), 8.0 / 15.0),
            // an octahedron
            (points("0.5 0.5 0  0.5 0.5 1  0.5 0 0.5  0.5 1 0.5  0 0.5 0.5  1 0.5 0.5  0.5 0.5 0.5"), 1.0 / 6.0),
            // a stretched octahedron
            (points("3 1 -1.5  3 1 -0.5  3 0.5 -1  3 1.5 -1  2 1 -1  4 1 -1  3 1 -1"), 1.0 / 3.0),
            (dodecahedron(), (15.0 + 7.0 * sqrt5) / 4.0 * (sqrt5 - 1.0).powi(3)),
        ]
    }

    #[test]
    fn hulls() {
        for (ps, _) in solids() {
            let hull = convex_hull(&ps);
            assert!(is_convex(&hull), "{hull:?}");
            for &q in &ps {
                assert_ne!(contains_convex(&hull, q), Containment::Outside, "{q:?}");
            }
        }
        assert_eq!(convex_hull(&dodecahedron()).len(), 12);
        assert_eq!(convex_hull(&solids()[0].0).len(), 6);
    }

    #[test]
    fn point_location() {
        let (cube, _) = &solids()[0];
        let hull = convex_hull(cube);
        assert_eq!(contains_convex(&hull, p(0.5, 0.5, 0.5)), Containment::Inside);
        assert_eq!(contains_convex(&hull, p(0.5, 0.5, 1.0)), Containment::OnBoundary);
        assert_eq!(contains_convex(&hull, p(1.0, 1.0, 1.0)), Containment::OnBoundary);
        assert_eq!(contains_convex(&hull, p(0.5, 0.5, 1.5)), Containment::Outside);
    }

    #[test]
    fn volumes() {
        for (ps, expected) in solids() {
            let v = volume(&convex_hull(&ps));
            assert!(approx_eq(v, expected), "{v} != {expected}");
        }
    }

    #[test]
    fn polygons() {
        assert_eq!(centroid(&points("0 0 0  1 0 0  1 1 0  0 1 0")), p(0.5, 0.5, 0.0));
        assert_eq!(centroid(&points("2 2 2  0 2 2  0 0 2  2 0 2")), p(1.0, 1.0, 2.0));
        assert_eq!(centroid(&points("4 0 0  0 4 0  0 0 4")), p(4.0 / 3.0, 4.0 / 3.0, 4.0 / 3.0));

        assert!(approx_eq(area(&points("0 0 0  1 0 0  1 1 0  0 1 0")), 1.0));
        assert!(approx_eq(area(&points("4 0 0  0 4 0  0 0 4")), 8.0 * 3f64.sqrt()));
        assert_eq!(normal_of(&points("0 0 0  1 0 0  1 1 0")), p(0.0, 0.0, 1.0));

        let square = convex_hull_2d(&points("0 0 0  1 1 0  1 0 0  0 1 0  0.5 0.5 0"), p(0.0, 0.0, 1.0));
        assert_eq!(square.len(), 4);
        assert!(area(&square) > 0.0);
        assert_eq!(normal_of(&square), p(0.0, 0.0, 1.0));
    }
}

//! Polygons, as slices of their vertices in order. Convex polygons are usually
//! expected counterclockwise.

use super::{ccw, crosspoint_ll, Line, Point};
use crate::geometry::{approx_eq, Containment, EPS};

/// Andrew's monotone chain. The hull is counterclockwise, starting from the smallest point,
/// and skips vertices in the middle of an edge. `O(n log n)`.
pub fn convex_hull(ps: &[Point]) -> Vec<Point> {
    let mut ps = ps.to_vec();
    if ps.len() < 2 {
        return ps;
    }
    ps.sort_by(Point::cmp_approx);

    let mut hull = Vec::with_capacity(2 * ps.len());
    for &p in &ps {
        push_turning_left(&mut hull, 1, p);
    }
    let lower_len = hull.len();
    for &p in ps.iter().rev().skip(1) {
        push_turning_left(&mut hull, lower_len, p);
    }
    // the first point closes the chain again
    hull.pop();
    hull
}

/// Pops the chain down to `keep` points or until it turns left at its end, then pushes `p`.
fn push_turning_left(chain: &mut Vec<Point>, keep: usize, p: Point) {
    while chain.len() > keep && ccw(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0 {
        chain.pop();
    }
    chain.push(p);
}

/// Whether the polygon is convex and counterclockwise. Degenerate polygons are allowed. `O(n)`.
pub fn is_ccw_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    (0..n).all(|i| ccw(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]) != -1)
}

/// Whether the polygon is convex, in either orientation. `O(n)`.
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    let mut clockwise = true;
    let mut counterclockwise = true;
    for i in 0..n {
        match ccw(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]) {
            1 => clockwise = false,
            -1 => counterclockwise = false,
            _ => {}
        }
        if !clockwise && !counterclockwise {
            return false;
        }
    }
    true
}

/// Locates `p` against a convex polygon of either orientation. `O(n)`.
pub fn contains_convex(polygon: &[Point], p: Point) -> Containment {
    let n = polygon.len();
    let side = ccw(polygon[0], polygon[1], p);
    for i in 0..n {
        let c = ccw(polygon[i], polygon[(i + 1) % n], p);
        if c == 0 {
            return Containment::OnBoundary;
        }
        if c != side {
            return Containment::Outside;
        }
    }
    Containment::Inside
}

/// Locates `p` against a non-degenerate counterclockwise convex polygon. `O(log n)`.
pub fn contains_ccw_convex(polygon: &[Point], p: Point) -> Containment {
    let n = polygon.len();
    // an inner point splits the polygon into sectors, then binary search for p's sector
    let g = (polygon[0] + polygon[n / 3] + polygon[n * 2 / 3]) * (1.0 / 3.0);
    if g == p {
        return Containment::Inside;
    }
    let gp = p - g;

    let (mut l, mut r) = (0, n);
    while l + 1 < r {
        let mid = (l + r) / 2;
        let gl = polygon[l] - g;
        let gm = polygon[mid] - g;
        if gl.cross(gm) > 0.0 {
            if gl.cross(gp) >= 0.0 && gm.cross(gp) <= 0.0 {
                r = mid;
            } else {
                l = mid;
            }
        } else if gm.cross(gp) >= 0.0 && gl.cross(gp) <= 0.0 {
            l = mid;
        } else {
            r = mid;
        }
    }
    let r = r % n;
    let cross = (polygon[l] - p).cross(polygon[r] - p);
    if approx_eq(cross, 0.0) {
        Containment::OnBoundary
    } else if cross < 0.0 {
        Containment::Outside
    } else {
        Containment::Inside
    }
}

/// Locates `p` against any simple polygon by counting crossings of a ray. `O(n)`.
pub fn contains_polygon(polygon: &[Point], p: Point) -> Containment {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let mut a = polygon[i] - p;
        let mut b = polygon[(i + 1) % n] - p;
        if approx_eq(a.cross(b), 0.0) && a.dot(b) < EPS {
            return Containment::OnBoundary;
        }
        if a.y > b.y {
            std::mem::swap(&mut a, &mut b);
        }
        // the edge crosses the horizontal through p, counting an upper endpoint on it
        if (a.y * b.y < 0.0 || (a.y * b.y < EPS && b.y > EPS)) && a.cross(b) < EPS {
            inside = !inside;
        }
    }
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// The part of a convex polygon on the left of the line `a`, including points on it.
pub fn convex_cut(polygon: &[Point], a: Line) -> Vec<Point> {
    let n = polygon.len();
    let mut cut = Vec::with_capacity(n + 1);
    for i in 0..n {
        let (cur, next) = (polygon[i], polygon[(i + 1) % n]);
        let side = ccw(a.a, a.b, cur);
        if side != -1 {
            cut.push(cur);
        }
        if side * ccw(a.a, a.b, next) == -1 {
            if let Ok(p) = crosspoint_ll(a, Line::new(cur, next)) {
                cut.push(p);
            }
        }
    }
    cut
}

/// The indices of the two farthest vertices of a convex polygon, by rotating calipers. `O(n)`.
pub fn convex_diameter(polygon: &[Point]) -> (usize, usize) {
    let n = polygon.len();
    let mut i = 0;
    let mut j = 0;
    for k in 1..n {
        if polygon[k].x < polygon[i].x {
            i = k;
        }
        if polygon[k].x > polygon[j].x {
            j = k;
        }
    }
    let mut best = (i, j);
    let mut best_sqr = 0.0;
    // a bounded number of steps also ends on degenerate polygons
    for _ in 0..=2 * n + 1 {
        let d = polygon[i].dist_sqr(polygon[j]);
        if best_sqr < d {
            best_sqr = d;
            best = (i, j);
        }
        let ni = (i + 1) % n;
        let nj = (j + 1) % n;
        if (polygon[i] - polygon[ni]).cross(polygon[nj] - polygon[j]) <= 0.0 {
            j = nj;
        } else {
            i = ni;
        }
    }
    best
}

/// The signed area, positive for a counterclockwise polygon.
pub fn area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| polygon[i].cross(polygon[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

/// The center of mass of the polygon's area.
pub fn centroid(polygon: &[Point]) -> Point {
    let n = polygon.len();
    let mut doubled_area = 0.0;
    let mut center = Point::ORIGIN;
    for i in 0..n {
        let (cur, next) = (polygon[i], polygon[(i + 1) % n]);
        let a = cur.cross(next);
        doubled_area += a;
        center = center + (cur + next) * a;
    }
    center * (1.0 / (doubled_area * 3.0))
}

/// The Voronoi cell of `p` among `sites`, clipped to the convex polygon `bounds`.
/// `O(|sites| |bounds|)`.
pub fn voronoi_cell(p: Point, sites: &[Point], bounds: &[Point]) -> Vec<Point> {
    let mut cell = bounds.to_vec();
    for &q in sites {
        if p == q {
            continue;
        }
        let mid = (p + q) * 0.5;
        let bisector = Line::new(mid, mid + (q - p) * Point::new(0.0, 1.0));
        cell = convex_cut(&cell, bisector);
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::super::{p, points};
    use super::*;
    use Containment::*;

    fn a_convex() -> Vec<Point> {
        points("-1 -1  7 -4  12 -1  10 4  6 5  4 5  -1 1")
    }

    #[test]
    fn convexity() {
        let ps = points("0 0  4 5  6 5  9 3  10 4  12 -1  7 -4  4 0  3 -2  -1 1  8 2  -1 -1");
        assert!(!is_convex(&ps));
        assert!(!is_ccw_convex(&ps));
        assert!(is_convex(&a_convex()));
        assert!(is_ccw_convex(&a_convex()));
        let clockwise = points(
            "0.50507641 39.107643  50.002551 25.218046  79.296972 -14.68298  93.944191 -57.867001 \
             84.347738 -94.990105  34.850263 -82.363197  -0.50507641 -36.14872  -12.121831 5.7726092",
        );
        assert!(is_convex(&clockwise));
        assert!(!is_ccw_convex(&clockwise));
        let flat = points("0 0  1 0  2 0  3 0  2 0  1 0");
        assert!(is_convex(&flat));
        assert!(is_ccw_convex(&flat));
        let dent = points(
            "-35.860415 -16.379211  -4.0406102 -35.067033  40.406102 13.925365 \
             57.578695 56.856849  -37.88072 38.674103  -72.225907 6.060915  -11.111678 6.3492214",
        );
        assert!(!is_convex(&dent));
        assert!(!is_ccw_convex(&dent));
    }

    #[test]
    fn point_location() {
        let polygon = a_convex();
        let expected = [
            (Outside, "-1 5  0 2  13 -1  3 5  3.89 4.92  4 -4  6.1 5  10 12"),
            (Inside, "0 0  8.2 2.2  10 -2.1  11.5 0  3.1 4.2  3.91 4.92  5 -1"),
            (OnBoundary, "-1 -1  9 -2.8  12 -1  5 5  3.9 4.92  -1 0"),
        ];
        for (containment, ps) in expected {
            for q in points(ps) {
                assert_eq!(contains_convex(&polygon, q), containment);
                assert_eq!(contains_ccw_convex(&polygon, q), containment);
                assert_eq!(contains_polygon(&polygon, q), containment);
            }
        }

        let polygon = points("0 0  2 0  2 2  3 2  3 1  -2 1  -2 -2  0 -2");
        let expected = [
            (Outside, "4 2  4 1  -2.1 1  -2 3  2 -2  3 0  -4 0  0 3  2.5 0.5"),
            (Inside, "2.5 1.5  1 0.5  -1 0  1.9 0.9"),
            (OnBoundary, "2 1  0 0  -1 -2 0.1 1"),
        ];
        for (containment, ps) in expected {
            for q in points(ps) {
                assert_eq!(contains_polygon(&polygon, q), containment);
            }
        }

        let polygon = points(
            "-35.860415 -16.379211  -4.0406102 -35.067033  40.406102 13.925365 \
             57.578695 56.856849  -37.88072 38.674103  -72.225907 6.060915  -11.111678 6.3492214",
        );
        let expected = [
            (Outside, "-40 0  -37.88072 5.2  -27.47263 -8.6761"),
            (Inside, "0 0  -20 -20  -27.47263 -8.6762"),
            (OnBoundary, "-4.0406102 -35.067033  -27.47263 -8.67614298654"),
        ];
        for (containment, ps) in expected {
            for q in points(ps) {
                assert_eq!(contains_polygon(&polygon, q), containment);
            }
        }
    }

    #[test]
    fn hulls_contain_their_points() {
        for ps in [
            "0 0  4 5  6 5  9 3  10 4  12 -1  7 -4  4 0  3 -2  -1 1  8 2  -1 -1",
            "43.459 40.119  28.740 5.437  -1.038 -3.614  -28.130 -34.897  -13.785 -31.319 \
             -48.709 1.616  9.819 4.463  -45.839 -21.446  -14.079 30.034  -32.017 -45.677",
            "0 0  1 0  2 0  1 1",
            "0 0  1 0  2 0  3 0",
        ] {
            let ps = points(ps);
            let hull = convex_hull(&ps);
            assert!(is_ccw_convex(&hull));
            for &q in &ps {
                assert_ne!(contains_convex(&hull, q), Outside);
            }
        }
        assert_eq!(
            convex_hull(&points("0 0  4 5  6 5  9 3  10 4  12 -1  7 -4  4 0  3 -2  -1 1  8 2  -1 -1")),
            a_convex()
        );
        assert_eq!(convex_hull(&points("1 1")), points("1 1"));
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn cutting() {
        let polygon = a_convex();
        let o = Point::ORIGIN;
        let one = p(1.0, 1.0);
        let cut = |a: Point, b: Point| convex_cut(&polygon, Line::new(a, b));
        assert_eq!(cut(o, one), points("-1 -1  5 5  4 5  -1 1"));
        assert_eq!(cut(one, o), points("-1 -1  7 -4  12 -1  10 4  6 5  5 5"));
        assert_eq!(cut(o, p(1.0, 0.0)), points("11.6 0  10 4  6 5  4 5  -1 1  -1 0"));
        assert_eq!(cut(p(7.0, -4.0), p(5.0, 5.0)), points("-1 -1  7 -4  5 5  4 5  -1 1"));
        assert_eq!(
            cut(p(7.5, -3.7), p(6.0, 5.0)),
            points("-1 -1  7 -4  7.5 -3.7  6 5  4 5  -1 1")
        );
        assert_eq!(cut(p(10.0, 4.0), p(6.0, 5.0)), polygon);
        assert_eq!(cut(p(6.0, 5.0), p(10.0, 4.0)), points("10 4  6 5"));
        assert_eq!(cut(p(0.0, -100.0), p(100.0, -100.0)), polygon);
        assert!(cut(p(100.0, -100.0), p(0.0, -100.0)).is_empty());
        assert_eq!(cut(p(99.0, -101.0), p(-101.0, 99.0)), points("-1 -1"));
    }

    fn sorted((i, j): (usize, usize)) -> (usize, usize) {
        (i.min(j), i.max(j))
    }

    #[test]
    fn diameters() {
        assert_eq!(sorted(convex_diameter(&a_convex())), (2, 6));
        assert_eq!(sorted(convex_diameter(&points("0 0  1 0  0.6 100"))), (0, 2));
        assert_eq!(
            sorted(convex_diameter(&points("0 1  0 0  5 0  4.9 1  4.7 2  3 10  2.6 10.1"))),
            (1, 5)
        );
        assert_eq!(sorted(convex_diameter(&points("0 0  0 -1  1 -1  1 0  1 1  0 1"))), (1, 4));
        assert_eq!(
            sorted(convex_diameter(&points("0 0  0 -1  1 -1  1 -1  1 0  1 1  0 1"))),
            (1, 5)
        );
        assert_eq!(sorted(convex_diameter(&points("0 1  -1 1  -1 0  0 0  1 0  1 1"))), (1, 4));
    }

    #[test]
    fn areas_and_centroids() {
        let close = |x: f64, y: f64| (x - y).abs() < EPS;
        assert!(close(area(&a_convex()), 78.5));
        assert!(close(area(&points("0 0  2 0  0 1")), 1.0));
        assert!(close(area(&points("0 0  0 1  2 0")), -1.0));
        assert!(close(area(&points("0 0  2 0  2 0  2 2")), 2.0));
        assert!(close(area(&points("100 100  102 100  102 100  102 102")), 2.0));
        assert!(close(area(&points("0 0  1 0  2 0")), 0.0));

        assert_eq!(centroid(&a_convex()), p(1330.0 / 3.0 / 78.5, 151.0 / 3.0 / 78.5));
        assert_eq!(centroid(&points("0 0  1 0  2 0.5  1 1  0 1")), p(7.0 / 9.0, 0.5));
        assert_eq!(centroid(&points("0 0  3 0  1 1  0 3")), p(5.0 / 6.0, 5.0 / 6.0));
        assert_eq!(
            centroid(&points("0 0  0 23  27 2  12 1  9 4  2 23  1 19")),
            p(13597.0 / 6.0 / 182.5, 1553.0 / 182.5)
        );
    }

    #[test]
    fn voronoi() {
        let sites = a_convex();
        let bounds = points("-10 -10  10 -10  10 10  -10 10");
        assert_eq!(
            voronoi_cell(sites[0], &sites, &bounds),
            vec![p(-10.0, -10.0), p(0.1875, -10.0), p(55.0 / 14.0, -1.0 / 42.0), p(3.9, 0.0), p(-10.0, 0.0)]
        );
    }
}

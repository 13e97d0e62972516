//! The intersection of two convex polygons.
//!
//! Both polygons are walked from their smallest vertices. Calipers advance around them
//! until the boundaries are found to cross (the "pocket lid"), after which the boundary
//! of the intersection is traced by alternating between the two polygons.

use super::{ccw, contains_ccw_convex, crosspoint_ll, intersects_sp, intersects_ss, Line, Point};
use crate::geometry::{approx_eq, Containment, EPS};

/// The intersection of two counterclockwise convex polygons, counterclockwise. Empty if
/// they are disjoint. `O(n log m + m log n)`.
pub fn convex_intersection(p: &[Point], q: &[Point]) -> Vec<Point> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let (n, m) = (p.len(), q.len());
    let start_p = argmin(p);
    let start_q = argmin(q);
    let (mut i, mut j) = (start_p, start_q);

    match p[start_p].cmp_approx(&q[start_q]) {
        std::cmp::Ordering::Equal => {
            // walk both from the shared vertex until they part
            loop {
                i = (i + 1) % n;
                j = (j + 1) % m;
                if i == start_p || p[i] != q[j] {
                    break;
                }
            }
            if i == start_p {
                return p.to_vec();
            }
            return trace(p, q, (i + n - 1) % n, (j + m - 1) % m);
        }
        std::cmp::Ordering::Greater => return convex_intersection(q, p),
        std::cmp::Ordering::Less => {}
    }

    // p starts left of q, rotate calipers around both
    for _ in 0..=n + m {
        let dir_p = p[(i + 1) % n] - p[i];
        let dir_q = q[(j + 1) % m] - q[j];
        let cross = dir_p.cross(dir_q);
        let dir = if cross > 0.0 { dir_p } else { dir_q };
        if dir.cross(q[j] - p[i]) < EPS {
            // q's caliper is right of p's, this is the pocket lid
            return find_crossing(p, q, i, j);
        }
        if cross > -EPS {
            i = (i + 1) % n;
        }
        if cross < EPS {
            j = (j + 1) % m;
        }
    }
    // a full turn without the calipers swapping sides puts q inside p
    q.to_vec()
}

fn argmin(ps: &[Point]) -> usize {
    let mut min = 0;
    for (k, p) in ps.iter().enumerate() {
        if p.cmp_approx(&ps[min]).is_lt() {
            min = k;
        }
    }
    min
}

/// Walks into the pocket below the lid at `p[i]`, `q[j]` until the boundaries cross.
/// `p` goes deeper forward and `q` goes deeper backward.
fn find_crossing(p: &[Point], q: &[Point], mut i: usize, mut j: usize) -> Vec<Point> {
    let (n, m) = (p.len(), q.len());
    let prev_j = |j: usize| (j + m - 1) % m;
    let mut steps = 0;
    loop {
        let mut updated = false;
        while steps < n + m && (p[(i + 1) % n] - p[i]).cross(q[prev_j(j)] - p[i]) < -EPS {
            j = prev_j(j);
            updated = true;
            steps += 1;
        }
        while steps < n + m && (q[prev_j(j)] - q[j]).cross(p[(i + 1) % n] - q[j]) > EPS {
            i = (i + 1) % n;
            updated = true;
            steps += 1;
        }
        if !updated {
            break;
        }
    }
    if steps >= n + m {
        return Vec::new();
    }
    trace(p, q, i, prev_j(j))
}

/// Traces the intersection from the crossing edges `p[i] -> p[i + 1]` and `q[j] -> q[j + 1]`.
fn trace(p: &[Point], q: &[Point], mut i: usize, mut j: usize) -> Vec<Point> {
    let (n, m) = (p.len(), q.len());
    let next_i = |i: usize| (i + 1) % n;
    let next_j = |j: usize| (j + 1) % m;
    let edge_p = |i: usize| Line::new(p[i], p[next_i(i)]);
    let edge_q = |j: usize| Line::new(q[j], q[next_j(j)]);

    let crossing = |i: usize, j: usize| crosspoint_ll(edge_p(i), edge_q(j)).unwrap_or(p[i]);
    let mut boundary = vec![crossing(i, j)];
    // whether the boundary currently follows p
    let mut on_p = (p[next_i(i)] - p[i]).cross(q[next_j(j)] - q[j]) <= 0.0;
    if on_p && p[next_i(i)] != q[j] {
        j = next_j(j);
    } else {
        i = next_i(i);
    }

    let limit = (n + m) * 2;
    loop {
        let next_p = p[next_i(i)];
        let next_q = q[next_j(j)];
        if on_p {
            let state = contains_ccw_convex(q, next_p);
            let turning_in = (next_p - p[i]).cross(next_q - q[j]) < EPS;
            if state == Containment::Inside || (state == Containment::OnBoundary && turning_in) {
                boundary.push(next_p);
            } else {
                // advance q to the edge where p leaves it
                let mut guard = 0;
                while (!intersects_ss(Line::new(p[i], next_p), edge_q(j)) || p[i] == q[j]) && guard < m {
                    j = next_j(j);
                    guard += 1;
                }
                let next_q = q[next_j(j)];
                let mut c = crossing(i, j);
                if approx_eq((next_p - p[i]).cross(next_q - q[j]), 0.0) {
                    // overlapping edges, go as far as q does
                    c = if intersects_sp(Line::new(p[i], next_p), next_q) {
                        next_q
                    } else if (next_q - next_p).norm_sqr() > (next_q - p[i]).norm_sqr() {
                        p[i]
                    } else {
                        next_p
                    };
                }
                boundary.push(c);
                on_p = false;
            }
            i = next_i(i);
        } else {
            let state = contains_ccw_convex(p, next_q);
            let turning_in = (next_q - q[j]).cross(next_p - p[i]) < EPS;
            if state == Containment::Inside || (state == Containment::OnBoundary && turning_in) {
                boundary.push(next_q);
            } else {
                let mut guard = 0;
                while (!intersects_ss(edge_p(i), Line::new(q[j], next_q)) || p[i] == q[j]) && guard < n {
                    i = next_i(i);
                    guard += 1;
                }
                let next_p = p[next_i(i)];
                let mut c = crossing(i, j);
                if approx_eq((next_p - p[i]).cross(next_q - q[j]), 0.0) {
                    c = if intersects_sp(Line::new(q[j], next_q), next_p) {
                        next_p
                    } else if (next_p - next_q).norm_sqr() > (next_p - q[j]).norm_sqr() {
                        q[j]
                    } else {
                        next_q
                    };
                }
                boundary.push(c);
                on_p = true;
            }
            j = next_j(j);
        }

        if boundary.len() > limit {
            log::warn!("tracing a convex intersection did not close after {limit} vertices");
            break;
        }
        if boundary.first() == boundary.last() {
            break;
        }
    }

    // drop vertices that don't turn left
    let mut polygon: Vec<Point> = Vec::with_capacity(boundary.len());
    for v in boundary {
        let turns_left = match polygon[..] {
            [.., a, b] => ccw(a, b, v) == 1,
            _ => true,
        };
        if turns_left {
            polygon.push(v);
        }
    }
    if polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    polygon
}

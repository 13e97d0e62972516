//! Graphs built from figures: segment arrangements and visibility graphs.

use super::{ccw, contains_convex, crosspoint_ll, intersects_lp, intersects_sp, intersects_ss, Line, Point};
use crate::geometry::{approx_eq, Containment};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeometricEdge {
    pub from: usize,
    pub to: usize,
    pub length: f64,
}

/// An undirected graph with euclidean edge lengths. Every edge is stored once from each end.
#[derive(Clone, Default, Debug)]
pub struct GeometricGraph {
    edges: Vec<Vec<GeometricEdge>>,
}

impl GeometricGraph {
    pub fn new(n: usize) -> Self {
        GeometricGraph {
            edges: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, length: f64) {
        self.edges[from].push(GeometricEdge { from, to, length });
        self.edges[to].push(GeometricEdge {
            from: to,
            to: from,
            length,
        });
    }

    pub fn neighbors(&self, v: usize) -> &[GeometricEdge] {
        &self.edges[v]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from].iter().any(|e| e.to == to)
    }
}

/// Splits the segments at their crossings. Returns the graph on the endpoints and
/// crossings, with an edge between consecutive points of each segment, along with
/// the coordinates of its nodes (sorted).
pub fn segment_arrangement(segments: &[Line]) -> (GeometricGraph, Vec<Point>) {
    let mut ps = Vec::new();
    for (i, s) in segments.iter().enumerate() {
        ps.push(s.a);
        ps.push(s.b);
        for t in &segments[i + 1..] {
            if intersects_ss(*s, *t) {
                if let Ok(c) = crosspoint_ll(*s, *t) {
                    ps.push(c);
                }
            }
        }
    }
    ps.sort_by(Point::cmp_approx);
    ps.dedup_by(|a, b| a == b);

    let mut g = GeometricGraph::new(ps.len());
    let mut on_segment = Vec::with_capacity(ps.len());
    for s in segments {
        on_segment.clear();
        on_segment.extend((0..ps.len()).filter(|&k| intersects_sp(*s, ps[k])));
        on_segment.sort_by(|&a, &b| s.a.dist_sqr(ps[a]).total_cmp(&s.a.dist_sqr(ps[b])));
        for w in on_segment.windows(2) {
            g.add_edge(w[0], w[1], ps[w[0]].dist(ps[w[1]]));
        }
    }
    (g, ps)
}

/// Connects every pair of points that see each other past the obstacles.
///
/// Obstacles are convex polygons, and may nest or cross. Each is a hollow wall: a
/// point inside sees only points inside, and the boundary counts as outside. Edges
/// implied by others may be left out, so corners of obstacles should be among `ps`.
pub fn visibility_graph(ps: &[Point], obstacles: &[Vec<Point>]) -> GeometricGraph {
    let n = ps.len();
    let mut g = GeometricGraph::new(n);
    for i in 0..n {
        for j in i + 1..n {
            let (a, b) = (ps[i], ps[j]);
            if a == b || obstacles.iter().all(|obj| !blocks(obj, a, b)) {
                g.add_edge(i, j, a.dist(b));
            }
        }
    }
    g
}

fn blocks(obj: &[Point], a: Point, b: Point) -> bool {
    let state_a = contains_convex(obj, a);
    let state_b = contains_convex(obj, b);
    if (state_a == Containment::Inside) != (state_b == Containment::Inside) {
        return true;
    }
    let strictly_inner = state_a == Containment::Inside && state_b == Containment::Inside;
    // the midpoint only tells us something for convex obstacles
    if !strictly_inner && contains_convex(obj, (a + b) * 0.5) == Containment::Inside {
        return true;
    }
    let n = obj.len();
    (0..n).any(|l| {
        let side = Line::new(obj[l], obj[(l + 1) % n]);
        intersects_ss(Line::new(a, b), side) && !intersects_sp(side, a) && !intersects_sp(side, b)
    })
}

/// Merges overlapping collinear segments. Segments that only touch at an end merge too.
pub fn merge_segments(segments: &[Line]) -> Vec<Line> {
    let mut segs: Vec<Line> = segments
        .iter()
        .map(|s| if s.a.cmp_approx(&s.b).is_lt() { *s } else { Line::new(s.b, s.a) })
        .collect();
    let mut i = 0;
    while i < segs.len() {
        let mergeable = (i + 1..segs.len()).find(|&j| {
            let (l1, l2) = (segs[i], segs[j]);
            approx_eq(l1.direction().cross(l2.direction()), 0.0)
                && intersects_lp(l1, l2.a)
                && ccw(l1.a, l1.b, l2.b) != 2
                && ccw(l2.a, l2.b, l1.b) != 2
        });
        match mergeable {
            Some(j) => {
                let (l1, l2) = (segs[i], segs[j]);
                let a = if l2.a.cmp_approx(&l1.a).is_lt() { l2.a } else { l1.a };
                let b = if l2.b.cmp_approx(&l1.b).is_gt() { l2.b } else { l1.b };
                segs[i] = Line::new(a, b);
                segs.swap_remove(j);
            }
            None => i += 1,
        }
    }
    segs
}

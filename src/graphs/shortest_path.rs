//! Single source and all pairs shortest paths, and path reconstruction.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Graph, INF};
use crate::{Error, Result};

/// Distances from `s` to every node, `INF` where unreachable. Costs must be non-negative.
/// `O(E log V)` on adjacency lists, `O(V^2 log V)` on a matrix.
pub fn dijkstra<G: Graph + ?Sized>(g: &G, s: usize) -> Vec<i64> {
    dijkstra_internal(g, s, None).0
}

/// The distance from `s` to `t`. Stops as soon as `t` is settled.
pub fn dijkstra_to<G: Graph + ?Sized>(g: &G, s: usize, t: usize) -> i64 {
    dijkstra_internal(g, s, Some(t)).0[t]
}

/// Like [`dijkstra`], also returning the predecessor of each node on a shortest path.
/// Feed the predecessors to [`get_path`].
pub fn dijkstra_with_path<G: Graph + ?Sized>(g: &G, s: usize) -> (Vec<i64>, Vec<Option<usize>>) {
    dijkstra_internal(g, s, None)
}

fn dijkstra_internal<G: Graph + ?Sized>(
    g: &G,
    s: usize,
    target: Option<usize>,
) -> (Vec<i64>, Vec<Option<usize>>) {
    let mut dist = vec![INF; g.len()];
    let mut prev = vec![None; g.len()];
    dist[s] = 0;
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((0, s)));
    while let Some(Reverse((du, u))) = queue.pop() {
        if dist[u] < du {
            continue;
        }
        if Some(u) == target {
            break;
        }
        for e in g.arcs_from(u) {
            let dv = du + e.cost;
            if dv < dist[e.to] {
                dist[e.to] = dv;
                prev[e.to] = Some(u);
                queue.push(Reverse((dv, e.to)));
            }
        }
    }
    (dist, prev)
}

/// Distances from `s`, allowing negative costs. `O(VE)`.
///
/// Fails with [`Error::NegativeCycle`] if a negative cycle is reachable from `s`.
pub fn bellman_ford<G: Graph + ?Sized>(g: &G, s: usize) -> Result<Vec<i64>> {
    let n = g.len();
    let mut dist = vec![INF; n];
    dist[s] = 0;
    for round in 0..n {
        let mut updated = false;
        for e in g.all_arcs() {
            if dist[e.from] != INF && dist[e.to] > dist[e.from] + e.cost {
                dist[e.to] = dist[e.from] + e.cost;
                updated = true;
            }
        }
        if !updated {
            break;
        }
        // a shortest path has at most n - 1 arcs
        if round == n - 1 {
            log::debug!("negative cycle reachable from {s}");
            return Err(Error::NegativeCycle { start: s });
        }
    }
    Ok(dist)
}

fn distance_matrix<G: Graph + ?Sized>(g: &G) -> Vec<Vec<i64>> {
    let n = g.len();
    let mut dist = vec![vec![INF; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = 0;
    }
    for e in g.all_arcs() {
        dist[e.from][e.to] = dist[e.from][e.to].min(e.cost);
    }
    dist
}

/// All pairs distances. `O(V^3)`.
///
/// A negative cycle through `v` shows up as `dist[v][v] < 0`.
pub fn warshall_floyd<G: Graph + ?Sized>(g: &G) -> Vec<Vec<i64>> {
    warshall_floyd_with_path(g).0
}

/// Like [`warshall_floyd`], also returning `next[u][v]`: the node after `u` on a
/// shortest path to `v`, if there is one. Feed it to [`get_path_all_pairs`].
pub fn warshall_floyd_with_path<G: Graph + ?Sized>(g: &G) -> (Vec<Vec<i64>>, Vec<Vec<Option<usize>>>) {
    let mut dist = distance_matrix(g);
    let n = dist.len();
    let mut next: Vec<Vec<Option<usize>>> = dist
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(v, &d)| (d < INF).then_some(v))
                .collect()
        })
        .collect();
    for i in 0..n {
        for j in 0..n {
            if dist[j][i] == INF {
                continue;
            }
            for k in 0..n {
                if dist[i][k] != INF && dist[j][k] > dist[j][i] + dist[i][k] {
                    dist[j][k] = dist[j][i] + dist[i][k];
                    next[j][k] = next[j][i];
                }
            }
        }
    }
    (dist, next)
}

/// Rebuilds the path `from -> ... -> to` out of single source predecessors.
pub fn get_path(prev: &[Option<usize>], from: usize, to: usize) -> Result<Vec<usize>> {
    let mut path = vec![to];
    let mut v = to;
    while v != from {
        v = match prev[v] {
            Some(u) if path.len() <= prev.len() => u,
            _ => {
                log::debug!("no recorded path from {from} to {to}");
                return Err(Error::NoPath { from, to });
            }
        };
        path.push(v);
    }
    path.reverse();
    Ok(path)
}

/// Rebuilds the path `from -> ... -> to` out of the `next` table of
/// [`warshall_floyd_with_path`].
pub fn get_path_all_pairs(next: &[Vec<Option<usize>>], from: usize, to: usize) -> Result<Vec<usize>> {
    let mut path = vec![from];
    let mut v = from;
    while v != to {
        v = match next[v][to] {
            // paths through negative cycles never end
            Some(u) if path.len() <= next.len() => u,
            _ => {
                log::debug!("no recorded path from {from} to {to}");
                return Err(Error::NoPath { from, to });
            }
        };
        path.push(v);
    }
    Ok(path)
}

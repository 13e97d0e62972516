//! Maximum flow, minimum cost flow and bipartite matching.
//!
//! The flow algorithms mutate the [`FlowGraph`]: they leave the residual network behind.
//! Call [`FlowGraph::reset_flow`] before running another one on the same network.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use super::{AdjGraph, Edge, Graph, INF};

#[derive(Clone, Debug)]
struct ResidualEdge {
    to: usize,
    cost: i64,
    capacity: i64,
    residual: i64,
    // index of the reverse edge in `edges[to]`
    rev: usize,
}

/// A network with a residual reverse edge for every arc.
#[derive(Clone, Debug)]
pub struct FlowGraph {
    edges: Vec<Vec<ResidualEdge>>,
}

// (node, index in edges[node]) of the edge used to reach each node
type Predecessors = Vec<Option<(usize, usize)>>;

impl FlowGraph {
    pub fn new(n: usize) -> Self {
        FlowGraph {
            edges: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn add_arc(&mut self, from: usize, to: usize, cost: i64, capacity: i64) {
        assert!(capacity >= 0, "negative capacity {capacity} on arc {from} -> {to}");
        let forward_index = self.edges[from].len();
        // a self loop's reverse lands right after it in the same list
        let backward_index = self.edges[to].len() + usize::from(from == to);
        self.edges[from].push(ResidualEdge {
            to,
            cost,
            capacity,
            residual: capacity,
            rev: backward_index,
        });
        self.edges[to].push(ResidualEdge {
            to: from,
            cost: -cost,
            capacity: 0,
            residual: 0,
            rev: forward_index,
        });
    }

    /// Adds an undirected edge: an independent arc in each direction.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: i64, capacity: i64) {
        self.add_arc(from, to, cost, capacity);
        self.add_arc(to, from, cost, capacity);
    }

    pub fn add(&mut self, e: Edge) {
        self.add_arc(e.from, e.to, e.cost, e.capacity);
    }

    /// Empties every arc, restoring the network as it was built.
    pub fn reset_flow(&mut self) {
        for e in self.edges.iter_mut().flatten() {
            e.residual = e.capacity;
        }
    }

    /// The flow currently going through each arc leaving `v`, as `(to, flow)`.
    pub fn flows_from(&self, v: usize) -> Vec<(usize, i64)> {
        self.edges[v]
            .iter()
            .filter(|e| e.capacity > 0)
            .map(|e| (e.to, e.capacity - e.residual))
            .collect()
    }

    /// The path from `s` to `t` recorded in `prev`, as `(node, edge index)` pairs, sink first.
    fn walk_back(prev: &Predecessors, t: usize) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut v = t;
        while let Some((u, i)) = prev[v] {
            path.push((u, i));
            v = u;
        }
        path
    }

    /// Pushes up to `limit` units along `path`. Returns the amount pushed and its cost.
    fn augment(&mut self, path: &[(usize, usize)], limit: i64) -> (i64, i64) {
        let amount = path
            .iter()
            .map(|&(u, i)| self.edges[u][i].residual)
            .fold(limit, i64::min);
        let mut cost = 0;
        for &(u, i) in path {
            let e = &mut self.edges[u][i];
            e.residual -= amount;
            cost += e.cost * amount;
            let (to, rev) = (e.to, e.rev);
            self.edges[to][rev].residual += amount;
        }
        (amount, cost)
    }

    /// Maximum flow from `s` to `t`, augmenting along shortest paths. `O(VE^2)`.
    pub fn edmonds_karp(&mut self, s: usize, t: usize) -> i64 {
        let mut flow = 0;
        while let Some(prev) = self.find_augmenting_path(s, t) {
            let path = Self::walk_back(&prev, t);
            flow += self.augment(&path, i64::MAX).0;
        }
        flow
    }

    fn find_augmenting_path(&self, s: usize, t: usize) -> Option<Predecessors> {
        let mut prev: Predecessors = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        visited[s] = true;
        let mut queue = VecDeque::from([s]);
        'search: while let Some(v) = queue.pop_front() {
            for (i, e) in self.edges[v].iter().enumerate() {
                if e.residual > 0 && !visited[e.to] {
                    visited[e.to] = true;
                    prev[e.to] = Some((v, i));
                    if e.to == t {
                        break 'search;
                    }
                    queue.push_back(e.to);
                }
            }
        }
        prev[t].map(|_| prev)
    }

    /// The cheapest way to send `flow` units from `s` to `t`, or `-1` if the network
    /// can't carry that much. Successive shortest paths with Dijkstra on reduced costs.
    ///
    /// Arc costs must be non-negative. `O(F E log V)`.
    pub fn min_cost_flow(&mut self, s: usize, t: usize, flow: i64) -> i64 {
        let n = self.len();
        let mut potential = vec![0; n];
        let mut remaining = flow;
        let mut total_cost = 0;
        while remaining > 0 {
            let mut dist = vec![INF; n];
            let mut prev: Predecessors = vec![None; n];
            dist[s] = 0;
            let mut queue = BinaryHeap::new();
            queue.push(Reverse((0, s)));
            while let Some(Reverse((dv, v))) = queue.pop() {
                if dist[v] < dv {
                    continue;
                }
                for (i, e) in self.edges[v].iter().enumerate() {
                    let reduced = dv + e.cost + potential[v] - potential[e.to];
                    if e.residual > 0 && e.to != s && dist[e.to] > reduced {
                        dist[e.to] = reduced;
                        prev[e.to] = Some((v, i));
                        queue.push(Reverse((reduced, e.to)));
                    }
                }
            }
            if prev[t].is_none() {
                log::debug!("only {} of {flow} units can flow from {s} to {t}", flow - remaining);
                return -1;
            }
            // nodes unreachable now stay unreachable, so their potential is never read again
            for (h, d) in potential.iter_mut().zip(&dist) {
                if *d < INF {
                    *h += d;
                }
            }
            let path = Self::walk_back(&prev, t);
            let (amount, cost) = self.augment(&path, remaining);
            remaining -= amount;
            total_cost += cost;
        }
        total_cost
    }

    /// [`min_cost_flow`](Self::min_cost_flow) finding each augmenting path with Bellman-Ford.
    /// Negative arc costs are allowed, as long as there is no negative cycle. `O(F V E)`.
    pub fn min_cost_flow_bellman_ford(&mut self, s: usize, t: usize, flow: i64) -> i64 {
        let n = self.len();
        let mut remaining = flow;
        let mut total_cost = 0;
        while remaining > 0 {
            let mut dist = vec![INF; n];
            let mut prev: Predecessors = vec![None; n];
            dist[s] = 0;
            for _ in 0..n {
                let mut updated = false;
                for v in 0..n {
                    if dist[v] == INF {
                        continue;
                    }
                    for (i, e) in self.edges[v].iter().enumerate() {
                        if e.residual > 0 && e.to != s && dist[e.to] > dist[v] + e.cost {
                            dist[e.to] = dist[v] + e.cost;
                            prev[e.to] = Some((v, i));
                            updated = true;
                        }
                    }
                }
                if !updated {
                    break;
                }
            }
            if prev[t].is_none() {
                log::debug!("only {} of {flow} units can flow from {s} to {t}", flow - remaining);
                return -1;
            }
            let path = Self::walk_back(&prev, t);
            let (amount, cost) = self.augment(&path, remaining);
            remaining -= amount;
            total_cost += cost;
        }
        total_cost
    }
}

struct MatchingState<'a> {
    graph: &'a AdjGraph,
    partner: Vec<Option<usize>>,
    /// `seen_in[v] == round` if `v` was visited in the current search.
    seen_in: Vec<usize>,
    round: usize,
}

impl MatchingState<'_> {
    /// Looks for an augmenting path from the free node `root`, and flips it if found.
    fn augment(&mut self, root: usize) -> bool {
        let graph = self.graph;
        self.seen_in[root] = self.round;
        // (node, index of the next neighbor to try)
        let mut path = vec![(root, 0)];
        while let Some(&(v, next)) = path.last() {
            let Some(e) = graph.neighbors(v).get(next) else {
                path.pop();
                continue;
            };
            let top = path.len() - 1;
            path[top].1 += 1;
            match self.partner[e.to] {
                None => {
                    // every node on the path takes the neighbor it last tried
                    for &(w, tried) in &path {
                        let u = graph.neighbors(w)[tried - 1].to;
                        self.partner[w] = Some(u);
                        self.partner[u] = Some(w);
                    }
                    return true;
                }
                Some(w) if self.seen_in[w] != self.round => {
                    self.seen_in[w] = self.round;
                    path.push((w, 0));
                }
                Some(_) => {}
            }
        }
        false
    }
}

/// The size of a maximum matching of the undirected bipartite graph `g`. `O(VE)`.
///
/// Edges must be present in both directions, as `add_edge` does. Costs are ignored.
pub fn bipartite_matching(g: &AdjGraph) -> usize {
    let n = g.len();
    let mut state = MatchingState {
        graph: g,
        partner: vec![None; n],
        seen_in: vec![usize::MAX; n],
        round: 0,
    };
    let mut matching = 0;
    for v in 0..n {
        if state.partner[v].is_none() {
            state.round = v;
            if state.augment(v) {
                matching += 1;
            }
        }
    }
    matching
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::*;

    fn network(description: &str, with_cost: bool) -> FlowGraph {
        let (n, arcs) = parse_arcs(description, with_cost, true);
        let mut g = FlowGraph::new(n);
        for e in arcs {
            g.add(e);
        }
        g
    }

    const COST_NETWORK: &str = "8  0 1 3 13  0 5 2 7  1 2 3 8  2 0 9 12  2 3 3 4  3 4 1 2 \
        3 7 3 3  4 1 1 4  4 3 3 9  4 5 2 7  5 2 3 9  5 3 10 5  5 7 8 9  6 1 2 9  7 0 1 6";
    const REVERSING_NETWORK: &str = "4  0 1 1 5  0 2 3 5  1 2 1 5  1 3 3 5  2 3 1 5";

    #[test]
    fn maximum_flow() {
        let mut g = network(
            "8  0 1 3  0 5 2  1 2 3  2 0 9  2 3 3  3 4 1  3 7 3 \
             4 1 1  4 3 3  4 5 2  5 2 3  5 3 10  5 7 8  6 1 2  7 0 1",
            false,
        );
        assert_eq!(g.edmonds_karp(0, 7), 5);
        g.reset_flow();
        assert_eq!(g.edmonds_karp(0, 6), 0);

        let mut g = network(
            "7  0 1 45  0 2 30  1 2 10  1 3 19  2 4 60  2 5 14  3 5 8 \
             3 6 22  4 3 11  4 6 37  5 2 10  5 4 33  5 6 1",
            false,
        );
        assert_eq!(g.edmonds_karp(0, 6), 59);
        let out_of_source: i64 = g.flows_from(0).iter().map(|&(_, f)| f).sum();
        assert_eq!(out_of_source, 59);

        assert_eq!(FlowGraph::new(10).edmonds_karp(0, 4), 0);

        let mut multiples = network("2  0 1 10  0 1 10  0 1 20", false);
        assert_eq!(multiples.edmonds_karp(0, 1), 40);
    }

    #[test]
    fn matching_as_a_flow() {
        // 0 is the source, 11 the sink, 1..=5 and 6..=10 the two sides
        let mut g = network(
            "12  1 7 1  2 6 1  2 7 1  2 9 1  3 8 1  4 7 1  5 8 1  5 9 1  5 10 1",
            false,
        );
        for i in 0..5 {
            g.add_arc(0, i + 1, 0, 1);
            g.add_arc(i + 6, 11, 0, 1);
        }
        assert_eq!(g.edmonds_karp(0, 11), 4);
    }

    #[test]
    fn undirected_flow() {
        let mut g = FlowGraph::new(3);
        g.add_edge(0, 1, 0, 4);
        g.add_edge(2, 1, 0, 3);
        assert_eq!(g.edmonds_karp(0, 2), 3);
        g.reset_flow();
        assert_eq!(g.edmonds_karp(2, 0), 3);
    }

    #[test]
    fn minimum_cost_flow() {
        let mut g = network(COST_NETWORK, true);
        assert_eq!(g.edmonds_karp(0, 7), 11);
        g.reset_flow();
        assert_eq!(g.min_cost_flow(0, 7, 9), 94);
        g.reset_flow();
        assert_eq!(g.min_cost_flow_bellman_ford(0, 7, 9), 94);
        g.reset_flow();
        assert_eq!(g.min_cost_flow(0, 6, 6), -1);
        g.reset_flow();
        assert_eq!(g.min_cost_flow_bellman_ford(0, 6, 6), -1);
    }

    #[test]
    fn minimum_cost_flow_reverses_flow() {
        let mut g = network(REVERSING_NETWORK, true);
        for (flow, expected) in [(4, 12), (5, 15), (6, 20), (10, 40), (11, -1)] {
            g.reset_flow();
            assert_eq!(g.min_cost_flow(0, 3, flow), expected, "flow {flow}");
            g.reset_flow();
            assert_eq!(g.min_cost_flow_bellman_ford(0, 3, flow), expected, "flow {flow}");
        }
    }

    #[test]
    fn minimum_cost_flow_edge_cases() {
        let mut empty = FlowGraph::new(10);
        assert_eq!(empty.min_cost_flow(0, 4, 1), -1);
        assert_eq!(empty.min_cost_flow(0, 4, 0), 0);
        assert_eq!(empty.min_cost_flow_bellman_ford(0, 4, 1), -1);
        assert_eq!(empty.min_cost_flow_bellman_ford(0, 4, 0), 0);

        let mut multiples = network("2  0 1 1 10  0 1 2 10  0 1 3 20", true);
        assert_eq!(multiples.min_cost_flow(0, 1, 30), 60);
        multiples.reset_flow();
        assert_eq!(multiples.min_cost_flow_bellman_ford(0, 1, 30), 60);
    }

    #[test]
    fn bipartite() {
        let (n, arcs) = parse_arcs(
            "12  1 7 1  2 6 1  2 7 1  2 9 1  3 8 1  4 7 1  5 8 1  5 9 1  5 10 1",
            false,
            true,
        );
        let mut g = AdjGraph::new(n);
        for e in arcs {
            g.add_edge(e);
        }
        assert_eq!(bipartite_matching(&g), 4);

        let mut g = AdjGraph::new(1000);
        for i in 0..500 {
            g.add_edge(Edge::with_capacity(i, i * i % 500 + 500, 0, 1));
        }
        assert_eq!(bipartite_matching(&g), 106);
    }

    #[test]
    fn long_augmenting_path() {
        // b_i is node i and a_i is node k + i. Greedy matches every b_i with a_{i+1}
        // first, so the last b must reroute the whole chain.
        let k = 100_000;
        let mut g = AdjGraph::new(2 * k);
        for i in 0..k - 1 {
            g.add_edge(Edge::new(i, k + i + 1, 0));
        }
        for i in 0..k {
            g.add_edge(Edge::new(i, k + i, 0));
        }
        assert_eq!(bipartite_matching(&g), k);
    }
}

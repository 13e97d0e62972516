//! Weighted directed graphs and the classical algorithms on them.
//!
//! There are three representations, which all implement [`Graph`]:
//! an adjacency matrix ([`MatrixGraph`]), adjacency lists ([`AdjGraph`]) and
//! a plain list of arcs ([`EdgeGraph`]). Flow algorithms work on the residual
//! network [`flow::FlowGraph`] instead.
//!
//! An undirected edge is stored as two arcs, one in each direction.

pub mod flow;
pub mod scc;
pub mod shortest_path;
pub mod spanning_tree;

pub use flow::{bipartite_matching, FlowGraph};
pub use scc::{strongly_connected_components, tarjan_scc, topological_sort, viterbi, StronglyConnectedComponents};
pub use shortest_path::*;
pub use spanning_tree::kruskal;

/// The distance to an unreachable node. Small enough that adding two of them doesn't overflow.
pub const INF: i64 = i64::MAX / 16;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub cost: i64,
    pub capacity: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, cost: i64) -> Self {
        Edge {
            from,
            to,
            cost,
            capacity: 0,
        }
    }

    pub fn with_capacity(from: usize, to: usize, cost: i64, capacity: i64) -> Self {
        Edge {
            from,
            to,
            cost,
            capacity,
        }
    }

    /// The same edge, traversed the other way.
    pub fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            ..self
        }
    }
}

/// A directed graph on the nodes `0..len()`.
pub trait Graph {
    fn len(&self) -> usize;

    /// The arcs leaving `v`.
    fn arcs_from(&self, v: usize) -> Box<dyn Iterator<Item = &Edge> + '_>;

    /// Every arc of the graph.
    fn all_arcs(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new((0..self.len()).flat_map(move |v| self.arcs_from(v)))
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// At most one arc for each ordered pair of nodes.
#[derive(Clone, Debug)]
pub struct MatrixGraph {
    edges: Vec<Vec<Option<Edge>>>,
}

impl MatrixGraph {
    pub fn new(n: usize) -> Self {
        MatrixGraph {
            edges: vec![vec![None; n]; n],
        }
    }

    /// Adds the arc `e`, replacing any arc already between the same nodes.
    pub fn add_arc(&mut self, e: Edge) {
        self.edges[e.from][e.to] = Some(e);
    }

    pub fn add_edge(&mut self, e: Edge) {
        self.add_arc(e);
        self.add_arc(e.reversed());
    }

    pub fn arc(&self, from: usize, to: usize) -> Option<&Edge> {
        self.edges[from][to].as_ref()
    }
}

impl Graph for MatrixGraph {
    fn len(&self) -> usize {
        self.edges.len()
    }

    fn arcs_from(&self, v: usize) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges[v].iter().flatten())
    }
}

#[derive(Clone, Debug)]
pub struct AdjGraph {
    edges: Vec<Vec<Edge>>,
}

impl AdjGraph {
    pub fn new(n: usize) -> Self {
        AdjGraph {
            edges: vec![Vec::new(); n],
        }
    }

    pub fn add_arc(&mut self, e: Edge) {
        self.edges[e.from].push(e);
    }

    pub fn add_edge(&mut self, e: Edge) {
        self.add_arc(e);
        self.add_arc(e.reversed());
    }

    /// The arcs leaving `v`, in insertion order.
    pub fn neighbors(&self, v: usize) -> &[Edge] {
        &self.edges[v]
    }

    /// The same graph with every arc reversed.
    pub fn transpose(&self) -> Self {
        let mut reversed = AdjGraph::new(self.len());
        for e in self.all_arcs() {
            reversed.add_arc(e.reversed());
        }
        reversed
    }
}

impl Graph for AdjGraph {
    fn len(&self) -> usize {
        self.edges.len()
    }

    fn arcs_from(&self, v: usize) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges[v].iter())
    }
}

/// A list of arcs. The node count grows to cover every endpoint.
#[derive(Clone, Debug, Default)]
pub struct EdgeGraph {
    n: usize,
    edges: Vec<Edge>,
}

impl EdgeGraph {
    pub fn new(n: usize) -> Self {
        EdgeGraph {
            n,
            edges: Vec::new(),
        }
    }

    pub fn add_arc(&mut self, e: Edge) {
        self.n = self.n.max(e.from.max(e.to) + 1);
        self.edges.push(e);
    }

    pub fn add_edge(&mut self, e: Edge) {
        self.add_arc(e);
        self.add_arc(e.reversed());
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl Graph for EdgeGraph {
    fn len(&self) -> usize {
        self.n
    }

    fn arcs_from(&self, v: usize) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter().filter(move |e| e.from == v))
    }

    fn all_arcs(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter())
    }
}

/// Parses `"n  from to [cost] [capacity]  from to ..."`, for building test graphs.
/// The cost defaults to 1 and the capacity to 0.
#[cfg(test)]
pub(crate) fn parse_arcs(description: &str, weighted: bool, with_capacity: bool) -> (usize, Vec<Edge>) {
    let numbers: Vec<i64> = description
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    let (n, rest) = numbers.split_first().unwrap();
    let width = 2 + weighted as usize + with_capacity as usize;
    let arcs = rest
        .chunks(width)
        .map(|chunk| {
            let cost = if weighted { chunk[2] } else { 1 };
            let capacity = if with_capacity { chunk[width - 1] } else { 0 };
            Edge::with_capacity(chunk[0] as usize, chunk[1] as usize, cost, capacity)
        })
        .collect();
    (*n as usize, arcs)
}

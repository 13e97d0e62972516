//! Strongly connected components, and paths on DAGs.

use std::collections::VecDeque;

use super::{AdjGraph, Graph, INF};

/// Kosaraju's algorithm. `O(V + E)`.
///
/// Returns the number of components and the component of every node. Components
/// are numbered in topological order: an arc between two components always goes
/// from the smaller id to the larger one.
pub fn strongly_connected_components(g: &AdjGraph) -> (usize, Vec<usize>) {
    let n = g.len();
    let mut used = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    // (node, index of the next neighbor to look at)
    let mut dfs_stack: Vec<(usize, usize)> = Vec::new();
    for root in 0..n {
        if used[root] {
            continue;
        }
        used[root] = true;
        dfs_stack.push((root, 0));
        while let Some((v, next)) = dfs_stack.pop() {
            match g.neighbors(v).get(next) {
                Some(e) => {
                    dfs_stack.push((v, next + 1));
                    if !used[e.to] {
                        used[e.to] = true;
                        dfs_stack.push((e.to, 0));
                    }
                }
                None => finished.push(v),
            }
        }
    }

    let reversed = g.transpose();
    let mut component_of = vec![0; n];
    used.fill(false);
    let mut count = 0;
    let mut pending = Vec::new();
    for &root in finished.iter().rev() {
        if used[root] {
            continue;
        }
        used[root] = true;
        pending.push(root);
        while let Some(v) = pending.pop() {
            component_of[v] = count;
            for e in reversed.neighbors(v) {
                if !used[e.to] {
                    used[e.to] = true;
                    pending.push(e.to);
                }
            }
        }
        count += 1;
    }
    (count, component_of)
}

/// The result of [`tarjan_scc`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StronglyConnectedComponents {
    /// The nodes of each component, in topological order of the components.
    pub components: Vec<Vec<usize>>,
    /// `component_of[v]` is the index of the component containing `v`.
    pub component_of: Vec<usize>,
}

impl StronglyConnectedComponents {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

const NOT_VISITED: usize = usize::MAX;

/// An entry of the explicit depth first search stack.
enum Step {
    /// Look at the `next`th neighbor of `node`, entering `node` first if `next == 0`.
    Visit { node: usize, next: usize },
    /// `child` has been finished, fold its low link into `node`.
    UpdateLowLink { node: usize, child: usize },
}

struct DfsState<'a> {
    graph: &'a AdjGraph,
    order_count: usize,
    order: Vec<usize>,
    low_link: Vec<usize>,
    path_stack: Vec<usize>,
    on_stack: Vec<bool>,
    dfs_stack: Vec<Step>,
    components: Vec<Vec<usize>>,
}

impl DfsState<'_> {
    fn dfs(&mut self, root: usize) {
        let graph = self.graph;
        self.dfs_stack.push(Step::Visit { node: root, next: 0 });
        while let Some(step) = self.dfs_stack.pop() {
            let (u, next) = match step {
                Step::UpdateLowLink { node, child } => {
                    self.low_link[node] = self.low_link[node].min(self.low_link[child]);
                    continue;
                }
                Step::Visit { node, next } => (node, next),
            };

            if next == 0 {
                self.order[u] = self.order_count;
                self.low_link[u] = self.order_count;
                self.order_count += 1;
                self.path_stack.push(u);
                self.on_stack[u] = true;
            }

            if let Some(e) = graph.neighbors(u).get(next) {
                self.dfs_stack.push(Step::Visit { node: u, next: next + 1 });
                let v = e.to;
                if self.order[v] == NOT_VISITED {
                    self.dfs_stack.push(Step::UpdateLowLink { node: u, child: v });
                    self.dfs_stack.push(Step::Visit { node: v, next: 0 });
                } else if self.on_stack[v] {
                    self.low_link[u] = self.low_link[u].min(self.order[v]);
                }
            } else if self.low_link[u] == self.order[u] {
                // u is the root of its component
                let mut component = Vec::new();
                while let Some(w) = self.path_stack.pop() {
                    self.on_stack[w] = false;
                    component.push(w);
                    if w == u {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }
}

/// Tarjan's algorithm. `O(V + E)`, a single depth first search.
///
/// The components are numbered the same way as [`strongly_connected_components`] does.
pub fn tarjan_scc(g: &AdjGraph) -> StronglyConnectedComponents {
    let n = g.len();
    let mut state = DfsState {
        graph: g,
        order_count: 0,
        order: vec![NOT_VISITED; n],
        low_link: vec![NOT_VISITED; n],
        path_stack: Vec::new(),
        on_stack: vec![false; n],
        dfs_stack: Vec::new(),
        components: Vec::new(),
    };
    for v in 0..n {
        if state.order[v] == NOT_VISITED {
            state.dfs(v);
        }
    }

    // components are completed sinks first
    let mut components = state.components;
    components.reverse();
    let mut component_of = vec![0; n];
    for (id, component) in components.iter().enumerate() {
        for &v in component {
            component_of[v] = id;
        }
    }
    StronglyConnectedComponents {
        components,
        component_of,
    }
}

/// Kahn's algorithm. Returns the nodes in an order where every arc points forward,
/// or `None` if the graph has a cycle.
pub fn topological_sort<G: Graph + ?Sized>(g: &G) -> Option<Vec<usize>> {
    let n = g.len();
    let mut in_degree = vec![0usize; n];
    for e in g.all_arcs() {
        in_degree[e.to] += 1;
    }
    let mut ready: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut sorted = Vec::with_capacity(n);
    while let Some(v) = ready.pop_front() {
        sorted.push(v);
        for e in g.arcs_from(v) {
            in_degree[e.to] -= 1;
            if in_degree[e.to] == 0 {
                ready.push_back(e.to);
            }
        }
    }
    if sorted.len() < n {
        log::debug!("{} nodes lie on or behind a cycle", n - sorted.len());
        return None;
    }
    Some(sorted)
}

/// The shortest distance from `s` to `t` on a DAG, `INF` if unreachable. `O(V + E)`.
///
/// `order[v]` is the position of `v` in a topological order, so `order` must be
/// a permutation of `0..n`. Costs may be negative.
pub fn viterbi<G: Graph + ?Sized>(g: &G, s: usize, t: usize, order: &[usize]) -> i64 {
    let n = g.len();
    assert_eq!(order.len(), n, "one position per node");
    let mut by_position = vec![0; n];
    for (v, &position) in order.iter().enumerate() {
        by_position[position] = v;
    }

    let mut dist = vec![INF; n];
    dist[s] = 0;
    for &v in &by_position[order[s]..] {
        if dist[v] == INF {
            continue;
        }
        for e in g.arcs_from(v) {
            dist[e.to] = dist[e.to].min(dist[v] + e.cost);
        }
    }
    dist[t]
}

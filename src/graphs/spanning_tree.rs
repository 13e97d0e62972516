use super::Graph;
use crate::union_find::UnionFind;

/// The total cost of a minimum spanning forest of the undirected graph `g`. `O(E log E)`.
///
/// Every undirected edge should be present in both directions, as `add_edge` does.
/// Negative costs are fine.
pub fn kruskal<G: Graph + ?Sized>(g: &G) -> i64 {
    let mut edges: Vec<_> = g.all_arcs().collect();
    edges.sort_by_key(|e| e.cost);
    let mut components = UnionFind::new(g.len());
    let mut total = 0;
    for e in edges {
        if !components.same(e.from, e.to) {
            components.unite(e.from, e.to);
            total += e.cost;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::super::*;

    fn undirected(description: &str) -> (MatrixGraph, EdgeGraph) {
        let (n, arcs) = parse_arcs(description, true, false);
        let mut matrix = MatrixGraph::new(n);
        let mut list = EdgeGraph::new(n);
        for e in arcs {
            matrix.add_edge(e);
            list.add_edge(e);
        }
        (matrix, list)
    }

    #[test]
    fn minimum_spanning_tree() {
        let (matrix, list) = undirected(
            "7  0 1 3  0 2 3  0 5 2  1 2 1  1 3 3  2 3 2 \
             3 4 4  3 5 4  3 6 3  4 5 2  5 6 8  6 0 -5",
        );
        assert_eq!(kruskal(&matrix), 5);
        assert_eq!(kruskal(&list), 5);
    }

    #[test]
    fn negative_cycles_do_not_matter() {
        let (matrix, list) =
            undirected("6  0 1 3  0 4 1  1 2 1  2 3 1  3 1 -3  3 4 3  4 5 -1");
        assert_eq!(kruskal(&matrix), 1);
        assert_eq!(kruskal(&list), 1);
    }

    #[test]
    fn spanning_forests() {
        assert_eq!(kruskal(&EdgeGraph::new(10)), 0);
        let (_, list) = undirected("6  0 1 4  1 2 -1  3 4 7  4 5 2  5 3 1");
        assert_eq!(kruskal(&list), 4 - 1 + 2 + 1);
    }
}

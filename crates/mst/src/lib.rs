use std::collections::HashMap;

use disjoint_set::DisjointSet;
use graph::{VertexId, WeightedEdge, WeightedGraph};

/// Kruskal's algorithm. Edges are treated as undirected and kept in their
/// input direction in the output.
///
/// Lighter edges win; equal weights are taken in `(from, to)` order so the
/// result is deterministic. Returns `None` when the graph is not connected.
/// The empty graph has the empty tree. `O(E log E)`.
pub fn min_spanning_tree<T: Clone>(graph: &WeightedGraph<T>) -> Option<WeightedGraph<T>> {
    let mut tree = graph.without_edges();
    let n = graph.vertex_count();
    if n == 0 {
        return Some(tree);
    }

    let set_of: HashMap<VertexId, usize> = graph
        .iter()
        .enumerate()
        .map(|(i, v)| (v.id(), i))
        .collect();
    let mut sets = DisjointSet::new(n);

    let mut edges: Vec<WeightedEdge> = graph.edges().collect();
    edges.sort_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| (a.from, a.to).cmp(&(b.from, b.to)))
    });

    for e in edges {
        if tree.edge_count() == n - 1 {
            break;
        }
        let (a, b) = (set_of[&e.from], set_of[&e.to]);
        if sets.same_set(a, b) {
            continue;
        }
        sets.union(a, b);
        tree.add_edge(e.from, e.to, e.weight);
    }

    if tree.edge_count() + 1 < n {
        log::debug!(
            "min_spanning_tree: graph is disconnected ({} components)",
            sets.set_count()
        );
        return None;
    }
    Some(tree)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use graph::bfs;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn build(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph<usize> {
        let mut g = WeightedGraph::new();
        for i in 0..n {
            g.add_vertex(i, i);
        }
        for &(u, v, w) in edges {
            assert!(g.add_edge(u, v, w));
        }
        g
    }

    /// Spanning tree check: V - 1 edges, every edge from the input, and
    /// every vertex reachable once the edges are made bidirectional.
    fn assert_spanning_tree<T: Clone>(graph: &WeightedGraph<T>, tree: &WeightedGraph<T>) {
        let n = graph.vertex_count();
        assert_eq!(tree.vertex_count(), n);
        assert_eq!(tree.edge_count(), n.saturating_sub(1));
        let mut undirected = tree.as_graph().without_edges();
        for e in tree.edges() {
            assert_eq!(graph.weight(e.from, e.to).unwrap(), e.weight);
            undirected.add_edge(e.from, e.to);
            undirected.add_edge(e.to, e.from);
        }
        if let Some(root) = undirected.iter().next().map(|v| v.id()) {
            let reached = bfs(&undirected, root);
            assert_eq!(reached.edge_count(), n - 1);
        }
    }

    /// Brute force: cheapest spanning subset among all `V - 1` edge subsets.
    fn brute_force_weight(n: usize, edges: &[(usize, usize, f64)]) -> Option<f64> {
        let m = edges.len();
        let mut best: Option<f64> = None;
        for mask in 0_u32..(1 << m) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut sets = DisjointSet::new(n);
            let mut weight = 0.0;
            for (i, &(u, v, w)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    sets.union(u, v);
                    weight += w;
                }
            }
            if sets.set_count() == 1 && best.is_none_or(|b| weight < b) {
                best = Some(weight);
            }
        }
        best
    }

    #[test]
    fn empty_graph() {
        let g: WeightedGraph<usize> = WeightedGraph::new();
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.vertex_count(), 0);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.total_weight(), 0.0);
    }

    #[test]
    fn single_vertex() {
        let g = build(1, &[]);
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn no_edges() {
        assert!(min_spanning_tree(&build(2, &[])).is_none());
    }

    #[test]
    fn not_connected() {
        assert!(min_spanning_tree(&build(3, &[(0, 1, 20.0)])).is_none());
    }

    #[test]
    fn wiki_example() {
        let g = build(
            10,
            &[
                (0, 1, 4.0),
                (0, 2, 1.0),
                (0, 3, 4.0),
                (1, 2, 5.0),
                (1, 4, 9.0),
                (1, 5, 9.0),
                (1, 6, 7.0),
                (2, 6, 9.0),
                (2, 3, 3.0),
                (3, 6, 10.0),
                (3, 9, 18.0),
                (4, 5, 2.0),
                (4, 7, 4.0),
                (4, 8, 6.0),
                (5, 7, 2.0),
                (5, 6, 8.0),
                (6, 9, 8.0),
                (6, 7, 9.0),
                (7, 8, 3.0),
                (7, 9, 9.0),
                (8, 9, 9.0),
            ],
        );
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.total_weight(), 38.0);
        assert_spanning_tree(&g, &tree);
        assert_eq!(*tree.vertex(9).unwrap().data(), 9);
    }

    #[test]
    fn k5() {
        let g = build(
            5,
            &[
                (0, 1, 24.0),
                (0, 2, 13.0),
                (0, 3, 13.0),
                (0, 4, 22.0),
                (1, 2, 22.0),
                (1, 3, 13.0),
                (1, 4, 13.0),
                (2, 3, 19.0),
                (2, 4, 14.0),
                (3, 4, 19.0),
            ],
        );
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.total_weight(), 52.0);
        assert_spanning_tree(&g, &tree);
    }

    #[test]
    fn edge_direction_is_ignored() {
        // 2 only has incoming edges; it still joins the tree.
        let g = build(3, &[(0, 1, 1.0), (1, 2, 5.0), (0, 2, 2.0)]);
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.total_weight(), 3.0);
        assert!(tree.contains_edge(0, 2));
        assert!(!tree.contains_edge(1, 2));
    }

    #[test]
    fn negative_weights() {
        let g = build(4, &[(0, 1, -3.0), (1, 2, 4.0), (2, 3, -1.0), (3, 0, 2.0)]);
        let tree = min_spanning_tree(&g).unwrap();
        assert_eq!(tree.total_weight(), -2.0);
        assert_spanning_tree(&g, &tree);
    }

    #[test]
    fn random_small_graphs_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x3157_0001);
        for _ in 0..200 {
            let n = rng.random_range(1..=6);
            let mut used = HashSet::new();
            let mut edges = Vec::new();
            for _ in 0..rng.random_range(0..=10) {
                let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                if u != v && used.insert((u.min(v), u.max(v))) {
                    edges.push((u, v, rng.random_range(0..20) as f64));
                }
            }
            let g = build(n, &edges);
            let expected = brute_force_weight(n, &edges);
            let got = min_spanning_tree(&g);
            assert_eq!(got.as_ref().map(|t| t.total_weight()), expected, "edges={edges:?}");
            if let Some(tree) = got {
                assert_spanning_tree(&g, &tree);
            }
        }
    }
}

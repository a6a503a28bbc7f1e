use graph::{VertexId, WeightedEdge, WeightedGraph};

use crate::util::{ForestBuilder, initial_distances};
use crate::{INF, ShortestPathResult};

/// Bellman-Ford: up to `V - 1` rounds of relaxing every edge, then one more
/// pass to detect a negative cycle reachable from `source`.
///
/// Negative weights are allowed. Returns the empty result when `source` is
/// absent or a negative cycle is found. `O(V * E)`.
pub fn bellman_ford<T: Clone>(
    graph: &WeightedGraph<T>,
    source: VertexId,
) -> ShortestPathResult<T> {
    if !graph.contains(source) {
        log::debug!("bellman_ford: source {source} not in graph");
        return ShortestPathResult::default();
    }

    let edges: Vec<WeightedEdge> = graph.edges().collect();
    let mut dist = initial_distances(graph, source);
    let mut forest = ForestBuilder::new(graph);

    let mut rounds = 0;
    for _ in 1..graph.vertex_count() {
        rounds += 1;
        let mut changed = false;
        for e in &edges {
            let du = dist.get(&e.from).copied().unwrap_or(INF);
            if du >= INF {
                continue;
            }
            let cand = du + e.weight;
            if cand < dist.get(&e.to).copied().unwrap_or(INF) {
                forest.relax(e.to, e.from, e.weight);
                dist.insert(e.to, cand);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    log::trace!("bellman_ford: settled after {rounds} rounds");

    let has_negative_cycle = edges.iter().any(|e| {
        let du = dist.get(&e.from).copied().unwrap_or(INF);
        du < INF && du + e.weight < dist.get(&e.to).copied().unwrap_or(INF)
    });
    if has_negative_cycle {
        log::debug!("bellman_ford: negative cycle reachable from {source}");
        return ShortestPathResult::default();
    }

    ShortestPathResult::new(source, forest.finish(), dist)
}

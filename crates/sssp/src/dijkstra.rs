use std::collections::HashSet;

use graph::{VertexId, WeightedGraph};
use indexed_heap::IndexedHeap;
use ordered_float::OrderedFloat;

use crate::util::{ForestBuilder, initial_distances};
use crate::{INF, ShortestPathResult};

type HeapEntry = (OrderedFloat<f64>, VertexId);

/// Dijkstra's algorithm with a decrease-key heap, `O((V + E) log V)`.
///
/// Weights must be non-negative; with negative weights the result is
/// unspecified (use [`bellman_ford`](crate::bellman_ford)). An absent source
/// yields the empty result.
pub fn dijkstra<T: Clone>(graph: &WeightedGraph<T>, source: VertexId) -> ShortestPathResult<T> {
    if !graph.contains(source) {
        log::debug!("dijkstra: source {source} not in graph");
        return ShortestPathResult::default();
    }

    let mut dist = initial_distances(graph, source);
    let mut heap: IndexedHeap<HeapEntry> =
        dist.iter().map(|(&v, &d)| (OrderedFloat(d), v)).collect();
    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut forest = ForestBuilder::new(graph);

    while let Ok((OrderedFloat(d), u)) = heap.pop() {
        if !visited.insert(u) {
            continue;
        }
        if d >= INF {
            // everything left in the heap is unreachable
            break;
        }
        let Ok(vertex) = graph.vertex(u) else {
            continue;
        };

        for v in vertex.neighbours() {
            let Ok(w) = graph.weight(u, v) else {
                continue;
            };
            let cand = d + w;
            let old = dist.get(&v).copied().unwrap_or(INF);
            if cand < old {
                log::trace!("dijkstra: relax {v} via {u}: {old} -> {cand}");
                forest.relax(v, u, w);
                dist.insert(v, cand);
                if !visited.contains(&v) {
                    heap.decrease_key(&(OrderedFloat(old), v), (OrderedFloat(cand), v));
                }
            }
        }
    }

    ShortestPathResult::new(source, forest.finish(), dist)
}

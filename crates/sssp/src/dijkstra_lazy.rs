use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use graph::{VertexId, WeightedGraph};
use ordered_float::OrderedFloat;

use crate::util::{ForestBuilder, initial_distances};
use crate::{INF, ShortestPathResult};

/// Dijkstra's algorithm on `std`'s `BinaryHeap`, re-pushing a vertex on every
/// improvement instead of decreasing its key. Stale entries are dropped when
/// popped because their vertex is already visited.
///
/// Same contract and output as [`dijkstra`](crate::dijkstra).
pub fn dijkstra_lazy<T: Clone>(
    graph: &WeightedGraph<T>,
    source: VertexId,
) -> ShortestPathResult<T> {
    if !graph.contains(source) {
        log::debug!("dijkstra_lazy: source {source} not in graph");
        return ShortestPathResult::default();
    }

    let mut dist = initial_distances(graph, source);
    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut forest = ForestBuilder::new(graph);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(d), u))) = heap.pop() {
        if !visited.insert(u) {
            continue;
        }
        let Ok(vertex) = graph.vertex(u) else {
            continue;
        };

        for v in vertex.neighbours() {
            let Ok(w) = graph.weight(u, v) else {
                continue;
            };
            let cand = d + w;
            if cand < dist.get(&v).copied().unwrap_or(INF) {
                forest.relax(v, u, w);
                dist.insert(v, cand);
                if !visited.contains(&v) {
                    heap.push(Reverse((OrderedFloat(cand), v)));
                }
            }
        }
    }

    ShortestPathResult::new(source, forest.finish(), dist)
}

//! Traversals over [`Graph`]. Trees are returned with edges pointing from
//! each vertex to its parent, so the root is the only vertex without an
//! outgoing edge.

use std::collections::{HashSet, VecDeque};

use crate::{Graph, VertexId};

/// Breadth-first search tree rooted at `source`. Empty if `source` is absent.
pub fn bfs<T: Clone>(graph: &Graph<T>, source: VertexId) -> Graph<T> {
    let mut tree = Graph::new();
    let Ok(start) = graph.vertex(source) else {
        log::debug!("bfs: source {source} not in graph");
        return tree;
    };

    tree.add_vertex(source, start.data().clone());
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbours() {
            if tree.contains(next) {
                continue;
            }
            let Ok(vertex) = graph.vertex(next) else {
                continue;
            };
            tree.add_vertex(next, vertex.data().clone());
            tree.add_edge(next, current.id());
            queue.push_back(vertex);
        }
    }

    tree
}

/// Depth-first search tree rooted at `source`. Empty if `source` is absent.
pub fn dfs<T: Clone>(graph: &Graph<T>, source: VertexId) -> Graph<T> {
    let mut tree = Graph::new();
    if !graph.contains(source) {
        log::debug!("dfs: source {source} not in graph");
        return tree;
    }

    let mut visited = HashSet::new();
    let mut stack: Vec<(VertexId, Option<VertexId>)> = vec![(source, None)];

    while let Some((current, parent)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Ok(vertex) = graph.vertex(current) else {
            continue;
        };
        tree.add_vertex(current, vertex.data().clone());
        if let Some(parent) = parent {
            tree.add_edge(current, parent);
        }

        for next in vertex.neighbours() {
            if !visited.contains(&next) {
                stack.push((next, Some(current)));
            }
        }
    }

    tree
}

/// Kahn's algorithm on a private copy of `graph`: emit a source, drop its
/// outgoing edges, repeat.
///
/// Returns `None` if the graph has a cycle.
pub fn topological_sort<T: Clone>(graph: &Graph<T>) -> Option<Vec<VertexId>> {
    let mut work = graph.clone();
    let mut sources: VecDeque<VertexId> = work.sources().into();
    let mut order = Vec::with_capacity(work.vertex_count());

    while let Some(source) = sources.pop_front() {
        order.push(source);
        let targets: Vec<VertexId> = match work.vertex(source) {
            Ok(vertex) => vertex.neighbours().collect(),
            Err(_) => continue,
        };
        for target in targets {
            work.remove_edge(source, target);
            if work.vertex(target).is_ok_and(|v| v.in_degree() == 0) {
                sources.push_back(target);
            }
        }
    }

    if order.len() != work.vertex_count() {
        log::debug!(
            "topological_sort: cycle detected after ordering {} of {} vertices",
            order.len(),
            work.vertex_count()
        );
        return None;
    }
    Some(order)
}

use std::collections::HashSet;

use graph::{VertexId, WeightedGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Integral weights well below 2^53 keep every path sum exact in f64.
const C_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    MaxDenseRandom,
    MaxDenseZero,
    AlmostLine,
    GridRandom,
    WrongDijkstraKiller,
    /// Acyclic, with negative weights. Only valid input for Bellman-Ford.
    NegativeDag,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::MaxDenseRandom => "max_dense_random",
            Self::MaxDenseZero => "max_dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::WrongDijkstraKiller => "wrong_dijkstra_killer",
            Self::NegativeDag => "negative_dag",
        }
    }

    pub fn has_negative_weights(self) -> bool {
        matches!(self, Self::NegativeDag)
    }
}

pub const NON_NEGATIVE_CASES: [GraphCase; 6] = [
    GraphCase::SparseRandom,
    GraphCase::MaxDenseRandom,
    GraphCase::MaxDenseZero,
    GraphCase::AlmostLine,
    GraphCase::GridRandom,
    GraphCase::WrongDijkstraKiller,
];

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: WeightedGraph<()>,
    pub source: VertexId,
    pub target: VertexId,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed, 4),
        GraphCase::MaxDenseRandom => max_dense_random_case(size.max(256), seed),
        GraphCase::MaxDenseZero => max_dense_zero_case(size.max(256), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(64), seed),
        GraphCase::GridRandom => grid_random_case(size.max(256), seed),
        GraphCase::WrongDijkstraKiller => wrong_dijkstra_killer_case(size.max(512), seed),
        GraphCase::NegativeDag => negative_dag_case(size.max(32), seed, 4),
    }
}

/// Vertices `0..n` with unit payload and the given edges.
pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph<()> {
    let mut graph = WeightedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v, ());
    }
    for &(from, to, weight) in edges {
        debug_assert!(from < n && to < n, "edge endpoint out of range");
        graph.add_edge(from, to, weight);
    }
    graph
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = (n.saturating_mul(edge_factor)).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, random_weight(&mut rng));
    }

    let (source, target) = random_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: from_edges(n, &edges),
        source,
        target,
    }
}

fn max_dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u, v, random_weight(&mut rng)));
            }
        }
    }

    let (source, target) = random_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: from_edges(n, &edges),
        source,
        target,
    }
}

fn max_dense_zero_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u, v, 0.0));
            }
        }
    }

    let (source, target) = random_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: from_edges(n, &edges),
        source,
        target,
    }
}

fn almost_line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(8);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, random_weight(&mut rng));
    }

    let m_target = (n.saturating_mul(2)).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v, random_weight(&mut rng));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }

    GeneratedGraph {
        graph: from_edges(n, &edges),
        source: perm[0],
        target: perm[n - 1],
    }
}

fn grid_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt((size / 4).max(16)).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), random_weight(&mut rng)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), random_weight(&mut rng)));
            }
            if j > 0 {
                edges.push((index(i, j), index(i, j - 1), random_weight(&mut rng)));
            }
            if i > 0 {
                edges.push((index(i, j), index(i - 1, j), random_weight(&mut rng)));
            }
        }
    }

    let (source, target) = random_endpoints(&mut rng, n);
    GeneratedGraph {
        graph: from_edges(n, &edges),
        source,
        target,
    }
}

/// Two fans joined at a hub; the order in which the hub is relaxed decides
/// how many stale forest edges a shortest-path run must replace.
fn wrong_dijkstra_killer_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let one = (size / 4).max(8);
    let n = one * 2 + 3;
    let mut edges = Vec::with_capacity(one * 4);

    for i in 0..one {
        edges.push((0, i + 1, i as f64));
        edges.push((i + 1, one + 1, ((one - i - 1) * 2) as f64));
        edges.push((one + 1, one + 2 + i, (2 * i) as f64));
        edges.push((one + 2 + i, n - 1, (one - i - 1) as f64));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }

    GeneratedGraph {
        graph: from_edges(n, &edges),
        source: perm[0],
        target: perm[n - 1],
    }
}

fn negative_dag_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = (n.saturating_mul(edge_factor)).min(complete_edges(n) / 2);
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        let (u, v) = if a < b { (a, b) } else { (b, a) };
        let weight = rng.random_range(-(C_MAX as i64)..=C_MAX as i64) as f64;
        push_unique_edge(&mut edges, &mut used, u, v, weight);
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }

    GeneratedGraph {
        graph: from_edges(n, &edges),
        source: perm[0],
        target: perm[n - 1],
    }
}

#[inline]
fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0..=C_MAX) as f64
}

#[inline]
fn random_endpoints<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (VertexId, VertexId) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(usize, usize, f64)>,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    weight: f64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u, v)) {
        edges.push((u, v, weight));
        true
    } else {
        false
    }
}

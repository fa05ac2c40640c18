use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::UndirectedGraph;

const W_MAX: u64 = 1_000_000_000;

/// Families of connected undirected graphs for tests and benches. Random
/// families lay a shuffled spanning backbone first, so every case is
/// connected by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseConnected,
    DenseRandom,
    Line,
    Grid,
    Complete,
    ZeroHeavy,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseConnected => "sparse_connected",
            Self::DenseRandom => "dense_random",
            Self::Line => "line",
            Self::Grid => "grid",
            Self::Complete => "complete",
            Self::ZeroHeavy => "zero_heavy",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: UndirectedGraph,
    pub source: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseConnected => sparse_connected_case(size.max(32), seed, 4),
        GraphCase::DenseRandom => dense_random_case(size.max(256), seed),
        GraphCase::Line => line_case(size.max(8), seed),
        GraphCase::Grid => grid_case(size.max(256), seed),
        GraphCase::Complete => complete_case(size.max(256), seed),
        GraphCase::ZeroHeavy => zero_heavy_case(size.max(32), seed),
    }
}

fn sparse_connected_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    push_backbone(&mut rng, n, &mut edges, &mut used, W_MAX);
    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=W_MAX));
    }

    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));
    let mut used = HashSet::with_capacity(complete_edges(n) * 2 + 1);

    push_backbone(&mut rng, n, &mut edges, &mut used, W_MAX);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(0.5) {
                push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=W_MAX));
            }
        }
    }

    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

fn line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let mut edges = Vec::with_capacity(n - 1);

    for i in 0..(n - 1) {
        edges.push((i as u32, (i + 1) as u32, rng.random_range(0..=W_MAX)));
    }

    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

fn grid_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((
                    index(i, j) as u32,
                    index(i, j + 1) as u32,
                    rng.random_range(0..=W_MAX),
                ));
            }
            if i + 1 < len {
                edges.push((
                    index(i, j) as u32,
                    index(i + 1, j) as u32,
                    rng.random_range(0..=W_MAX),
                ));
            }
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

fn complete_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u as u32, v as u32, rng.random_range(0..=W_MAX)));
        }
    }

    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

fn zero_heavy_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(3).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    push_backbone(&mut rng, n, &mut edges, &mut used, 10);
    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let w = if rng.random_bool(0.75) {
            0
        } else {
            rng.random_range(1..=10)
        };
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    let source = rng.random_range(0..n);
    GeneratedGraph {
        graph: UndirectedGraph::from_edges(n, &edges),
        source,
    }
}

// Shuffled spanning path over all vertices; everything after it only adds
// redundancy.
fn push_backbone<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    w_max: u64,
) {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    for window in order.windows(2) {
        push_unique_edge(edges, used, window[0], window[1], rng.random_range(0..=w_max));
    }
}

fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let (a, b) = if u < v { (u, v) } else { (v, u) };
    let key = ((a as u64) << 32) | b as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}

use crate::INF;
use crate::builder::GreedyTreeBuilder;
use crate::builder::PriorityRule;
use crate::builder::TreeEdge;
use crate::graph::UndirectedGraph;

/// Shortest-path tree: one entry per vertex id. `entries[v]` is
/// `(v, predecessor, distance-from-source)`; the source holds the
/// `(s, s, 0)` anchor and an unreachable vertex the `(v, v, INF)` marker.
#[derive(Clone, Debug)]
pub struct DistanceTree {
    source: u32,
    entries: Vec<TreeEdge>,
}

pub fn shortest_path_tree(graph: &UndirectedGraph, source: usize) -> Option<DistanceTree> {
    let n = graph.vertex_count();
    if source >= n {
        return None;
    }

    let settled = GreedyTreeBuilder::new(n, source).run(graph, PriorityRule::CumulativeDistance);

    let mut entries: Vec<TreeEdge> = (0..n)
        .map(|v| TreeEdge {
            from: v as u32,
            to: v as u32,
            weight: INF,
        })
        .collect();
    for edge in settled {
        entries[edge.from as usize] = edge;
    }

    Some(DistanceTree {
        source: source as u32,
        entries,
    })
}

impl DistanceTree {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn source(&self) -> u32 {
        self.source
    }

    #[inline]
    pub fn entries(&self) -> &[TreeEdge] {
        &self.entries
    }

    #[inline]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        vertex < self.entries.len() && self.entries[vertex].weight < INF
    }

    /// Distance from the source, `None` for out-of-range or unreachable
    /// vertices.
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        let entry = self.entries.get(vertex)?;
        if entry.weight >= INF {
            return None;
        }
        Some(entry.weight)
    }

    /// Per-vertex distance vector with `INF` holes for unreachable vertices.
    pub fn distances(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.weight).collect()
    }
}

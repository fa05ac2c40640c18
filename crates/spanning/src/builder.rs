use crate::INF;
use crate::graph::UndirectedGraph;
use crate::heap::IndexedMinHeap;

const NO_PREDECESSOR: u32 = u32::MAX;

/// One edge of an output tree.
///
/// Prim emits `(parent, settled vertex, raw edge weight)` in settle order.
/// Dijkstra entries are `(vertex, predecessor, cumulative distance)`, with
/// the source anchored as a zero-weight self-entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeEdge {
    pub from: u32,
    pub to: u32,
    pub weight: u64,
}

/// Relaxation rule distinguishing the two greedy tree algorithms: a
/// neighbor's candidate priority is the raw edge weight (Prim) or the
/// settled vertex's distance plus the edge weight (Dijkstra).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorityRule {
    EdgeWeight,
    CumulativeDistance,
}

/// Shared state of one greedy tree-building run: the priority queue, the
/// settled markers, the tentative predecessors, and the growing edge list.
/// `run` consumes the builder; only the edge list survives.
#[derive(Debug)]
pub struct GreedyTreeBuilder {
    heap: IndexedMinHeap,
    finished: Vec<bool>,
    predecessors: Vec<u32>,
    tree: Vec<TreeEdge>,
}

impl GreedyTreeBuilder {
    pub fn new(vertex_count: usize, source: usize) -> Self {
        assert!(source < vertex_count, "source vertex out of range");

        let mut heap = IndexedMinHeap::with_capacity(vertex_count);
        heap.insert(0, source as u32);
        for v in 0..vertex_count {
            if v != source {
                heap.insert(INF, v as u32);
            }
        }

        Self {
            heap,
            finished: vec![false; vertex_count],
            predecessors: vec![NO_PREDECESSOR; vertex_count],
            tree: Vec::with_capacity(vertex_count),
        }
    }

    pub fn run(mut self, graph: &UndirectedGraph, rule: PriorityRule) -> Vec<TreeEdge> {
        debug_assert_eq!(graph.vertex_count(), self.finished.len());

        while let Some(node) = self.heap.extract_min() {
            // Once the minimum is INF every remaining vertex is unreachable.
            if node.priority >= INF {
                break;
            }
            let id = node.id as usize;
            self.finished[id] = true;
            self.settle(node.id, node.priority, rule);

            for edge in graph.incident_edges(id) {
                if self.finished[edge.to as usize] {
                    continue;
                }
                let candidate = match rule {
                    PriorityRule::EdgeWeight => edge.weight,
                    PriorityRule::CumulativeDistance => {
                        node.priority.saturating_add(edge.weight).min(INF)
                    }
                };
                if self.heap.decrease_key(edge.to, candidate) {
                    self.predecessors[edge.to as usize] = node.id;
                }
            }
        }
        self.tree
    }

    fn settle(&mut self, id: u32, priority: u64, rule: PriorityRule) {
        let predecessor = self.predecessors[id as usize];
        match rule {
            PriorityRule::EdgeWeight => {
                // The source settles without a predecessor and adds no edge.
                if predecessor != NO_PREDECESSOR {
                    self.tree.push(TreeEdge {
                        from: predecessor,
                        to: id,
                        weight: priority,
                    });
                }
            }
            PriorityRule::CumulativeDistance => {
                if predecessor == NO_PREDECESSOR {
                    self.tree.push(TreeEdge {
                        from: id,
                        to: id,
                        weight: 0,
                    });
                } else {
                    self.tree.push(TreeEdge {
                        from: id,
                        to: predecessor,
                        weight: priority,
                    });
                }
            }
        }
    }
}

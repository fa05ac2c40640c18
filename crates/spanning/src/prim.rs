use crate::builder::GreedyTreeBuilder;
use crate::builder::PriorityRule;
use crate::builder::TreeEdge;
use crate::graph::UndirectedGraph;

/// Minimum spanning tree from `source`, as `(parent, vertex, weight)` edges
/// in settle order. `None` when `source` is out of range. On a connected
/// graph the result has exactly `vertex_count() - 1` edges; fewer edges mean
/// the graph was disconnected.
pub fn prim_mst(graph: &UndirectedGraph, source: usize) -> Option<Vec<TreeEdge>> {
    if source >= graph.vertex_count() {
        return None;
    }
    let builder = GreedyTreeBuilder::new(graph.vertex_count(), source);
    Some(builder.run(graph, PriorityRule::EdgeWeight))
}

pub fn tree_weight(tree: &[TreeEdge]) -> u64 {
    tree.iter().map(|edge| edge.weight).sum()
}

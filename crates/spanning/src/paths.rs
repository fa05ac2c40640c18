use crate::builder::TreeEdge;
use crate::dijkstra::DistanceTree;

/// Explicit path from `vertex` back to the tree's source. Each hop is
/// `(vertex, next, incremental weight)` where the weight is the difference
/// of the two cumulative distances. `Some(vec![])` when `vertex` is the
/// source itself; `None` when it is out of range or unreachable.
pub fn path_to(tree: &DistanceTree, vertex: usize) -> Option<Vec<TreeEdge>> {
    if !tree.is_reachable(vertex) {
        return None;
    }

    let source = tree.source() as usize;
    let entries = tree.entries();
    let mut hops = Vec::new();
    let mut current = vertex;

    while current != source {
        let entry = entries[current];
        let next = if entry.from as usize == current {
            entry.to as usize
        } else {
            entry.from as usize
        };
        hops.push(TreeEdge {
            from: current as u32,
            to: next as u32,
            weight: entry.weight - entries[next].weight,
        });
        current = next;
        debug_assert!(hops.len() <= entries.len(), "cycle in distance tree");
    }

    Some(hops)
}

/// `path_to` expanded over the whole vertex set, indexed by vertex id.
pub fn all_paths(tree: &DistanceTree) -> Vec<Option<Vec<TreeEdge>>> {
    (0..tree.vertex_count()).map(|v| path_to(tree, v)).collect()
}

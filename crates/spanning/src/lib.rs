mod builder;
mod dijkstra;
mod heap;
mod paths;
mod prim;

pub mod generator;
pub mod graph;

pub use builder::GreedyTreeBuilder;
pub use builder::PriorityRule;
pub use builder::TreeEdge;
pub use dijkstra::DistanceTree;
pub use dijkstra::shortest_path_tree;
pub use heap::HeapNode;
pub use heap::IndexedMinHeap;
pub use paths::all_paths;
pub use paths::path_to;
pub use prim::prim_mst;
pub use prim::tree_weight;

pub const INF: u64 = u64::MAX / 4;

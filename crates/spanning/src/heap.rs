const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeapNode {
    pub id: u32,
    pub priority: u64,
}

/// Binary min-heap over `(id, priority)` pairs with O(1) id lookup.
///
/// - Ids live in `0..capacity` and each id appears at most once.
/// - `positions[id]` is the id's current slot in `nodes`, or `ABSENT`;
///   every swap remaps both moved ids in the same step.
/// - Ties between equal priorities are broken arbitrarily.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    nodes: Vec<HeapNode>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        matches!(self.positions.get(id as usize), Some(&pos) if pos != ABSENT)
    }

    #[inline]
    pub fn peek(&self) -> Option<&HeapNode> {
        self.nodes.first()
    }

    pub fn priority_of(&self, id: u32) -> Option<u64> {
        let pos = *self.positions.get(id as usize)?;
        if pos == ABSENT {
            return None;
        }
        Some(self.nodes[pos].priority)
    }

    /// Precondition: `id < capacity`, not already present, heap not full.
    pub fn insert(&mut self, priority: u64, id: u32) {
        debug_assert!((id as usize) < self.positions.len(), "id out of capacity");
        debug_assert!(!self.contains(id), "id already present");
        debug_assert!(self.nodes.len() < self.positions.len(), "heap is full");

        let idx = self.nodes.len();
        self.nodes.push(HeapNode { id, priority });
        self.positions[id as usize] = idx;
        self.sift_up(idx);
    }

    pub fn extract_min(&mut self) -> Option<HeapNode> {
        let min = *self.nodes.first()?;
        self.positions[min.id as usize] = ABSENT;

        let last = self.nodes.pop().expect("heap has a root");
        if !self.nodes.is_empty() {
            self.nodes[0] = last;
            self.positions[last.id as usize] = 0;
            self.sift_down(0);
        }
        Some(min)
    }

    /// Lowers `id`'s priority and restores heap order. Returns `false`
    /// without touching anything when `id` is absent or `new_priority` is
    /// not strictly smaller than the current one.
    pub fn decrease_key(&mut self, id: u32, new_priority: u64) -> bool {
        let Some(&pos) = self.positions.get(id as usize) else {
            return false;
        };
        if pos == ABSENT || self.nodes[pos].priority <= new_priority {
            return false;
        }
        self.nodes[pos].priority = new_priority;
        self.sift_up(pos);
        true
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.nodes[parent].priority <= self.nodes[idx].priority {
                break;
            }
            self.swap_nodes(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.nodes[left].priority < self.nodes[smallest].priority {
                smallest = left;
            }
            if right < len && self.nodes[right].priority < self.nodes[smallest].priority {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap_nodes(idx, smallest);
            idx = smallest;
        }
    }

    // Both moved ids must be remapped together, or `positions` goes stale.
    #[inline]
    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions[self.nodes[a].id as usize] = a;
        self.positions[self.nodes[b].id as usize] = b;
    }
}

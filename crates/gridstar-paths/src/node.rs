use std::collections::BinaryHeap;

/// Sentinel `g` for a cell with no known path yet (stands in for +infinity).
pub const UNVISITED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Search bookkeeping for one grid cell.
///
/// One node exists per cell for the duration of a single search; they live
/// in a flat array indexed like the grid (`y * width + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Cost of the best known path from the start, or [`UNVISITED`].
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: i32,
    /// Flat index of the predecessor on the best known path.
    pub parent: Option<usize>,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNVISITED,
            h: 0,
            parent: None,
        }
    }
}

impl SearchNode {
    /// Priority key `g + h`. Saturates for unvisited nodes.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }

    /// Whether a path to this cell has been found.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.g != UNVISITED
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; equal f
        // pops in insertion order.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set: a min-priority queue on `f`, FIFO among ties.
///
/// There is no decrease-key. A cell whose cost improves is pushed again and
/// the older entry goes stale; the caller discards stale pops by checking
/// its closed set.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(NodeRef { idx, f, seq });
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    /// Number of entries pushed so far, stale ones included.
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }

    /// Largest size the frontier reached.
    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use gridstar_core::Point;

    #[test]
    fn f_is_g_plus_h() {
        let node = SearchNode {
            g: 3,
            h: manhattan(Point::new(2, 2), Point::new(4, 5)),
            parent: None,
        };
        assert_eq!(node.h, 5);
        assert_eq!(node.f(), 8);
        assert!(node.is_visited());
    }

    #[test]
    fn default_node_is_unvisited() {
        let node = SearchNode {
            h: 10,
            ..SearchNode::default()
        };
        assert!(!node.is_visited());
        assert_eq!(node.parent, None);
        assert_eq!(node.f(), i32::MAX);
    }

    #[test]
    fn frontier_pops_lowest_f_first() {
        let mut open = Frontier::new();
        open.push(0, 7);
        open.push(1, 3);
        open.push(2, 5);
        let order: Vec<_> = std::iter::from_fn(|| open.pop()).map(|r| r.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn frontier_ties_pop_in_insertion_order() {
        let mut open = Frontier::new();
        open.push(9, 4);
        open.push(3, 4);
        open.push(5, 2);
        open.push(1, 4);
        let order: Vec<_> = std::iter::from_fn(|| open.pop()).map(|r| r.idx).collect();
        assert_eq!(order, vec![5, 9, 3, 1]);
    }

    #[test]
    fn frontier_keeps_duplicates() {
        let mut open = Frontier::new();
        open.push(4, 6);
        open.push(4, 5);
        assert_eq!(open.pushed(), 2);
        assert_eq!(open.high_water(), 2);
        assert_eq!(open.pop().map(|r| r.f), Some(5));
        assert_eq!(open.pop().map(|r| r.f), Some(6));
        assert!(open.pop().is_none());
    }
}

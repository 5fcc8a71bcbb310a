use std::collections::BinaryHeap;

use super::*;

/// Priority structure over active vertices implementing the *highest-label* selection rule.
///
/// Vertices are keyed by their height at the time they are enqueued. A membership bitset
/// guarantees that every vertex is enqueued at most once at any time.
///
/// Keys are not updated when a global relabel changes heights afterwards, so `pop` follows the
/// heights at enqueue time. This only affects the processing order, never the result.
#[derive(Debug, Clone)]
pub struct ActiveVertices {
    heap: BinaryHeap<(Height, Node)>,
    queued: NodeBitSet,
}

impl ActiveVertices {
    /// Creates an empty scheduler for `n` vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: node_bitset(n),
        }
    }

    /// Enqueues `u` with the given height unless it is already enqueued.
    /// Returns *true* if `u` was newly enqueued.
    pub fn push(&mut self, u: Node, height: Height) -> bool {
        if self.queued.put(u as usize) {
            return false;
        }

        self.heap.push((height, u));
        true
    }

    /// Removes and returns the enqueued vertex with the largest height
    pub fn pop(&mut self) -> Option<Node> {
        let (_, u) = self.heap.pop()?;
        self.queued.set(u as usize, false);
        Some(u)
    }

    /// Returns *true* if `u` is currently enqueued
    pub fn contains(&self, u: Node) -> bool {
        self.queued.contains(u as usize)
    }

    /// Number of enqueued vertices
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns *true* if no vertex is enqueued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

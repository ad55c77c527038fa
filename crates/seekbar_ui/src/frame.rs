//! Per-frame batching of deferred visual updates.
//!
//! Input events can arrive many times per frame. Writing styles from inside
//! each handler forces layout reads and writes mid-dispatch, so widgets queue
//! the update instead and the host flushes the queue once per animation frame.
//! Requests for the same target coalesce: only the most recently scheduled
//! task for a key survives until the flush.

/// Coalescing queue of tasks keyed by their target.
#[derive(Debug, Clone)]
pub struct FrameQueue<K, T> {
    pending: Vec<(K, T)>,
}

impl<K: PartialEq, T> FrameQueue<K, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedule `task` for `key`, replacing any task already pending for it.
    ///
    /// A replaced task keeps its original position so flush order follows the
    /// first request per key within a frame.
    pub fn schedule(&mut self, key: K, task: T) {
        if let Some(slot) = self.pending.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = task;
        } else {
            self.pending.push((key, task));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending task for this frame, leaving the queue empty.
    pub fn take(&mut self) -> Vec<(K, T)> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending tasks without running them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<K: PartialEq, T> Default for FrameQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

use std::{
    cmp::Ordering,
    collections::{BTreeMap, VecDeque},
};

use crate::constants::Weight;

/// Total order over weights so they can be used as map keys.
#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(Weight);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Min priority queue that groups items of equal priority.
///
/// Every priority maps to a FIFO sub-queue, so ties are served in the order
/// they were enqueued. There is no decrease-key: an item that should get a
/// better priority is simply enqueued again and the consumer skips the stale
/// copy once it surfaces.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    buckets: BTreeMap<FloatOrd, VecDeque<T>>,
    len: usize,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn enqueue(&mut self, priority: Weight, item: T) {
        // Adding 0.0 folds -0.0 into 0.0, total_cmp would keep them apart
        self.buckets
            .entry(FloatOrd(priority + 0.0))
            .or_default()
            .push_back(item);
        self.len += 1;
    }

    /// Removes the oldest item of the lowest priority.
    pub fn dequeue_min(&mut self) -> Option<(Weight, T)> {
        let mut bucket = self.buckets.first_entry()?;
        let priority = bucket.key().0;
        let item = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        let item = item?;
        self.len -= 1;
        Some((priority, item))
    }

    pub fn peek_priority(&self) -> Option<Weight> {
        self.buckets.keys().next().map(|priority| priority.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct priorities currently queued
    pub fn num_priorities(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates in dequeue order without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = (Weight, &T)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(priority, bucket)| bucket.iter().map(move |item| (priority.0, item)))
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

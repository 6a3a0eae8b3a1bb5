//! Unbounded FIFO shared between threads.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// A `VecDeque` behind a single mutex.
///
/// Every operation takes the lock once and never blocks on an empty queue.
#[derive(Debug)]
pub struct ThreadsafeQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> Default for ThreadsafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ThreadsafeQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    pub fn enqueue(&self, item: T) {
        self.items.lock().push_back(item);
    }

    /// Take the oldest item, or `None` when the queue is empty
    pub fn dequeue(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    pub fn count(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn clear(&self) {
        self.items.lock().clear();
    }

    /// Take every queued item in FIFO order
    pub fn drain(&self) -> Vec<T> {
        self.items.lock().drain(..).collect()
    }
}

impl<T: PartialEq> ThreadsafeQueue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.lock().contains(item)
    }
}

//! Bounded deque for the playground event log
//!
//! Keeps at most `cap` items and drops the oldest one on overflow.

use std::collections::VecDeque;

/// A fixed-capacity deque with FIFO eviction
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a deque holding at most `cap` items. With `cap == 0` pushes are no-ops.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a value, evicting the oldest if full
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Newest to oldest
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_items() {
        let mut log = BoundedDeque::new(3);
        for i in 1..=4 {
            log.push(i);
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter_rev().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
        assert_eq!(log.last(), Some(&4));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut log = BoundedDeque::new(0);
        log.push("focus");
        assert!(log.is_empty());
    }

    #[test]
    fn clear_empties_log() {
        let mut log = BoundedDeque::new(2);
        log.push(1);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }
}

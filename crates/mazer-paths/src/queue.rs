//! Comparator-driven priority queue.
//!
//! Items carry no priority field. Ordering comes entirely from a
//! caller-supplied "comes before" predicate, which may read external state
//! (A* passes one that looks up a cost table it keeps updating). The order
//! is re-evaluated on every [`enqueue`](PriorityQueue::enqueue) and on
//! [`refresh`](PriorityQueue::refresh), never cached per item.
//!
//! The backing store is kept fully sorted with a stable sort, so items the
//! predicate cannot tell apart leave in insertion order.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A priority queue ordered by a strict "comes before" predicate.
///
/// `before(a, b)` must behave like a strict weak ordering (irreflexive,
/// transitive). The item it ranks first is dequeued first.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: VecDeque<T>,
    before: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `before`.
    pub fn new(before: F) -> Self {
        Self {
            items: VecDeque::new(),
            before,
        }
    }

    /// Insert an item and restore ordering.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        self.refresh();
    }

    /// Remove and return the item ranked first, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The item that [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Re-sort against the current answers of the predicate.
    ///
    /// Call this after external state read by the predicate has changed for
    /// an item already in the queue.
    pub fn refresh(&mut self) {
        let before = &self.before;
        self.items
            .make_contiguous()
            .sort_by(|a, b| rank(before, a, b));
    }

    /// Whether any queued item satisfies `predicate`.
    pub fn contains(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Queued items in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

fn rank<T>(before: &impl Fn(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if before(a, b) {
        Ordering::Less
    } else if before(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn basic_enqueue_dequeue() {
        let mut q = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        q.enqueue(3);
        q.enqueue(1);
        q.enqueue(2);

        assert_eq!(q.len(), 3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn output_is_non_decreasing() {
        let mut q = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        for v in [17, 4, 9, 4, 0, 23, 9, 1, 15, 8, 8, 2] {
            q.enqueue(v);
        }
        let mut out = Vec::new();
        while let Some(v) = q.dequeue() {
            out.push(v);
        }
        assert_eq!(out.len(), 12);
        assert!(out.windows(2).all(|w| w[0] <= w[1]), "{out:?}");
    }

    #[test]
    fn ties_leave_in_insertion_order() {
        let mut q = PriorityQueue::new(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        q.enqueue((1, 'a'));
        q.enqueue((0, 'z'));
        q.enqueue((1, 'b'));
        q.enqueue((1, 'c'));

        assert_eq!(q.dequeue(), Some((0, 'z')));
        assert_eq!(q.dequeue(), Some((1, 'a')));
        assert_eq!(q.dequeue(), Some((1, 'b')));
        assert_eq!(q.dequeue(), Some((1, 'c')));
    }

    #[test]
    fn contains_tracks_membership() {
        let mut q = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        assert!(!q.contains(|&v| v == 5));
        q.enqueue(5);
        q.enqueue(7);
        assert!(q.contains(|&v| v == 5));
        assert_eq!(q.dequeue(), Some(5));
        assert!(!q.contains(|&v| v == 5));
        assert!(q.contains(|&v| v == 7));
    }

    #[test]
    fn empty_queue() {
        let mut q = PriorityQueue::new(|a: &u8, b: &u8| a < b);
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        q.enqueue(1);
        assert!(!q.is_empty());
        q.dequeue();
        assert!(q.is_empty());
    }

    #[test]
    fn priorities_are_read_late() {
        // Costs live outside the queue and change after insertion.
        let cost = [Cell::new(5), Cell::new(3), Cell::new(4)];
        let mut q = PriorityQueue::new(|a: &usize, b: &usize| cost[*a].get() < cost[*b].get());
        q.enqueue(0);
        q.enqueue(1);
        assert_eq!(q.peek(), Some(&1));

        cost[0].set(1);
        q.enqueue(2);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);

        cost[2].set(0);
        q.refresh();
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(0));
        assert_eq!(q.dequeue(), Some(1));
    }
}

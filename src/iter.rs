// Purpose: Front-to-back and back-to-front traversal of MDeque, and its bracketed rendering.

use crate::{
    m_deque::MDeque,
    node::{Chain, NodeKey},
};
use std::{
    fmt::{Display, Formatter},
    iter::FusedIterator,
};

// =====================
// Struct Definitions
// =====================

/// Immutable reference iterator for MDeque<T>.
/// Yields &T front to back; `rev()` walks back to front.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

/// Consuming iterator for MDeque<T>.
/// Yields T by value, consuming the deque.
pub struct IntoIter<T> {
    deque: MDeque<T>,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> MDeque<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        debug_assert_eq!(self.chain.len(), self.len());
        Iter {
            chain: &self.chain,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

// =====================
// Trait Implementations
// =====================

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        let node = self.chain.node(key);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        let node = self.chain.node(key);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a MDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for MDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

// Renders `[e1, e2, ..., en]` in a single forward pass.
impl<T: Display> Display for MDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, ", {value}")?;
            }
        }
        f.write_str("]")
    }
}

// =====================
// Tests
// =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_iter() {
        let deque: MDeque<i32> = MDeque::from(vec![10, 20, 30]);
        let mut iter_vec = vec![];

        for val in &deque {
            iter_vec.push(val);
        }

        assert_eq!(vec![&10, &20, &30], iter_vec);
    }

    #[test]
    fn test_rev_iter() {
        let deque: MDeque<i32> = MDeque::from(vec![1, 2, 3]);
        let collected: Vec<_> = deque.iter().rev().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let deque: MDeque<i32> = (1..=5).collect();
        let mut iter = deque.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let deque: MDeque<i32> = (1..=3).collect();
        let first: Vec<_> = deque.iter().collect();
        let second: Vec<_> = deque.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_iter() {
        let deque: MDeque<i32> = MDeque::from(vec![100, 200, 300]);
        let collected: Vec<_> = deque.into_iter().collect();
        assert_eq!(collected, vec![100, 200, 300]);
    }

    #[test]
    fn test_into_iter_rev() {
        let deque: MDeque<i32> = MDeque::from(vec![100, 200, 300]);
        let collected: Vec<_> = deque.into_iter().rev().collect();
        assert_eq!(collected, vec![300, 200, 100]);
    }

    #[test]
    fn test_into_iter_drop() {
        use std::sync::{Arc, Mutex};
        struct DropCounter(Arc<Mutex<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                let mut count = self.0.lock().unwrap();
                *count += 1;
            }
        }
        let counter = Arc::new(Mutex::new(0));
        {
            let mut deque = MDeque::new();
            for _ in 0..4 {
                deque.push_back(DropCounter(counter.clone()));
            }
            // Only consume part of the iterator
            let mut iter = deque.into_iter();
            let _ = iter.next();
        }
        assert_eq!(*counter.lock().unwrap(), 4);
    }

    #[test]
    fn test_display() {
        let empty: MDeque<i32> = MDeque::new();
        assert_eq!(empty.to_string(), "[]");

        let one: MDeque<i32> = MDeque::from(vec![7]);
        assert_eq!(one.to_string(), "[7]");

        let many: MDeque<i32> = MDeque::from(vec![35, 1, 42, 189]);
        assert_eq!(many.to_string(), "[35, 1, 42, 189]");
    }

    #[test]
    fn test_display_leaves_deque_untouched() {
        let deque: MDeque<i32> = MDeque::from(vec![-1, 0, 1]);
        let _ = deque.to_string();
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.peek_middle(), Some(&0));
    }
}

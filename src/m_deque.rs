// Purpose: Linear container with constant-time access at its front, middle and back.

use crate::{
    error::{Error, Result},
    middle::{Mutation, Shift, body_shift},
    node::{Chain, NodeKey},
};
use std::{
    fmt::Debug,
    hash::{Hash, Hasher},
};

// =====================
// Struct Definitions
// =====================

/// A linear collection that supports insertion, removal and peeking at three points: the front,
/// the middle and the back. Pronounced "em-deck".
///
/// The middle is the element at zero-based index `len / 2`. `push_middle` places the new element
/// at index `(len + 1) / 2` of the deque it is pushed into, where it becomes the new middle.
///
/// Every `push_*`, `pop_*` and `peek_*` runs in constant time. Pops and peeks on an empty deque
/// report `None` rather than failing.
///
/// ```
/// use m_deque::MDeque;
///
/// let mut deque = MDeque::new();
/// deque.push_back(1);
/// deque.push_back(3);
/// deque.push_middle(2);
///
/// assert_eq!(deque.peek_middle(), Some(&2));
/// assert_eq!(deque.to_string(), "[1, 2, 3]");
/// ```
pub struct MDeque<T> {
    pub(crate) chain: Chain<T>,
    pub(crate) head: Option<NodeKey>,
    body: Option<NodeKey>,
    pub(crate) tail: Option<NodeKey>,
    count: usize,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> MDeque<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            head: None,
            body: None,
            tail: None,
            count: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            chain: Chain::with_capacity(cap),
            head: None,
            body: None,
            tail: None,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.map(|key| &self.chain.node(key).value)
    }

    pub fn peek_middle(&self) -> Option<&T> {
        self.body.map(|key| &self.chain.node(key).value)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail.map(|key| &self.chain.node(key).value)
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        let key = self.head?;
        Some(&mut self.chain.node_mut(key).value)
    }

    pub fn peek_middle_mut(&mut self) -> Option<&mut T> {
        let key = self.body?;
        Some(&mut self.chain.node_mut(key).value)
    }

    pub fn peek_back_mut(&mut self) -> Option<&mut T> {
        let key = self.tail?;
        Some(&mut self.chain.node_mut(key).value)
    }

    pub fn push_front(&mut self, item: T) {
        let (Some(head), Some(body)) = (self.head, self.body) else {
            self.initialize(item);
            return;
        };

        self.head = Some(self.chain.link_front(head, item));
        self.body = Some(self.step(body, body_shift(self.count, Mutation::PushFront)));
        self.count += 1;
    }

    /// Inserts `item` at index `(len + 1) / 2`: right before the middle when the length is even,
    /// right after it when odd. The new element is the middle afterwards.
    pub fn push_middle(&mut self, item: T) {
        let Some(body) = self.body else {
            self.initialize(item);
            return;
        };

        let key = if self.count % 2 == 0 {
            // Even counts of at least two always leave something in front of the middle.
            self.chain.link_before(body, item)
        } else {
            match self.chain.next(body) {
                Some(next) => self.chain.link_before(next, item),
                None => self.link_tail(item),
            }
        };

        self.body = Some(key);
        self.count += 1;
    }

    pub fn push_back(&mut self, item: T) {
        let Some(body) = self.body else {
            self.initialize(item);
            return;
        };

        self.link_tail(item);
        self.body = Some(self.step(body, body_shift(self.count, Mutation::PushBack)));
        self.count += 1;
    }

    /// Same as [`Self::push_front`] but rejects an absent item before touching the deque.
    pub fn try_push_front(&mut self, item: Option<T>) -> Result<()> {
        self.push_front(item.ok_or(Error::InvalidArgument { argument: "item" })?);
        Ok(())
    }

    /// Same as [`Self::push_middle`] but rejects an absent item before touching the deque.
    pub fn try_push_middle(&mut self, item: Option<T>) -> Result<()> {
        self.push_middle(item.ok_or(Error::InvalidArgument { argument: "item" })?);
        Ok(())
    }

    /// Same as [`Self::push_back`] but rejects an absent item before touching the deque.
    pub fn try_push_back(&mut self, item: Option<T>) -> Result<()> {
        self.push_back(item.ok_or(Error::InvalidArgument { argument: "item" })?);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let (head, body) = (self.head?, self.body?);
        if self.count == 1 {
            return Some(self.truncate(head));
        }

        let shift = body_shift(self.count, Mutation::PopFront);
        self.head = self.chain.next(head);
        self.body = Some(self.step(body, shift));
        self.count -= 1;
        Some(self.chain.unlink(head))
    }

    /// Removes the element at index `len / 2`.
    pub fn pop_middle(&mut self) -> Option<T> {
        let body = self.body?;
        let (Some(previous), Some(next)) = (self.chain.previous(body), self.chain.next(body)) else {
            // The middle is the front only for one element, and the back only for one or two.
            return if self.count == 1 {
                self.pop_front()
            } else {
                self.pop_back()
            };
        };

        self.body = Some(match body_shift(self.count, Mutation::PopMiddle) {
            Shift::TowardFront => previous,
            Shift::TowardBack | Shift::Stay => next,
        });
        self.count -= 1;
        Some(self.chain.unlink(body))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let (tail, body) = (self.tail?, self.body?);
        if self.count == 1 {
            return Some(self.truncate(tail));
        }

        let shift = body_shift(self.count, Mutation::PopBack);
        self.tail = self.chain.previous(tail);
        self.body = Some(self.step(body, shift));
        self.count -= 1;
        Some(self.chain.unlink(tail))
    }

    /// Reverses the order of the elements in place, in linear time.
    pub fn reverse(&mut self) {
        let Some(body) = self.body else {
            return;
        };
        tracing::trace!(len = self.count, "reversing m-deque");

        let body = self.step(body, body_shift(self.count, Mutation::Reverse));
        self.chain.flip();
        std::mem::swap(&mut self.head, &mut self.tail);
        self.body = Some(body);
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.count, "clearing m-deque");
        self.chain.clear();
        self.head = None;
        self.body = None;
        self.tail = None;
        self.count = 0;
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == value)
    }

    fn initialize(&mut self, item: T) {
        debug_assert_eq!(self.count, 0);
        let key = self.chain.link_single(item);
        self.head = Some(key);
        self.body = Some(key);
        self.tail = Some(key);
        self.count = 1;
    }

    // Appends after the current tail without touching `body` or `count`.
    fn link_tail(&mut self, item: T) -> NodeKey {
        let key = match self.tail {
            Some(tail) => self.chain.link_back(tail, item),
            None => self.chain.link_single(item),
        };
        self.tail = Some(key);
        key
    }

    // Single-element tear-down. Only valid when exactly one element remains.
    fn truncate(&mut self, key: NodeKey) -> T {
        debug_assert_eq!(self.count, 1);
        debug_assert!(self.head == Some(key) && self.body == Some(key) && self.tail == Some(key));

        self.head = None;
        self.body = None;
        self.tail = None;
        self.count = 0;
        self.chain.unlink(key)
    }

    fn step(&self, key: NodeKey, shift: Shift) -> NodeKey {
        let moved = match shift {
            Shift::Stay => return key,
            Shift::TowardFront => self.chain.previous(key),
            Shift::TowardBack => self.chain.next(key),
        };
        debug_assert!(moved.is_some(), "middle stepped off the chain");
        moved.unwrap_or(key)
    }
}

// =====================
// Trait Implementations
// =====================

impl<T> Default for MDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for MDeque<T> {
    fn clone(&self) -> Self {
        let mut new = MDeque::with_capacity(self.count);
        for value in self {
            new.push_back(value.clone());
        }
        new
    }
}

impl<T: Debug> Debug for MDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for MDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for MDeque<T> {}

impl<T: Hash> Hash for MDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.count);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Extend<T> for MDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for MDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new_deque = MDeque::new();
        new_deque.extend(iter);
        new_deque
    }
}

impl<T> From<Vec<T>> for MDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut new_deque = MDeque::with_capacity(vec.len());
        new_deque.extend(vec);
        new_deque
    }
}

impl<T: Clone> From<&[T]> for MDeque<T> {
    fn from(slice: &[T]) -> Self {
        let mut new_deque = MDeque::with_capacity(slice.len());
        new_deque.extend(slice.iter().cloned());
        new_deque
    }
}

// =====================
// Tests
// =====================

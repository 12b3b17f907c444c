// Purpose: Slab-owned doubly-linked chain of nodes and the splicing primitives used by MDeque.

use slab::Slab;

// =====================
// Struct Definitions
// =====================

/// Index of a node inside its [`Chain`].
///
/// Only meaningful for the chain that handed it out. A key outlives its node once the node
/// is unlinked; indexing with such a key panics instead of reading a stale value.
pub(crate) type NodeKey = usize;

/// One stored element and the keys of its neighbours.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeKey>,
    pub(crate) previous: Option<NodeKey>,
}

/// The storage behind an `MDeque`.
///
/// The slab is the sole owner of every node. Neighbour links and the deque's front, middle and
/// back references are plain keys, so unlinking a node moves it out of the slab and drops it in
/// one step.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    nodes: Slab<Node<T>>,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            previous: None,
        }
    }
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(cap),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, key: NodeKey) -> &Node<T> {
        &self.nodes[key]
    }

    pub(crate) fn node_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        &mut self.nodes[key]
    }

    pub(crate) fn next(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes[key].next
    }

    pub(crate) fn previous(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes[key].previous
    }

    /// Stores a node with no neighbours. Used to start an empty chain.
    pub(crate) fn link_single(&mut self, value: T) -> NodeKey {
        self.nodes.insert(Node::new(value))
    }

    /// Links a new node in front of `head` and returns its key.
    pub(crate) fn link_front(&mut self, head: NodeKey, value: T) -> NodeKey {
        let mut node = Node::new(value);
        node.next = Some(head);
        let key = self.nodes.insert(node);
        self.nodes[head].previous = Some(key);
        key
    }

    /// Links a new node after `tail` and returns its key.
    pub(crate) fn link_back(&mut self, tail: NodeKey, value: T) -> NodeKey {
        let mut node = Node::new(value);
        node.previous = Some(tail);
        let key = self.nodes.insert(node);
        self.nodes[tail].next = Some(key);
        key
    }

    /// Links a new node between `existing` and its predecessor, which must be present.
    pub(crate) fn link_before(&mut self, existing: NodeKey, value: T) -> NodeKey {
        let previous = self.nodes[existing].previous;
        debug_assert!(previous.is_some(), "link_before needs an interior position");

        let mut node = Node::new(value);
        node.next = Some(existing);
        node.previous = previous;
        let key = self.nodes.insert(node);

        self.nodes[existing].previous = Some(key);
        if let Some(previous) = previous {
            self.nodes[previous].next = Some(key);
        }
        key
    }

    /// Unlinks `key` from its neighbours, closing the gap, and returns the stored value.
    ///
    /// The node is dropped here. Any outstanding copy of `key` becomes invalid.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> T {
        let node = self.nodes.remove(key);

        if let Some(previous) = node.previous {
            self.nodes[previous].next = node.next;
        }
        if let Some(next) = node.next {
            self.nodes[next].previous = node.previous;
        }

        node.value
    }

    /// Swaps `next` and `previous` on every node, turning the chain around.
    pub(crate) fn flip(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            std::mem::swap(&mut node.next, &mut node.previous);
        }
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

// =====================
// Tests
// =====================

#[cfg(test)]
mod tests {
    use super::*;

    // Walks `next` links from `head` and collects the values.
    fn forward(chain: &Chain<i32>, head: NodeKey) -> Vec<i32> {
        let mut values = Vec::new();
        let mut cursor = Some(head);
        while let Some(key) = cursor {
            values.push(chain.node(key).value);
            cursor = chain.next(key);
        }
        values
    }

    // Walks `previous` links from `tail` and collects the values.
    fn backward(chain: &Chain<i32>, tail: NodeKey) -> Vec<i32> {
        let mut values = Vec::new();
        let mut cursor = Some(tail);
        while let Some(key) = cursor {
            values.push(chain.node(key).value);
            cursor = chain.previous(key);
        }
        values
    }

    #[test]
    fn test_link_front_and_back() {
        let mut chain = Chain::new();
        let middle = chain.link_single(2);
        let head = chain.link_front(middle, 1);
        let tail = chain.link_back(middle, 3);

        assert_eq!(chain.len(), 3);
        assert_eq!(forward(&chain, head), vec![1, 2, 3]);
        assert_eq!(backward(&chain, tail), vec![3, 2, 1]);
    }

    #[test]
    fn test_link_before_interior() {
        let mut chain = Chain::new();
        let head = chain.link_single(1);
        let tail = chain.link_back(head, 3);
        let inserted = chain.link_before(tail, 2);

        assert_eq!(chain.previous(inserted), Some(head));
        assert_eq!(chain.next(inserted), Some(tail));
        assert_eq!(forward(&chain, head), vec![1, 2, 3]);
        assert_eq!(backward(&chain, tail), vec![3, 2, 1]);
    }

    #[test]
    fn test_unlink_closes_gap() {
        let mut chain = Chain::new();
        let head = chain.link_single(1);
        let middle = chain.link_back(head, 2);
        let tail = chain.link_back(middle, 3);

        assert_eq!(chain.unlink(middle), 2);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.next(head), Some(tail));
        assert_eq!(chain.previous(tail), Some(head));
    }

    #[test]
    fn test_unlink_ends() {
        let mut chain = Chain::new();
        let head = chain.link_single(1);
        let tail = chain.link_back(head, 2);

        assert_eq!(chain.unlink(head), 1);
        assert_eq!(chain.previous(tail), None);
        assert_eq!(chain.unlink(tail), 2);
        assert_eq!(chain.len(), 0);
    }

    #[test]
    #[should_panic]
    fn test_unlinked_key_is_rejected() {
        let mut chain = Chain::new();
        let head = chain.link_single(1);
        chain.unlink(head);
        let _ = chain.node(head);
    }

    #[test]
    fn test_flip() {
        let mut chain = Chain::new();
        let head = chain.link_single(1);
        let middle = chain.link_back(head, 2);
        let tail = chain.link_back(middle, 3);

        chain.flip();

        assert_eq!(forward(&chain, tail), vec![3, 2, 1]);
        assert_eq!(backward(&chain, head), vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_releases_values() {
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
            let mut chain = Chain::new();
            let head = chain.link_single(DropCounter(counter.clone()));
            let tail = chain.link_back(head, DropCounter(counter.clone()));
            chain.link_back(tail, DropCounter(counter.clone()));
            drop(chain.unlink(head));
            assert_eq!(*counter.lock().unwrap(), 1);
        }
        assert_eq!(*counter.lock().unwrap(), 3);
    }
}

//! Binomial Queue implementation
//!
//! A binomial queue is a forest of binomial trees with:
//! - O(log n) insert and delete_min
//! - O(log n) find_min (a scan over the roots, no cached minimum)
//! - O(log n) destructive merge
//!
//! # Algorithm Overview
//!
//! A binomial queue maintains a collection of binomial trees, where:
//! - Each tree satisfies the heap property
//! - At most one tree of each order (0, 1, 2, ..., log n)
//! - Slot `i` of the tree array is occupied exactly when bit `i` of the
//!   element count is set
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! **Key Operations**:
//! - **Insert**: O(log n) worst - carry a single-node tree up the slot array
//! - **Delete-min**: O(log n) worst - find min root, remove it, merge its children back
//! - **Merge**: O(log n) worst - add the two slot arrays like binary numbers
//!
//! # Ownership
//!
//! Every node owns its leftmost child and its next sibling through a `Box`,
//! and the queue owns its roots. There are no parent links and no shared
//! ownership, so moving a tree between queues is a pointer move.

use crate::traits::{Heap, HeapError};
use std::fmt;

/// Type alias for an optional owned subtree
type NodePtr<T> = Option<Box<Node<T>>>;

/// Internal node structure for binomial trees
///
/// The children of a root of order k are roots of orders k-1, k-2, ..., 0,
/// chained through `sibling` from highest order to lowest.
struct Node<T> {
    element: T,
    /// Leftmost (highest order) child
    child: NodePtr<T>,
    /// Next child of the same parent, one order lower
    sibling: NodePtr<T>,
}

impl<T> Node<T> {
    fn leaf(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            child: None,
            sibling: None,
        })
    }
}

/// Binomial Queue
///
/// # Example
///
/// ```rust
/// use binomial_queue::binomial::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// queue.insert(5);
/// queue.insert(2);
/// queue.insert(8);
/// assert_eq!(queue.find_min(), Ok(&2));
/// assert_eq!(queue.delete_min(), Ok(2));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct BinomialQueue<T: Ord> {
    /// Tree roots indexed by order. Slot `i` is empty or holds a tree of exactly 2ⁱ nodes.
    trees: Vec<NodePtr<T>>,
    /// Number of elements in the queue
    len: usize,
}

// No manual Drop needed. Dropping a node recurses into its child and its
// sibling, both of strictly lower order, so stack depth is bounded by the
// largest order rather than by the element count.

impl<T: Ord> BinomialQueue<T> {
    /// Creates an empty queue with no tree slots
    pub fn new() -> Self {
        Self {
            trees: Vec::new(),
            len: 0,
        }
    }

    /// Creates a queue holding a single element as an order-0 tree
    pub fn with_element(element: T) -> Self {
        Self {
            trees: vec![Some(Node::leaf(element))],
            len: 1,
        }
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the current slot array can represent without growing
    ///
    /// With `n` slots this is 2ⁿ - 1, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        u32::try_from(self.trees.len())
            .ok()
            .and_then(|slots| 1usize.checked_shl(slots))
            .map_or(usize::MAX, |limit| limit - 1)
    }

    /// Removes every element, dropping all trees
    pub fn clear(&mut self) {
        self.trees.clear();
        self.len = 0;
    }

    /// Returns a reference to the smallest element
    ///
    /// **Time Complexity**: O(log n), a scan over at most log₂(n) + 1 roots.
    ///
    /// The minimum of a heap-ordered forest is always one of its roots. When
    /// several roots hold equal elements, which one is returned is unspecified.
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if the queue is empty.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        let order = self.find_min_order().ok_or(HeapError::EmptyQueue)?;
        self.trees[order]
            .as_ref()
            .map(|root| &root.element)
            .ok_or(HeapError::EmptyQueue)
    }

    /// Inserts an element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: This is a merge with a one-element queue, specialized:
    /// 1. Create a new single-node tree (B₀)
    /// 2. Starting at order 0, while the slot is occupied, combine the slot's
    ///    tree with the carry and move one order up
    /// 3. Place the carry in the first empty slot, growing the array if needed
    ///
    /// The slot's existing tree is always the first argument to the combine,
    /// exactly as in [`merge`](Self::merge), so ties resolve the same way.
    /// The carry only runs off the end when every slot is full, which is
    /// exactly when a merge would grow; both grow to `max(slots, 1) + 1`.
    pub fn insert(&mut self, element: T) {
        let mut carry = Node::leaf(element);
        let mut order = 0;

        loop {
            if order == self.trees.len() {
                let slots = self.trees.len().max(1) + 1;
                self.trees.resize_with(slots, || None);
            }

            match self.trees[order].take() {
                None => {
                    self.trees[order] = Some(carry);
                    break;
                }
                Some(existing) => {
                    carry = combine_trees(existing, carry);
                    order += 1;
                }
            }
        }

        self.len += 1;
    }

    /// Removes and returns the smallest element
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum, at order m
    /// 2. Detach that root and move its element out
    /// 3. Its children are trees of orders m-1, ..., 0 (highest first in the
    ///    sibling chain); place each in a secondary queue at the slot matching
    ///    its order, unlinking it from its siblings
    /// 4. Clear slot m and subtract the whole tree (2ᵐ elements) from the count
    /// 5. Merge the secondary queue (2ᵐ - 1 elements) back in
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if the queue is empty. Nothing is
    /// modified in that case.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        let min_order = self.find_min_order().ok_or(HeapError::EmptyQueue)?;
        let root = self.trees[min_order]
            .take()
            .ok_or(HeapError::EmptyQueue)?;
        let Node { element, child, .. } = *root;

        let mut children = BinomialQueue {
            trees: Vec::with_capacity(min_order),
            len: (1 << min_order) - 1,
        };
        children.trees.resize_with(min_order, || None);

        let mut order = min_order;
        let mut next = child;
        while let Some(mut subtree) = next {
            next = subtree.sibling.take();
            order -= 1;
            children.trees[order] = Some(subtree);
        }
        debug_assert_eq!(order, 0, "root of order {min_order} had too few children");

        self.len -= 1 << min_order;
        self.merge_trees(&mut children);

        Ok(element)
    }

    /// Removes the smallest element and drops it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if the queue is empty.
    pub fn discard_min(&mut self) -> Result<(), HeapError> {
        self.delete_min().map(drop)
    }

    /// Merges another queue into this one, consuming it
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Taking `other` by value means the caller can never observe a
    /// half-merged donor, and a queue cannot be merged into itself.
    pub fn merge(&mut self, mut other: Self) {
        self.merge_trees(&mut other);
    }

    /// Moves every element of `other` into this queue, leaving `other` empty
    ///
    /// Same algorithm as [`merge`](Self::merge), for callers that want to keep
    /// using the donor afterwards (like `BinaryHeap::append`).
    pub fn append(&mut self, other: &mut Self) {
        self.merge_trees(other);
    }

    /// Order of the tree whose root holds the minimum, or None if empty
    ///
    /// Ties go to the lowest order.
    fn find_min_order(&self) -> Option<usize> {
        self.trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.as_ref().map(|root| (order, &root.element)))
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(order, _)| order)
    }

    /// Merges trees from another queue into this one
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: Binary addition with carry, one slot (bit) at a time
    /// from order 0 upward, for every order i with 2ⁱ <= combined length.
    /// At each order there are three possible inputs: this queue's tree (T1),
    /// the other queue's tree (T2), and the carry from the previous order (C).
    ///
    /// | present     | slot i keeps | new carry            |
    /// |-------------|--------------|----------------------|
    /// | none        | nothing      | none                 |
    /// | one of them | that tree    | none                 |
    /// | T1, T2      | nothing      | combine(T1, T2)      |
    /// | T1, C       | nothing      | combine(T1, C)       |
    /// | T2, C       | nothing      | combine(T2, C)       |
    /// | T1, T2, C   | C            | combine(T1, T2)      |
    ///
    /// The slot array is grown once, before the walk, to
    /// `max(own slots, other's slots) + 1` when the combined length would not
    /// fit, which leaves room for the final carry.
    ///
    /// Afterwards `other` owns no trees and has length 0.
    fn merge_trees(&mut self, other: &mut Self) {
        let total = self.len + other.len;

        if total > self.capacity() {
            let slots = self.trees.len().max(other.trees.len()) + 1;
            self.trees.resize_with(slots, || None);
        }

        // Orders 0..span are exactly those with 2^order <= total
        let span = (usize::BITS - total.leading_zeros()) as usize;
        let mut carry: NodePtr<T> = None;

        for order in 0..span {
            let ours = self.trees[order].take();
            let theirs = other.trees.get_mut(order).and_then(Option::take);

            self.trees[order] = match (ours, theirs, carry.take()) {
                (None, None, None) => None,
                (Some(tree), None, None) | (None, Some(tree), None) | (None, None, Some(tree)) => {
                    Some(tree)
                }
                (Some(t1), Some(t2), None) => {
                    carry = Some(combine_trees(t1, t2));
                    None
                }
                (Some(t1), None, Some(c)) => {
                    carry = Some(combine_trees(t1, c));
                    None
                }
                (None, Some(t2), Some(c)) => {
                    carry = Some(combine_trees(t2, c));
                    None
                }
                (Some(t1), Some(t2), Some(c)) => {
                    carry = Some(combine_trees(t1, t2));
                    Some(c)
                }
            };
        }
        debug_assert!(carry.is_none(), "carry left over after order {span}");

        other.trees.clear();
        other.len = 0;
        self.len = total;
    }
}

/// Links two binomial trees of the same order into one tree of order+1
///
/// **Time Complexity**: O(1)
///
/// The root with the larger element becomes the new leftmost child of the
/// other root, and that root's previous children become its siblings. If the
/// roots are equal, `a` stays on top.
fn combine_trees<T: Ord>(a: Box<Node<T>>, b: Box<Node<T>>) -> Box<Node<T>> {
    let (mut parent, mut child) = if b.element < a.element { (b, a) } else { (a, b) };
    child.sibling = parent.child.take();
    parent.child = Some(child);
    parent
}

/// Deep-copies a tree
///
/// Recursion only descends into children, each of strictly lower order than
/// its parent, so depth is bounded by the order of `root`. Siblings are
/// walked iteratively.
fn clone_tree<T: Clone>(root: &Node<T>) -> Box<Node<T>> {
    let mut children = Vec::new();
    let mut cursor = root.child.as_deref();
    while let Some(child) = cursor {
        children.push(clone_tree(child));
        cursor = child.sibling.as_deref();
    }

    // Relink in the original order, highest order first
    let mut chain: NodePtr<T> = None;
    for mut child in children.into_iter().rev() {
        child.sibling = chain;
        chain = Some(child);
    }

    Box::new(Node {
        element: root.element.clone(),
        child: chain,
        sibling: None,
    })
}

impl<T: Ord + Clone> Clone for BinomialQueue<T> {
    fn clone(&self) -> Self {
        Self {
            trees: self
                .trees
                .iter()
                .map(|slot| slot.as_deref().map(clone_tree))
                .collect(),
            len: self.len,
        }
    }

    /// Replaces this queue's contents with a deep copy of `source`, reusing
    /// the slot array's allocation.
    fn clone_from(&mut self, source: &Self) {
        self.trees.clear();
        self.trees
            .extend(source.trees.iter().map(|slot| slot.as_deref().map(clone_tree)));
        self.len = source.len;
    }
}

impl<T: Ord> Default for BinomialQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<T> for BinomialQueue<T> {
    fn from(element: T) -> Self {
        Self::with_element(element)
    }
}

impl<T: Ord> Extend<T> for BinomialQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinomialQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinomialQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<(usize, &T)> = self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(order, slot)| slot.as_ref().map(|root| (order, &root.element)))
            .collect();

        f.debug_struct("BinomialQueue")
            .field("len", &self.len)
            .field("roots", &roots)
            .finish()
    }
}

impl<T: Ord> Heap<T> for BinomialQueue<T> {
    fn new() -> Self {
        BinomialQueue::new()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.delete_min().ok()
    }

    fn merge(&mut self, other: Self) {
        BinomialQueue::merge(self, other);
    }
}

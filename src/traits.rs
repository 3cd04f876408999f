//! Common traits for priority queue data structures
//!
//! This module provides the [`Heap`] trait, a small interface in the shape of
//! Rust's standard `BinaryHeap` API, plus the [`HeapError`] type returned by
//! the fallible queue operations.
//!
//! Unlike `BinaryHeap`, heaps in this crate are min-heaps: `peek` and `pop`
//! observe the smallest element.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    EmptyQueue,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyQueue => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-priority queues
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// The element itself is its own priority, so `T` must be totally ordered.
///
/// # Example
///
/// ```rust
/// use binomial_queue::Heap;
/// use binomial_queue::binomial::BinomialQueue;
///
/// let mut heap = BinomialQueue::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) worst-case for binomial queues.
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) worst-case for binomial queues.
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n) for binomial queues.
    fn merge(&mut self, other: Self);
}

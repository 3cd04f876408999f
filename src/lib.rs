//! Binomial Queue for Rust
//!
//! This crate provides a binomial queue: a min-priority queue stored as a
//! forest of heap-ordered binomial trees, at most one tree per order.
//!
//! # Features
//!
//! - **Insert**: O(log n) worst-case, a carry propagated up the tree array
//! - **Find-min**: O(log n), a scan over the tree roots
//! - **Delete-min**: O(log n) worst-case, the minimum root's children are merged back
//! - **Merge**: O(log n) worst-case, binary addition over tree orders; the donor is consumed
//!
//! # Example
//!
//! ```rust
//! use binomial_queue::binomial::BinomialQueue;
//!
//! let mut a: BinomialQueue<i32> = [1, 4].into_iter().collect();
//! let b: BinomialQueue<i32> = [2, 3].into_iter().collect();
//! a.merge(b);
//!
//! assert_eq!(a.len(), 4);
//! assert_eq!(a.find_min(), Ok(&1));
//! assert_eq!(a.delete_min(), Ok(1));
//! assert_eq!(a.delete_min(), Ok(2));
//! ```

pub mod binomial;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialQueue;
pub use traits::{Heap, HeapError};

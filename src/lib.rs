//! # Patsort
//!
//! `patsort` is an adaptive, comparison-based sorting library built on **patience sort**.
//!
//! Sorting happens in two phases:
//!
//! 1. **Dealing**: elements are dealt, in input order, onto "decks" (as in the patience card
//!    game). Each element goes on the leftmost deck whose top is smaller than it, found with a
//!    binary search over the deck tops; if there is none, it opens a new deck on the right.
//! 2. **Merging**: the decks, each already sorted, are merged pairwise in balanced rounds until
//!    a single sorted run is left.
//!
//! ## Key Features
//!
//! - **Adaptive**: Input made of few ascending runs produces few decks. Sorted input is a
//!   single deck and costs `n - 1` comparisons.
//! - **Two storage strategies**: Decks can live in contiguous memory (merged in place inside
//!   the slice) or in linked lists (merged by splicing nodes).
//! - **No bounds on `T`**: Slices are sorted with swaps and rotations only, so elements need
//!   neither `Clone` nor `Default`, and no `unsafe` code is involved.
//! - **Linked lists**: [`patience_sort_list`] sorts a [`std::collections::LinkedList`] by
//!   relinking its nodes; elements never leave their allocation.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use patsort::patience_sort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! patience_sort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Custom Orderings and Collections
//!
//! The [`PatienceSort`] trait adds the same operations to slices, `Vec`, `VecDeque` and
//! `LinkedList`.
//!
//! ```rust
//! use patsort::PatienceSort;
//! use std::collections::VecDeque;
//!
//! struct User {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let mut users = VecDeque::from(vec![
//!     User { name: "Bob", age: 42 },
//!     User { name: "Alice", age: 31 },
//! ]);
//! users.patience_sort_by_key(|u| u.age);
//!
//! assert_eq!(users[0].name, "Alice");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Dealing**: O(n log k) comparisons, where `k` is the number of decks.
//! - **Merging**: O(log k) rounds. The linked variant does O(n) work per round; the contiguous
//!   variant merges in place by rotation, trading extra element moves for zero buffer memory.
//! - **Best Case**: O(n) for already sorted input.
//! - **Memory Overhead**: One `usize` per element for the index decks (slices), nothing beyond
//!   the deck headers for linked lists.
//!
//! The sort is stable. A deck only accepts elements strictly greater than its top, so a later
//! equal element always lands on a deck further right, and both merge primitives favor the
//! left run on ties.

pub mod algo;
pub mod core;
pub(crate) mod deck;
pub mod merge;
pub use algo::{
    deal_decks, deal_decks_by, patience_sort, patience_sort_by, patience_sort_by_key,
    patience_sort_contiguous_by, patience_sort_linked_by, patience_sort_list,
    patience_sort_list_by,
};
pub use crate::core::PatienceSort;

pub mod prelude {
    pub use crate::algo::{
        patience_sort, patience_sort_by, patience_sort_by_key, patience_sort_list,
        patience_sort_list_by,
    };
    pub use crate::core::PatienceSort;
}

//! Core traits and types for patsort.
//!
//! This module defines:
//! - [`PatienceSort`]: Extension trait that adds patience sorting to slices, deques and lists.
//! - Pile: Internal abstraction over the storage a deck keeps its elements in.

use std::cmp::Ordering;
use std::collections::{LinkedList, VecDeque};

use crate::algo;

/// Storage backing a single deck.
///
/// A deck receives "cards" one at a time and only ever grows at its back. The card type is
/// whatever the storage can absorb without touching the element itself: a plain value for
/// contiguous decks, a detached single-node list for linked decks.
pub(crate) trait Pile: Sized {
    type Item;
    type Card;

    /// The element carried by a card, if any.
    fn face(card: &Self::Card) -> Option<&Self::Item>;

    /// The trailing (greatest) element of the deck.
    fn top(&self) -> Option<&Self::Item>;

    /// Opens a new deck holding only `card`.
    fn start(card: Self::Card) -> Self;

    /// Puts `card` at the back of the deck.
    fn place(&mut self, card: Self::Card);
}

impl<E> Pile for Vec<E> {
    type Item = E;
    type Card = E;

    #[inline(always)]
    fn face(card: &E) -> Option<&E> {
        Some(card)
    }

    #[inline(always)]
    fn top(&self) -> Option<&E> {
        self.last()
    }

    fn start(card: E) -> Self {
        vec![card]
    }

    #[inline]
    fn place(&mut self, card: E) {
        self.push(card);
    }
}

// Linked decks move whole nodes around, the element never leaves its allocation.
impl<E> Pile for LinkedList<E> {
    type Item = E;
    type Card = LinkedList<E>;

    #[inline(always)]
    fn face(card: &LinkedList<E>) -> Option<&E> {
        card.front()
    }

    #[inline(always)]
    fn top(&self) -> Option<&E> {
        self.back()
    }

    fn start(card: LinkedList<E>) -> Self {
        card
    }

    #[inline]
    fn place(&mut self, mut card: LinkedList<E>) {
        self.append(&mut card);
    }
}

/// Unlinks the first node of `list` and returns it as a one-element list.
///
/// `split_off(1)` walks zero nodes, so this is O(1) and never moves the element.
#[inline]
pub(crate) fn detach_front<E>(list: &mut LinkedList<E>) -> Option<LinkedList<E>> {
    if list.is_empty() {
        return None;
    }
    let rest = list.split_off(1);
    Some(std::mem::replace(list, rest))
}

/// A trait for sorting a collection in place with patience sort.
///
/// Random-access collections are sorted through the contiguous deck representation,
/// linked lists are sorted purely by relinking their nodes.
///
/// # Examples
///
/// ```
/// use patsort::PatienceSort;
/// use std::collections::LinkedList;
///
/// let mut data = vec![3, 1, 2];
/// data.patience_sort();
/// assert_eq!(data, vec![1, 2, 3]);
///
/// let mut list: LinkedList<_> = ["pear", "fig", "apple"].into_iter().collect();
/// list.patience_sort_by_key(|s| s.len());
/// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["fig", "pear", "apple"]);
/// ```
pub trait PatienceSort {
    /// The type of the elements being sorted.
    type Item;

    /// Sorts the collection with a comparator function.
    fn patience_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;

    /// Sorts the collection in ascending order.
    fn patience_sort(&mut self)
    where
        Self::Item: Ord,
    {
        self.patience_sort_by(|a, b| a.cmp(b));
    }

    /// Sorts the collection with a key extraction function.
    ///
    /// The key function is called twice per comparison.
    fn patience_sort_by_key<K, G>(&mut self, mut key: G)
    where
        K: Ord,
        G: FnMut(&Self::Item) -> K,
    {
        self.patience_sort_by(|a, b| key(a).cmp(&key(b)));
    }
}

impl<T> PatienceSort for [T] {
    type Item = T;

    fn patience_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::patience_sort_by(self, compare);
    }
}

// Ring buffers are rotated into one slice first, then sorted like any other slice.
impl<T> PatienceSort for VecDeque<T> {
    type Item = T;

    fn patience_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::patience_sort_by(self.make_contiguous(), compare);
    }
}

impl<T> PatienceSort for LinkedList<T> {
    type Item = T;

    fn patience_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::patience_sort_list_by(self, compare);
    }
}

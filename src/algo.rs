//! Patience sort entry points.
//!
//! Every sort call runs the same three steps:
//! - **Build**: deal the input onto decks (see the `deck` module).
//! - **Merge**: reduce the decks to one run with a balanced pairwise schedule
//!   (see [`crate::merge`]).
//! - **Deliver**: leave the merged run in the caller's storage.
//!
//! Slices can be sorted through either deck representation. [`patience_sort_contiguous_by`]
//! keeps decks as index vectors and merges inside the slice itself, while
//! [`patience_sort_linked_by`] routes decks through linked lists and writes the result back at
//! the end. Both produce the same output. [`patience_sort_list_by`] sorts a [`LinkedList`]
//! without moving a single element.

use crate::deck::{deal_indices, deal_nodes};
use crate::merge::{ListMerge, SliceMerge, merge_balanced};
use std::cmp::Ordering;
use std::collections::LinkedList;
use std::mem;

/// Sorts a slice in ascending order.
///
/// This sort is stable: equal elements keep their relative order. It is adaptive: an already
/// sorted slice is recognized after `n - 1` comparisons (one deck, nothing to merge).
///
/// # Examples
///
/// ```
/// use patsort::patience_sort;
///
/// let mut data = vec![1, 5, 1, 5, 12, 4, 104, 15, 2, 8];
/// patience_sort(&mut data);
///
/// assert_eq!(data, vec![1, 1, 2, 4, 5, 5, 8, 12, 15, 104]);
/// ```
pub fn patience_sort<T: Ord>(v: &mut [T]) {
    patience_sort_by(v, T::cmp);
}

/// Sorts a slice with a comparator function.
///
/// The comparator must define a total order. If it does not, the slice ends up in an
/// unspecified order, but still holds exactly the elements it started with.
///
/// # Arguments
///
/// * `v` - The slice to sort.
/// * `compare` - Returns how its first argument orders relative to its second.
///
/// # Examples
///
/// ```
/// use patsort::patience_sort_by;
///
/// let mut data = vec![3, 9, 1];
/// patience_sort_by(&mut data, |a, b| b.cmp(a));
///
/// assert_eq!(data, vec![9, 3, 1]);
/// ```
pub fn patience_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    patience_sort_contiguous_by(v, compare);
}

/// Sorts a slice with a key extraction function.
///
/// # Examples
///
/// ```
/// use patsort::patience_sort_by_key;
///
/// let mut data = vec![-5i32, 4, 1, -3, 2];
/// patience_sort_by_key(&mut data, |k| k.abs());
///
/// assert_eq!(data, vec![1, 2, -3, 4, -5]);
/// ```
pub fn patience_sort_by_key<T, K, G>(v: &mut [T], mut key: G)
where
    K: Ord,
    G: FnMut(&T) -> K,
{
    patience_sort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// Sorts a slice, keeping the decks in contiguous storage.
///
/// The decks hold positions into `v`. Once dealt, the elements are permuted so that every deck
/// occupies a contiguous range of `v`, and neighbouring ranges are then merged in place.
/// Apart from the index decks, no memory is allocated and `T` is never cloned.
///
/// The in-place merge rotates instead of copying through a buffer, which costs O(n log n)
/// element moves per pairwise merge. This path therefore does not meet the O(n log k) total
/// bound of patience sort; [`patience_sort_linked_by`] does, at the price of one list node per
/// element.
pub fn patience_sort_contiguous_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;

    let decks = deal_indices(v, &mut is_less);

    let mut order = Vec::with_capacity(v.len());
    let runs: Vec<_> = decks
        .into_iter()
        .map(|deck| {
            let start = order.len();
            order.extend(deck);
            start..order.len()
        })
        .collect();

    apply_permutation(v, order);
    merge_balanced(&mut SliceMerge::new(v, &mut is_less), runs);
}

/// Sorts a slice, routing the decks through linked storage.
///
/// The decks are linked lists of positions into `v`; they are merged by splicing and the final
/// order is written back into `v` with one permutation pass.
pub fn patience_sort_linked_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    let merged = {
        let mut by_index = |a: &usize, b: &usize| compare(&v[*a], &v[*b]) == Ordering::Less;
        let mut source: LinkedList<usize> = (0..v.len()).collect();
        let mut piles = Vec::new();
        deal_nodes(&mut source, &mut piles, &mut by_index);

        let runs: Vec<usize> = (0..piles.len()).collect();
        let mut scratch = LinkedList::new();
        let sorted = merge_balanced(
            &mut ListMerge::new(&mut piles, &mut scratch, &mut by_index),
            runs,
        );
        sorted.map(|slot| mem::take(&mut piles[slot]))
    };

    if let Some(order) = merged {
        apply_permutation(v, order.into_iter().collect());
    }
}

/// Sorts a linked list in ascending order.
///
/// # Examples
///
/// ```
/// use patsort::patience_sort_list;
/// use std::collections::LinkedList;
///
/// let mut list: LinkedList<u8> = [4, 2, 9, 0].into_iter().collect();
/// patience_sort_list(&mut list);
///
/// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 9]);
/// ```
pub fn patience_sort_list<T: Ord>(list: &mut LinkedList<T>) {
    patience_sort_list_by(list, T::cmp);
}

/// Sorts a linked list with a comparator function.
///
/// Nodes are unlinked from `list`, relinked onto decks, and relinked again while merging.
/// Elements stay in the nodes they were allocated in.
///
/// If `compare` panics, `list` keeps every element it had, in an unspecified order.
pub fn patience_sort_list_by<T, F>(list: &mut LinkedList<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return;
    }
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;

    let mut guard = Relink {
        list,
        piles: Vec::new(),
        scratch: LinkedList::new(),
    };
    deal_nodes(&mut *guard.list, &mut guard.piles, &mut is_less);

    let runs: Vec<usize> = (0..guard.piles.len()).collect();
    let sorted = merge_balanced(
        &mut ListMerge::new(&mut guard.piles, &mut guard.scratch, &mut is_less),
        runs,
    );
    if let Some(slot) = sorted {
        guard.list.append(&mut guard.piles[slot]);
    }
}

/// Holds the nodes of a list while they are spread over decks.
///
/// On drop, whatever is still in the decks or the merge scratch list is linked back onto
/// `list`. After a completed sort both are empty and nothing moves.
#[derive(Debug)]
struct Relink<'a, T> {
    list: &'a mut LinkedList<T>,
    piles: Vec<LinkedList<T>>,
    scratch: LinkedList<T>,
}

impl<T> Drop for Relink<'_, T> {
    fn drop(&mut self) {
        self.list.append(&mut self.scratch);
        for pile in &mut self.piles {
            self.list.append(pile);
        }
    }
}

/// Returns the decks the build phase deals `v` onto, without sorting anything.
///
/// Each deck is given as the positions of its elements in `v`, bottom to top. Decks are
/// listed left to right, so their top elements never increase.
///
/// # Examples
///
/// ```
/// use patsort::deal_decks;
///
/// let data = [3, 1, 4, 1, 5];
/// let decks = deal_decks(&data);
///
/// // [3, 4, 5] and [1] and [1]
/// assert_eq!(decks, vec![vec![0, 2, 4], vec![1], vec![3]]);
/// ```
pub fn deal_decks<T: Ord>(v: &[T]) -> Vec<Vec<usize>> {
    deal_decks_by(v, T::cmp)
}

/// Like [`deal_decks`], with a comparator function.
pub fn deal_decks_by<T, F>(v: &[T], mut compare: F) -> Vec<Vec<usize>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    deal_indices(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less)
}

/// Rearranges `data` so that position `i` receives the element previously at `indices[i]`.
///
/// Follows each permutation cycle with swaps, so `T` needs no `Clone` bound.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}

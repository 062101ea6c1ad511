//! Deck merging.
//!
//! The finished decks are reduced to a single sorted run with a balanced pairwise schedule.
//! Two run representations are supported:
//! - **Contiguous**: adjacent index ranges of one slice, merged in place by rotation.
//! - **Linked**: [`LinkedList`]s, merged by splicing nodes.

use std::collections::LinkedList;
use std::ops::Range;

use crate::core::detach_front;

/// Merges two adjacent sorted runs into one.
pub(crate) trait MergeRuns<R> {
    fn merge_pair(&mut self, left: R, right: R) -> R;
}

/// Reduces `runs` to a single run, or `None` if there were no runs at all.
///
/// Every round pairs up runs starting from the right end, so the later (usually shorter)
/// decks are merged first. When the count is odd the leftmost run sits the round out.
pub(crate) fn merge_balanced<R, M>(merger: &mut M, mut runs: Vec<R>) -> Option<R>
where
    M: MergeRuns<R>,
{
    while runs.len() > 1 {
        let mut next = Vec::with_capacity(runs.len().div_ceil(2));
        while let Some(right) = runs.pop() {
            match runs.pop() {
                Some(left) => next.push(merger.merge_pair(left, right)),
                None => next.push(right),
            }
        }
        next.reverse();
        runs = next;
    }
    runs.pop()
}

/// Merges index ranges of a slice in place.
#[derive(Debug)]
pub(crate) struct SliceMerge<'a, T, F> {
    v: &'a mut [T],
    is_less: &'a mut F,
}

impl<'a, T, F> SliceMerge<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub(crate) fn new(v: &'a mut [T], is_less: &'a mut F) -> Self {
        Self { v, is_less }
    }
}

impl<T, F> MergeRuns<Range<usize>> for SliceMerge<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn merge_pair(&mut self, left: Range<usize>, right: Range<usize>) -> Range<usize> {
        debug_assert_eq!(left.end, right.start);
        merge_in_place(&mut self.v[left.start..right.end], left.len(), self.is_less);
        left.start..right.end
    }
}

/// Merges linked runs by relinking their nodes.
///
/// Runs are slots of `piles`. Every node stays reachable from `piles` or `merged` for the
/// whole merge, so a caller that owns both can recover all nodes if `is_less` panics.
#[derive(Debug)]
pub(crate) struct ListMerge<'a, E, F> {
    piles: &'a mut [LinkedList<E>],
    merged: &'a mut LinkedList<E>,
    is_less: &'a mut F,
}

impl<'a, E, F> ListMerge<'a, E, F>
where
    F: FnMut(&E, &E) -> bool,
{
    /// `merged` is scratch space and must be empty.
    pub(crate) fn new(
        piles: &'a mut [LinkedList<E>],
        merged: &'a mut LinkedList<E>,
        is_less: &'a mut F,
    ) -> Self {
        debug_assert!(merged.is_empty());
        Self {
            piles,
            merged,
            is_less,
        }
    }
}

impl<E, F> MergeRuns<usize> for ListMerge<'_, E, F>
where
    F: FnMut(&E, &E) -> bool,
{
    fn merge_pair(&mut self, left: usize, right: usize) -> usize {
        debug_assert!(left < right);
        let (head, tail) = self.piles.split_at_mut(right);
        splice_merge(self.merged, &mut head[left], &mut tail[0], self.is_less);
        std::mem::swap(&mut head[left], self.merged);
        left
    }
}

/// Stable merge of two sorted lists, appended to `merged`.
///
/// Nodes are unlinked from the front of whichever list holds the smaller head and relinked
/// at the back of `merged`. No element is moved or cloned. Ties go to `left`. Both inputs
/// are empty afterwards.
pub(crate) fn splice_merge<E, F>(
    merged: &mut LinkedList<E>,
    left: &mut LinkedList<E>,
    right: &mut LinkedList<E>,
    is_less: &mut F,
) where
    F: FnMut(&E, &E) -> bool,
{
    loop {
        let take_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };
        let source = if take_right { &mut *right } else { &mut *left };
        if let Some(mut node) = detach_front(source) {
            merged.append(&mut node);
        }
    }
    merged.append(left);
    merged.append(right);
}

/// Stable in-place merge of the sorted runs `v[..mid]` and `v[mid..]`.
///
/// Uses the SymMerge rotation scheme (Kim & Kutzner), so no buffer is allocated and
/// `T` needs neither `Clone` nor `Default`. Runs that are already in order cost a single
/// comparison.
///
/// # Examples
///
/// ```
/// use patsort::merge::merge_in_place;
///
/// let mut v = [1, 4, 7, 2, 3, 9];
/// merge_in_place(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
/// assert_eq!(v, [1, 2, 3, 4, 7, 9]);
/// ```
pub fn merge_in_place<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mid == 0 || mid >= v.len() || !is_less(&v[mid], &v[mid - 1]) {
        return;
    }
    sym_merge(v, mid, is_less);
}

fn sym_merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Single element on the left: rotate it to its insertion point.
    if mid == 1 {
        let pos = 1 + v[1..].partition_point(|x| is_less(x, &v[0]));
        v[..pos].rotate_left(1);
        return;
    }

    // Single element on the right.
    if len - mid == 1 {
        let pos = v[..mid].partition_point(|x| !is_less(&v[mid], x));
        v[pos..].rotate_right(1);
        return;
    }

    let half = len / 2;
    let n = half + mid;
    let (mut lo, mut hi) = if mid > half { (n - len, half) } else { (0, mid) };
    let p = n - 1;

    while lo < hi {
        let c = lo + (hi - lo) / 2;
        if !is_less(&v[p - c], &v[c]) {
            lo = c + 1;
        } else {
            hi = c;
        }
    }

    let start = lo;
    let end = n - start;
    if start < mid && mid < end {
        v[start..end].rotate_left(mid - start);
    }
    if 0 < start && start < half {
        sym_merge(&mut v[..half], start, is_less);
    }
    if half < end && end < len {
        sym_merge(&mut v[half..], end - half, is_less);
    }
}

//! Deck building (the "patience" part of patience sort).
//!
//! Elements are dealt one by one onto decks. Each deck is strictly increasing from bottom to
//! top, and the tops of the decks, read left to right, never increase. That ordering is what
//! lets [`locate`] find the target deck with a binary search instead of a linear scan.

use std::collections::LinkedList;

use crate::core::{Pile, detach_front};

/// Finds the leftmost deck whose top compares less than `face`.
///
/// Returns `None` when every top is greater than or equal to `face`, in which case the card
/// has to open a new deck on the right.
pub(crate) fn locate<P, F>(decks: &[P], face: &P::Item, is_less: &mut F) -> Option<usize>
where
    P: Pile,
    F: FnMut(&P::Item, &P::Item) -> bool,
{
    let mut accepts = |deck: &P| deck.top().is_some_and(|top| is_less(top, face));
    let found = search(decks, 0, decks.len(), &mut accepts);
    (found < decks.len()).then_some(found)
}

/// Binary search over `decks[lo..hi]`, returning `hi` when no deck accepts.
///
/// When `decks[mid]` accepts, the answer is in `lo..mid` or is `mid` itself, which is exactly
/// what the left half reports as its "not found".
fn search<P, G>(decks: &[P], lo: usize, hi: usize, accepts: &mut G) -> usize
where
    G: FnMut(&P) -> bool,
{
    match hi - lo {
        0 => hi,
        1 => {
            if accepts(&decks[lo]) {
                lo
            } else {
                hi
            }
        }
        len => {
            let mid = lo + len / 2;
            if accepts(&decks[mid]) {
                search(decks, lo, mid, accepts)
            } else {
                search(decks, mid, hi, accepts)
            }
        }
    }
}

/// The collection of decks built for a single sort call.
#[derive(Debug)]
pub(crate) struct Decks<P> {
    piles: Vec<P>,
}

impl<P: Pile> Decks<P> {
    pub(crate) fn new() -> Self {
        Self { piles: Vec::new() }
    }

    /// Deals every card in order and returns the finished decks.
    pub(crate) fn build<I, F>(cards: I, is_less: &mut F) -> Self
    where
        I: IntoIterator<Item = P::Card>,
        F: FnMut(&P::Item, &P::Item) -> bool,
    {
        let mut decks = Self::new();
        cards.into_iter().for_each(|card| decks.deal(card, is_less));
        decks
    }

    /// Places one card on the leftmost deck it can extend, or opens a new deck.
    pub(crate) fn deal<F>(&mut self, card: P::Card, is_less: &mut F)
    where
        F: FnMut(&P::Item, &P::Item) -> bool,
    {
        let target = match P::face(&card) {
            Some(face) => locate(&self.piles, face, is_less),
            None => return,
        };
        settle(&mut self.piles, target, card);
    }

    pub(crate) fn into_piles(self) -> Vec<P> {
        self.piles
    }
}

/// Deals the positions `0..v.len()` into contiguous decks, comparing the elements they point at.
pub(crate) fn deal_indices<T, F>(v: &[T], is_less: &mut F) -> Vec<Vec<usize>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut by_index = |a: &usize, b: &usize| is_less(&v[*a], &v[*b]);
    Decks::<Vec<usize>>::build(0..v.len(), &mut by_index).into_piles()
}

fn settle<P: Pile>(piles: &mut Vec<P>, target: Option<usize>, card: P::Card) {
    match target {
        Some(index) => piles[index].place(card),
        None => piles.push(P::start(card)),
    }
}

/// Moves the nodes of `source` onto `decks`, relinking them one at a time.
///
/// The target deck is looked up while the node is still the head of `source`, so a node is
/// always linked into `source` or into one of `decks`, even if `is_less` panics.
pub(crate) fn deal_nodes<E, F>(
    source: &mut LinkedList<E>,
    decks: &mut Vec<LinkedList<E>>,
    is_less: &mut F,
) where
    F: FnMut(&E, &E) -> bool,
{
    while let Some(face) = source.front() {
        let target = locate(decks.as_slice(), face, is_less);
        let Some(card) = detach_front(source) else {
            break;
        };
        settle(decks, target, card);
    }
}

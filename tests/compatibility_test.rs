use patsort::PatienceSort;
use patsort::prelude::*;
use std::collections::{LinkedList, VecDeque};
use std::panic::{AssertUnwindSafe, catch_unwind};

// Neither Clone, Copy nor Default: slices must be sorted by swapping alone.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Ticket {
    priority: u8,
    id: Box<str>,
}

fn ticket(priority: u8, id: &str) -> Ticket {
    Ticket {
        priority,
        id: id.into(),
    }
}

#[test]
fn test_non_clone_elements() {
    let mut tickets = vec![
        ticket(3, "c"),
        ticket(1, "a"),
        ticket(2, "b"),
        ticket(1, "0"),
    ];
    patience_sort(&mut tickets);

    let ids: Vec<&str> = tickets.iter().map(|t| &*t.id).collect();
    assert_eq!(ids, vec!["0", "a", "b", "c"]);
}

#[test]
fn test_trait_on_vec_and_slice() {
    let mut data = vec![5, 3, 8, 1];
    data.patience_sort();
    assert_eq!(data, vec![1, 3, 5, 8]);

    let mut array = [9u16, 2, 7];
    array[..].patience_sort_by(|a, b| b.cmp(a));
    assert_eq!(array, [9, 7, 2]);
}

#[test]
fn test_vec_deque_wrapped() {
    // Push to both ends so the ring buffer is split in two.
    let mut deque: VecDeque<i32> = VecDeque::with_capacity(8);
    for i in 0..4 {
        deque.push_back(i * 10);
        deque.push_front(i * 10 + 5);
    }
    deque.patience_sort();

    assert_eq!(
        deque.into_iter().collect::<Vec<_>>(),
        vec![0, 5, 10, 15, 20, 25, 30, 35]
    );
}

#[test]
fn test_linked_list_keeps_nodes() {
    let mut list: LinkedList<Ticket> = [ticket(2, "x"), ticket(0, "y"), ticket(1, "z")]
        .into_iter()
        .collect();

    // Record where every element lives before sorting.
    let before: Vec<*const Ticket> = list.iter().map(|t| t as *const Ticket).collect();
    list.patience_sort();
    let after: Vec<*const Ticket> = list.iter().map(|t| t as *const Ticket).collect();

    assert_eq!(after, vec![before[1], before[2], before[0]]);
    assert_eq!(list.front().map(|t| t.priority), Some(0));
}

#[test]
fn test_linked_list_by_key() {
    let mut list: LinkedList<(&str, u32)> = [("b", 20), ("a", 30), ("c", 10)].into_iter().collect();
    list.patience_sort_by_key(|&(_, n)| n);

    let names: Vec<&str> = list.iter().map(|(s, _)| *s).collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[test]
fn test_empty_collections() {
    let mut list = LinkedList::<u8>::new();
    patience_sort_list(&mut list);
    assert!(list.is_empty());

    let mut deque = VecDeque::<u8>::new();
    deque.patience_sort();
    assert!(deque.is_empty());

    let mut empty: [u8; 0] = [];
    patience_sort(&mut empty);
}

#[test]
fn test_linked_list_survives_panicking_comparator() {
    let mut list: LinkedList<Ticket> = (0..100u8)
        .map(|i| ticket(i.wrapping_mul(37) % 11, &i.to_string()))
        .collect();
    let mut calls = 0;

    let result = catch_unwind(AssertUnwindSafe(|| {
        list.patience_sort_by(|a, b| {
            calls += 1;
            if calls == 150 {
                panic!("comparator gave up");
            }
            a.cmp(b)
        })
    }));

    assert!(result.is_err());
    assert_eq!(list.len(), 100);

    list.patience_sort();
    let mut ids: Vec<String> = list.iter().map(|t| t.id.to_string()).collect();
    ids.sort();
    let mut expected: Vec<String> = (0..100u8).map(|i| i.to_string()).collect();
    expected.sort();
    assert_eq!(ids, expected);
    assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
}

extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use static_assertions::assert_eq_size;

use crate::linked_list::intrusive::{
    double::{self, DoubleLink},
    traits::{Link, LinkWithPrev},
};

assert_eq_size!(DoubleLink, [usize; 2]);

fn ptr(link: &DoubleLink) -> NonNull<DoubleLink> {
    NonNull::from(link)
}

fn ring(head: &DoubleLink) {
    head.make_self_loop();
}

/// Walks the ring from `head`, checking `next`/`prev` are inverse, and
/// returns the positions of the visited links inside `links`.
fn order(head: &DoubleLink, links: &[DoubleLink]) -> Vec<usize> {
    let head_ptr = ptr(head);
    let mut out = vec![];
    let mut current = head.next().unwrap();
    let mut prev = head_ptr;
    while current != head_ptr {
        let link = unsafe { current.as_ref() };
        assert_eq!(link.prev(), Some(prev), "prev is not the inverse of next");
        let index = links
            .iter()
            .position(|l| ptr(l) == current)
            .expect("ring reaches a foreign link");
        out.push(index);
        prev = current;
        current = link.next().unwrap();
    }
    assert_eq!(head.prev(), Some(prev));
    out
}

fn filled(head: &DoubleLink, links: &[DoubleLink]) {
    ring(head);
    for link in links {
        unsafe { double::insert_before(ptr(link), ptr(head)) };
    }
}

#[test]
fn test_detached_by_default() {
    let link = DoubleLink::new();
    assert!(!link.is_linked());
    assert!(link.next().is_none());
    assert!(link.prev().is_none());
    assert!(!DoubleLink::default().is_linked());
}

#[test]
fn test_self_loop_is_empty_ring() {
    let head = DoubleLink::new();
    ring(&head);
    assert!(head.is_linked());
    assert_eq!(head.next(), Some(ptr(&head)));
    assert_eq!(head.prev(), Some(ptr(&head)));
    assert!(order(&head, &[]).is_empty());
}

#[test]
fn test_insert_after_and_before() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 3] = Default::default();
    ring(&head);

    unsafe {
        double::insert_after(ptr(&links[0]), ptr(&head));
        double::insert_after(ptr(&links[1]), ptr(&head));
        double::insert_before(ptr(&links[2]), ptr(&head));
    }
    assert_eq!(order(&head, &links), vec![1, 0, 2]);
}

#[test]
fn test_unlink_detaches() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 3] = Default::default();
    filled(&head, &links);

    unsafe { double::unlink(ptr(&links[1])) };
    assert!(!links[1].is_linked());
    assert_eq!(order(&head, &links), vec![0, 2]);

    unsafe {
        double::unlink(ptr(&links[0]));
        double::unlink(ptr(&links[2]));
    }
    assert_eq!(head.next(), Some(ptr(&head)));
    assert!(links.iter().all(|l| !l.is_linked()));
}

#[test]
fn test_move_after_and_before() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 4] = Default::default();
    filled(&head, &links);

    unsafe { double::move_after(ptr(&links[2]), ptr(&head)) };
    assert_eq!(order(&head, &links), vec![2, 0, 1, 3]);

    unsafe { double::move_before(ptr(&links[2]), ptr(&head)) };
    assert_eq!(order(&head, &links), vec![0, 1, 3, 2]);

    // Moving an element next to itself keeps the ring intact.
    unsafe { double::move_after(ptr(&links[0]), ptr(&head)) };
    assert_eq!(order(&head, &links), vec![0, 1, 3, 2]);
}

#[test]
fn test_move_between_rings() {
    let a = DoubleLink::new();
    let b = DoubleLink::new();
    let links: [DoubleLink; 3] = Default::default();
    filled(&a, &links);
    ring(&b);

    unsafe { double::move_before(ptr(&links[1]), ptr(&b)) };
    assert_eq!(order(&a, &links), vec![0, 2]);
    assert_eq!(order(&b, &links), vec![1]);
}

#[test]
fn test_replace() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 4] = Default::default();
    filled(&head, &links[..3]);

    unsafe { double::replace(ptr(&links[1]), ptr(&links[3])) };
    assert!(!links[1].is_linked());
    assert_eq!(order(&head, &links), vec![0, 3, 2]);
}

#[test]
fn test_swap_distant_and_adjacent() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 4] = Default::default();
    filled(&head, &links);

    unsafe { double::swap(ptr(&links[0]), ptr(&links[3])) };
    assert_eq!(order(&head, &links), vec![3, 1, 2, 0]);

    unsafe { double::swap(ptr(&links[1]), ptr(&links[2])) };
    assert_eq!(order(&head, &links), vec![3, 2, 1, 0]);

    unsafe { double::swap(ptr(&links[1]), ptr(&links[2])) };
    assert_eq!(order(&head, &links), vec![3, 1, 2, 0]);

    unsafe { double::swap(ptr(&links[1]), ptr(&links[1])) };
    assert_eq!(order(&head, &links), vec![3, 1, 2, 0]);
}

#[test]
fn test_swap_across_rings() {
    let a = DoubleLink::new();
    let b = DoubleLink::new();
    let links: [DoubleLink; 4] = Default::default();
    filled(&a, &links[..2]);
    filled(&b, &links[2..]);

    unsafe { double::swap(ptr(&links[0]), ptr(&links[3])) };
    assert_eq!(order(&a, &links), vec![3, 1]);
    assert_eq!(order(&b, &links), vec![2, 0]);
}

#[test]
fn test_splice_between() {
    let a = DoubleLink::new();
    let b = DoubleLink::new();
    let links: [DoubleLink; 5] = Default::default();
    filled(&a, &links[..2]);
    filled(&b, &links[2..]);

    // Into the middle of `a`.
    unsafe { double::splice_between(ptr(&b), ptr(&links[0]), ptr(&links[1])) };
    assert_eq!(order(&a, &links), vec![0, 2, 3, 4, 1]);
    assert!(order(&b, &links).is_empty());

    // An empty source changes nothing.
    unsafe { double::splice_between(ptr(&b), ptr(&a), ptr(&links[0])) };
    assert_eq!(order(&a, &links), vec![0, 2, 3, 4, 1]);
}

#[test]
fn test_bulk_move_before() {
    let a = DoubleLink::new();
    let b = DoubleLink::new();
    let links: [DoubleLink; 6] = Default::default();
    filled(&a, &links[..4]);
    filled(&b, &links[4..]);

    unsafe { double::bulk_move_before(ptr(&b), ptr(&links[1]), ptr(&links[2])) };
    assert_eq!(order(&a, &links), vec![0, 3]);
    assert_eq!(order(&b, &links), vec![4, 5, 1, 2]);

    // Within one ring: the front run goes to the back.
    unsafe { double::bulk_move_before(ptr(&b), ptr(&links[4]), ptr(&links[5])) };
    assert_eq!(order(&b, &links), vec![1, 2, 4, 5]);
}

#[test]
fn test_cut_position() {
    let head = DoubleLink::new();
    let dest = DoubleLink::new();
    let links: [DoubleLink; 5] = Default::default();
    filled(&head, &links);

    unsafe { double::cut_position(ptr(&dest), ptr(&head), ptr(&links[2])) };
    assert_eq!(order(&dest, &links), vec![0, 1, 2]);
    assert_eq!(order(&head, &links), vec![3, 4]);

    // Cutting at the last element takes everything.
    let rest = DoubleLink::new();
    unsafe { double::cut_position(ptr(&rest), ptr(&head), ptr(&links[4])) };
    assert_eq!(order(&rest, &links), vec![3, 4]);
    assert!(order(&head, &links).is_empty());

    // Cutting at the head takes nothing.
    let none = DoubleLink::new();
    unsafe { double::cut_position(ptr(&none), ptr(&rest), ptr(&rest)) };
    assert!(order(&none, &links).is_empty());
    assert_eq!(order(&rest, &links), vec![3, 4]);
}

#[test]
fn test_cut_before() {
    let head = DoubleLink::new();
    let dest = DoubleLink::new();
    let links: [DoubleLink; 5] = Default::default();
    filled(&head, &links);

    unsafe { double::cut_before(ptr(&dest), ptr(&head), ptr(&links[2])) };
    assert_eq!(order(&dest, &links), vec![0, 1]);
    assert_eq!(order(&head, &links), vec![2, 3, 4]);

    // Cutting before the first element takes nothing.
    let none = DoubleLink::new();
    unsafe { double::cut_before(ptr(&none), ptr(&head), ptr(&links[2])) };
    assert!(order(&none, &links).is_empty());
    assert_eq!(order(&head, &links), vec![2, 3, 4]);

    // Cutting before the head takes everything.
    let all = DoubleLink::new();
    unsafe { double::cut_before(ptr(&all), ptr(&head), ptr(&head)) };
    assert_eq!(order(&all, &links), vec![2, 3, 4]);
    assert!(order(&head, &links).is_empty());
}

#[test]
fn test_force_unlink_leaves_neighbors() {
    let head = DoubleLink::new();
    let links: [DoubleLink; 2] = Default::default();
    filled(&head, &links);

    unsafe { links[0].force_unlink() };
    assert!(!links[0].is_linked());
    // The head still points at the forgotten link.
    assert_eq!(head.next(), Some(ptr(&links[0])));
}

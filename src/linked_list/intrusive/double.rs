use core::cell::Cell;
use core::ptr::NonNull;

use super::traits::{Link, LinkWithPrev};

/// A link in a circular doubly linked list.
///
/// A detached link has no neighbors. A linked one always has both, since the
/// ring is closed by the list's sentinel, which is itself a `DoubleLink`.
#[derive(Debug, Default)]
pub struct DoubleLink {
    next: Cell<Option<NonNull<Self>>>,
    prev: Cell<Option<NonNull<Self>>>,
}

impl DoubleLink {
    /// Creates a detached link.
    pub const fn new() -> Self {
        DoubleLink {
            next: Cell::new(None),
            prev: Cell::new(None),
        }
    }

    /// Turns this link into an empty ring: both neighbors are itself.
    pub(crate) fn make_self_loop(&self) {
        let me = Some(NonNull::from(self));
        self.next.set(me);
        self.prev.set(me);
    }

    /// Next link on the ring.
    ///
    /// # Safety
    ///
    /// The link must be part of a ring.
    #[inline]
    pub(crate) unsafe fn succ(&self) -> NonNull<Self> {
        debug_assert!(self.is_linked(), "walking a detached link");
        unsafe { self.next.get().unwrap_unchecked() }
    }

    /// Previous link on the ring.
    ///
    /// # Safety
    ///
    /// The link must be part of a ring.
    #[inline]
    pub(crate) unsafe fn pred(&self) -> NonNull<Self> {
        debug_assert!(self.is_linked(), "walking a detached link");
        unsafe { self.prev.get().unwrap_unchecked() }
    }
}

impl Link for DoubleLink {
    #[inline]
    fn is_linked(&self) -> bool {
        self.next.get().is_some()
    }

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next.get()
    }

    #[inline]
    unsafe fn set_next(&self, next: Option<NonNull<Self>>) {
        self.next.set(next);
    }

    #[inline]
    unsafe fn force_unlink(&self) {
        self.next.set(None);
        self.prev.set(None);
    }
}

impl LinkWithPrev for DoubleLink {
    #[inline]
    fn prev(&self) -> Option<NonNull<Self>> {
        self.prev.get()
    }

    #[inline]
    unsafe fn set_prev(&self, prev: Option<NonNull<Self>>) {
        self.prev.set(prev);
    }
}

// Writes go through `unsafe` code, whose callers guarantee exclusive access.
unsafe impl Send for DoubleLink {}
unsafe impl Sync for DoubleLink {}

// Ring algebra.
//
// Every function below takes raw link pointers and rewrites a bounded number of
// neighbor pointers. The caller guarantees that every pointer refers to a live
// link and that the links named as neighbors are adjacent on the same ring.
// A sentinel is an ordinary link here.

#[inline]
unsafe fn r<'a>(link: NonNull<DoubleLink>) -> &'a DoubleLink {
    unsafe { link.as_ref() }
}

#[inline]
unsafe fn join(prev: NonNull<DoubleLink>, next: NonNull<DoubleLink>) {
    unsafe {
        r(prev).set_next(Some(next));
        r(next).set_prev(Some(prev));
    }
}

/// Links `new` between the adjacent links `prev` and `next`.
#[inline]
pub(crate) unsafe fn insert_between(
    new: NonNull<DoubleLink>,
    prev: NonNull<DoubleLink>,
    next: NonNull<DoubleLink>,
) {
    unsafe {
        join(new, next);
        join(prev, new);
    }
}

/// Links `new` right after `head`.
#[inline]
pub(crate) unsafe fn insert_after(new: NonNull<DoubleLink>, head: NonNull<DoubleLink>) {
    unsafe { insert_between(new, head, r(head).succ()) }
}

/// Links `new` right before `head`.
#[inline]
pub(crate) unsafe fn insert_before(new: NonNull<DoubleLink>, head: NonNull<DoubleLink>) {
    unsafe { insert_between(new, r(head).pred(), head) }
}

/// Takes `entry` out of its ring and leaves it detached.
#[inline]
pub(crate) unsafe fn unlink(entry: NonNull<DoubleLink>) {
    unsafe {
        let link = r(entry);
        join(link.pred(), link.succ());
        link.force_unlink();
    }
}

/// Takes `entry` out of its ring and links it right after `head`.
#[inline]
pub(crate) unsafe fn move_after(entry: NonNull<DoubleLink>, head: NonNull<DoubleLink>) {
    unsafe {
        let link = r(entry);
        join(link.pred(), link.succ());
        insert_after(entry, head);
    }
}

/// Takes `entry` out of its ring and links it right before `head`.
#[inline]
pub(crate) unsafe fn move_before(entry: NonNull<DoubleLink>, head: NonNull<DoubleLink>) {
    unsafe {
        let link = r(entry);
        join(link.pred(), link.succ());
        insert_before(entry, head);
    }
}

/// Puts the detached `new` in the place of `old`, which becomes detached.
#[inline]
pub(crate) unsafe fn replace(old: NonNull<DoubleLink>, new: NonNull<DoubleLink>) {
    unsafe {
        let link = r(old);
        let (prev, next) = (link.pred(), link.succ());
        link.force_unlink();
        if prev == old {
            // `old` was alone on its ring, which can only be a bare sentinel.
            r(new).make_self_loop();
        } else {
            insert_between(new, prev, next);
        }
    }
}

/// Exchanges the positions of two linked entries, on one ring or two.
pub(crate) unsafe fn swap(a: NonNull<DoubleLink>, b: NonNull<DoubleLink>) {
    if a == b {
        return;
    }
    unsafe {
        let mut pos = r(b).pred();
        let b_next = r(b).succ();
        join(pos, b_next);
        r(b).force_unlink();
        replace(a, b);
        if pos == a {
            pos = b;
        }
        insert_after(a, pos);
    }
}

/// Moves every entry of the ring closed by `source` between `prev` and `next`,
/// leaving `source` as an empty ring.
pub(crate) unsafe fn splice_between(
    source: NonNull<DoubleLink>,
    prev: NonNull<DoubleLink>,
    next: NonNull<DoubleLink>,
) {
    unsafe {
        let first = r(source).succ();
        if first == source {
            return;
        }
        let last = r(source).pred();
        join(prev, first);
        join(last, next);
        r(source).make_self_loop();
    }
}

/// Moves the contiguous run `first..=last` before `head`.
///
/// `head` must not be inside the run.
pub(crate) unsafe fn bulk_move_before(
    head: NonNull<DoubleLink>,
    first: NonNull<DoubleLink>,
    last: NonNull<DoubleLink>,
) {
    unsafe {
        join(r(first).pred(), r(last).succ());
        join(r(head).pred(), first);
        join(last, head);
    }
}

/// Moves the entries of `head` from the front up to and including `entry`
/// into the empty ring `dest`.
pub(crate) unsafe fn cut_position(
    dest: NonNull<DoubleLink>,
    head: NonNull<DoubleLink>,
    entry: NonNull<DoubleLink>,
) {
    unsafe {
        dest.as_ref().make_self_loop();
        if entry == head || r(head).succ() == head {
            return;
        }
        let first = r(head).succ();
        let rest = r(entry).succ();
        join(dest, first);
        join(entry, dest);
        join(head, rest);
    }
}

/// Moves the entries of `head` from the front up to but excluding `entry`
/// into the empty ring `dest`.
pub(crate) unsafe fn cut_before(
    dest: NonNull<DoubleLink>,
    head: NonNull<DoubleLink>,
    entry: NonNull<DoubleLink>,
) {
    unsafe {
        dest.as_ref().make_self_loop();
        let first = r(head).succ();
        if first == entry {
            return;
        }
        let last = r(entry).pred();
        join(dest, first);
        join(last, dest);
        join(head, entry);
    }
}

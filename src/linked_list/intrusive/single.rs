use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;

use super::traits::Link;

/// Stored in `next` while the link is not in a list.
///
/// The terminal element of a list stores `None`, so detached needs its own
/// value. A dangling pointer never addresses a real link.
const UNLINKED: Option<NonNull<SingleLink>> = Some(NonNull::dangling());

/// A link in a singly linked list.
pub struct SingleLink {
    next: Cell<Option<NonNull<Self>>>,
}

impl SingleLink {
    /// Creates a detached link.
    pub const fn new() -> Self {
        SingleLink {
            next: Cell::new(UNLINKED),
        }
    }
}

impl Default for SingleLink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SingleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_linked() {
            f.debug_struct("SingleLink")
                .field("next", &self.next.get())
                .finish()
        } else {
            f.write_str("SingleLink(unlinked)")
        }
    }
}

impl Link for SingleLink {
    #[inline]
    fn is_linked(&self) -> bool {
        self.next.get() != UNLINKED
    }

    /// Returns `None` both for the last element and for a detached link.
    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        let next = self.next.get();
        if next == UNLINKED { None } else { next }
    }

    #[inline]
    unsafe fn set_next(&self, next: Option<NonNull<Self>>) {
        self.next.set(next);
    }

    #[inline]
    unsafe fn force_unlink(&self) {
        self.next.set(UNLINKED);
    }
}

// Writes go through `unsafe` code, whose callers guarantee exclusive access.
unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}

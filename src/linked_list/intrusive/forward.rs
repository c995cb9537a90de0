use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    error::LinkError,
    iter::SIter,
    offset::{ensure_detached, link_of, owner_of},
    single::SingleLink,
    traits::{Link, LinkField},
};

/// A singly linked list threaded through the link selected by `F`.
///
/// The handle stores the head pointer and an element count; the last element
/// links to `None`. No element points back at the handle, so unlike
/// [`List`](super::list::List) it can be moved freely.
///
/// Operations taking an element pointer are `unsafe`: the element must stay
/// alive and in place while linked, and must not be in another list through
/// the same field.
pub struct SList<F>
where
    F: LinkField<Link = SingleLink>,
{
    head: Option<NonNull<SingleLink>>,
    count: usize,
    _marker: PhantomData<(F, *const F::Owner)>,
}

impl<F> SList<F>
where
    F: LinkField<Link = SingleLink>,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        SList {
            head: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn head_link(&self) -> Option<NonNull<SingleLink>> {
        self.head
    }

    /// Check if the linked list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Check if the linked list holds exactly one element
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.count == 1
    }

    /// Get the number of elements in the linked list
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Get the first element
    #[inline]
    pub fn front(&self) -> Option<NonNull<F::Owner>> {
        self.head.map(|head| unsafe { owner_of::<F>(head) })
    }

    /// Get an iterator over the linked list
    pub fn iter(&self) -> SIter<'_, F> {
        SIter::new(self)
    }

    /// Push an element to the front of the linked list
    ///
    /// # Safety
    ///
    /// `elem` must stay alive and in place while linked, and must be detached.
    pub unsafe fn push_front(&mut self, elem: NonNull<F::Owner>) {
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            link.as_ref().set_next(self.head);
            self.head = Some(link);
        }
        self.count += 1;
    }

    /// Push an element to the front, refusing one that is already linked.
    ///
    /// # Safety
    ///
    /// `elem` must stay alive and in place while linked.
    pub unsafe fn try_push_front(&mut self, elem: NonNull<F::Owner>) -> Result<(), LinkError> {
        unsafe {
            ensure_detached::<F>(elem)?;
            self.push_front(elem);
        }
        Ok(())
    }

    /// Pop the first element; it comes back detached
    pub fn pop_front(&mut self) -> Option<NonNull<F::Owner>> {
        let head = self.head?;
        unsafe { self.unlink_after(None, head) };
        Some(unsafe { owner_of::<F>(head) })
    }

    /// Link `elem` right after `after`.
    ///
    /// # Safety
    ///
    /// `after` must be in this list; `elem` must stay alive and in place while
    /// linked, and must be detached.
    pub unsafe fn insert_after(&mut self, after: NonNull<F::Owner>, elem: NonNull<F::Owner>) {
        unsafe {
            let parent = link_of::<F>(after).as_ref();
            let link = link_of::<F>(elem);
            debug_assert!(parent.is_linked(), "inserting after a detached element");
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            link.as_ref().set_next(parent.next());
            parent.set_next(Some(link));
        }
        self.count += 1;
    }

    /// Remove the element following `after`, without searching for it.
    ///
    /// Returns `None` if `after` is the last element.
    ///
    /// # Safety
    ///
    /// `after` must be in this list.
    pub unsafe fn remove_after(&mut self, after: NonNull<F::Owner>) -> Option<NonNull<F::Owner>> {
        unsafe {
            let parent = link_of::<F>(after);
            debug_assert!(
                parent.as_ref().is_linked(),
                "removing after a detached element"
            );
            let target = parent.as_ref().next()?;
            self.unlink_after(Some(parent), target);
            Some(owner_of::<F>(target))
        }
    }

    /// Remove the first element equal to `value`, scanning from the front.
    ///
    /// Returns how many elements were removed: 0 or 1. With duplicates, the
    /// one closest to the front goes.
    pub fn remove(&mut self, value: &F::Owner) -> usize
    where
        F::Owner: PartialEq,
    {
        let mut removed = 0;
        self.retain_while(|owner| {
            if owner == value {
                removed = 1;
                Step::RemoveLast
            } else {
                Step::Keep
            }
        });
        removed
    }

    /// Remove every element matching `pred` in one pass.
    ///
    /// Returns how many elements were removed.
    pub fn remove_if<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&F::Owner) -> bool,
    {
        let mut removed = 0;
        self.retain_while(|owner| {
            if pred(owner) {
                removed += 1;
                Step::Remove
            } else {
                Step::Keep
            }
        });
        removed
    }

    /// Remove `elem` from the list by identity.
    ///
    /// Returns `false` if it is not in this list. `elem` is only compared,
    /// never dereferenced.
    pub fn remove_node(&mut self, elem: NonNull<F::Owner>) -> bool {
        let mut found = false;
        self.retain_while(|owner| {
            if core::ptr::eq(owner, elem.as_ptr()) {
                found = true;
                Step::RemoveLast
            } else {
                Step::Keep
            }
        });
        found
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut reversed: Option<NonNull<SingleLink>> = None;
        let mut current = self.head;
        while let Some(link) = current {
            unsafe {
                let link_ref = link.as_ref();
                current = link_ref.next();
                link_ref.set_next(reversed);
            }
            reversed = Some(link);
        }
        self.head = reversed;
    }

    /// Detach every element, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let detached = self.count;
        let mut current = self.head.take();
        while let Some(link) = current {
            unsafe {
                let link_ref = link.as_ref();
                current = link_ref.next();
                link_ref.force_unlink();
            }
        }
        self.count = 0;
        detached
    }

    /// Walk the list, unlinking the elements `step` asks for.
    fn retain_while<S>(&mut self, mut step: S)
    where
        S: FnMut(&F::Owner) -> Step,
    {
        let mut prev: Option<NonNull<SingleLink>> = None;
        let mut current = self.head;
        while let Some(link) = current {
            // Read the successor first; unlinking resets it.
            current = unsafe { link.as_ref().next() };
            let owner = unsafe { owner_of::<F>(link).as_ref() };
            match step(owner) {
                Step::Keep => prev = Some(link),
                Step::Remove => unsafe { self.unlink_after(prev, link) },
                Step::RemoveLast => {
                    unsafe { self.unlink_after(prev, link) };
                    return;
                }
            }
        }
    }

    /// Unlink `link`, whose predecessor is `prev` (`None` for the head).
    unsafe fn unlink_after(
        &mut self,
        prev: Option<NonNull<SingleLink>>,
        link: NonNull<SingleLink>,
    ) {
        unsafe {
            let next = link.as_ref().next();
            match prev {
                Some(prev) => prev.as_ref().set_next(next),
                None => self.head = next,
            }
            link.as_ref().force_unlink();
        }
        self.count -= 1;
    }
}

enum Step {
    Keep,
    Remove,
    RemoveLast,
}

impl<F> Default for SList<F>
where
    F: LinkField<Link = SingleLink>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Drop for SList<F>
where
    F: LinkField<Link = SingleLink>,
{
    fn drop(&mut self) {
        let detached = self.clear();
        if detached > 0 {
            debug_event!(detached, "dropped a non-empty list");
        }
    }
}

impl<'a, F> IntoIterator for &'a SList<F>
where
    F: LinkField<Link = SingleLink>,
{
    type Item = NonNull<F::Owner>;
    type IntoIter = SIter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Safe methods hand out `&F::Owner`, and moving the handle moves that access
// to another thread.
unsafe impl<F> Send for SList<F>
where
    F: LinkField<Link = SingleLink>,
    F::Owner: Send + Sync,
{
}

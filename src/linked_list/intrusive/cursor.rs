use core::pin::Pin;
use core::ptr::NonNull;

use super::{
    double::{self, DoubleLink},
    list::List,
    offset::{link_of, owner_of},
    traits::{Link, LinkField},
};

/// A cursor over a [`List`] that can edit the list around its position.
///
/// Besides the elements, the cursor can rest on a "ghost" position between
/// the back and the front, where [`CursorMut::current`] is `None`. Moving
/// past either end lands there, and moving again wraps around.
pub struct CursorMut<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    current: NonNull<DoubleLink>,
    head: NonNull<DoubleLink>,
    _list: Pin<&'a mut List<F>>,
}

impl<'a, F> CursorMut<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    pub(crate) fn new(
        list: Pin<&'a mut List<F>>,
        head: NonNull<DoubleLink>,
        current: NonNull<DoubleLink>,
    ) -> Self {
        CursorMut {
            current,
            head,
            _list: list,
        }
    }

    fn owner(&self, link: NonNull<DoubleLink>) -> Option<NonNull<F::Owner>> {
        (link != self.head).then(|| unsafe { owner_of::<F>(link) })
    }

    /// Check if the cursor is on the ghost position
    pub fn is_ghost(&self) -> bool {
        self.current == self.head
    }

    /// Get the element under the cursor
    pub fn current(&self) -> Option<NonNull<F::Owner>> {
        self.owner(self.current)
    }

    /// Get the element after the cursor
    pub fn peek_next(&self) -> Option<NonNull<F::Owner>> {
        self.owner(unsafe { self.current.as_ref().succ() })
    }

    /// Get the element before the cursor
    pub fn peek_prev(&self) -> Option<NonNull<F::Owner>> {
        self.owner(unsafe { self.current.as_ref().pred() })
    }

    /// Move to the next element
    pub fn move_next(&mut self) {
        self.current = unsafe { self.current.as_ref().succ() };
    }

    /// Move to the previous element
    pub fn move_prev(&mut self) {
        self.current = unsafe { self.current.as_ref().pred() };
    }

    /// Remove the element under the cursor and move to the one after it.
    ///
    /// This is how elements are erased during a traversal: the cursor stays
    /// valid and the walk continues with the following element. Returns the
    /// detached element, or `None` on the ghost position.
    pub fn remove_current(&mut self) -> Option<NonNull<F::Owner>> {
        let removed = self.current();
        if removed.is_some() {
            unsafe {
                let link = self.current;
                self.current = link.as_ref().succ();
                double::unlink(link);
            }
        }
        removed
    }

    /// Insert an element before the cursor.
    ///
    /// On the ghost position this pushes to the back.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract of [`List`] and be detached.
    pub unsafe fn insert_before(&mut self, elem: NonNull<F::Owner>) {
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::insert_before(link, self.current);
        }
    }

    /// Insert an element after the cursor.
    ///
    /// On the ghost position this pushes to the front.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract of [`List`] and be detached.
    pub unsafe fn insert_after(&mut self, elem: NonNull<F::Owner>) {
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::insert_after(link, self.current);
        }
    }

    /// Put `elem` in place of the element under the cursor, which is returned
    /// detached. On the ghost position nothing happens and `None` is returned.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract of [`List`] and be detached.
    pub unsafe fn replace_current(&mut self, elem: NonNull<F::Owner>) -> Option<NonNull<F::Owner>> {
        let old = self.current()?;
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::replace(self.current, link);
            self.current = link;
        }
        Some(old)
    }
}

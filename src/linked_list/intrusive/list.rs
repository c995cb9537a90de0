use core::marker::{PhantomData, PhantomPinned};
use core::pin::Pin;
use core::ptr::NonNull;

use super::{
    cursor::CursorMut,
    double::{self, DoubleLink},
    error::LinkError,
    iter::Iter,
    offset::{ensure_detached, link_of, owner_of},
    traits::{Link, LinkField, LinkWithPrev},
};

/// A circular doubly linked list threaded through the link selected by `F`.
///
/// The list owns a sentinel link that closes the ring: an empty list is a
/// sentinel whose neighbors are itself. Elements are never owned, copied or
/// allocated; the list only rewires links.
///
/// The sentinel must not move while elements point at it, so the list is
/// `!Unpin` and every mutating operation takes `Pin<&mut Self>`. Pin it with
/// [`core::pin::pin!`] or `Box::pin`.
///
/// # Element contract
///
/// Operations taking an element pointer are `unsafe`. The caller promises that
/// every element stays alive and in place for as long as it is linked, and
/// that it is not linked into another list through the same field unless the
/// operation says so.
pub struct List<F>
where
    F: LinkField<Link = DoubleLink>,
{
    sentinel: DoubleLink,
    _pin: PhantomPinned,
    _marker: PhantomData<(F, *const F::Owner)>,
}

impl<F> List<F>
where
    F: LinkField<Link = DoubleLink>,
{
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List {
            sentinel: DoubleLink::new(),
            _pin: PhantomPinned,
            _marker: PhantomData,
        }
    }

    /// Returns the sentinel, turning it into a self-loop on first use.
    pub(crate) fn head(self: Pin<&mut Self>) -> NonNull<DoubleLink> {
        // Links are `Cell`s, so a shared reference is enough to rewire them.
        let this = self.into_ref().get_ref();
        if !this.sentinel.is_linked() {
            this.sentinel.make_self_loop();
        }
        NonNull::from(&this.sentinel)
    }

    fn sentinel_ptr(&self) -> NonNull<DoubleLink> {
        NonNull::from(&self.sentinel)
    }

    /// Pointer to the first link, or `None` if the list is empty.
    pub(crate) fn first_link(&self) -> Option<NonNull<DoubleLink>> {
        self.sentinel
            .next()
            .filter(|&next| next != self.sentinel_ptr())
    }

    /// Pointer to the last link, or `None` if the list is empty.
    pub(crate) fn last_link(&self) -> Option<NonNull<DoubleLink>> {
        self.sentinel
            .prev()
            .filter(|&prev| prev != self.sentinel_ptr())
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first_link().is_none()
    }

    /// Check if the list holds exactly one element
    #[inline]
    pub fn is_singular(&self) -> bool {
        match (self.first_link(), self.last_link()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Get the number of elements in the list.
    ///
    /// This walks the whole ring.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Get the first element
    #[inline]
    pub fn front(&self) -> Option<NonNull<F::Owner>> {
        self.first_link().map(|link| unsafe { owner_of::<F>(link) })
    }

    /// Get the last element
    #[inline]
    pub fn back(&self) -> Option<NonNull<F::Owner>> {
        self.last_link().map(|link| unsafe { owner_of::<F>(link) })
    }

    /// Get the first element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The list must not be empty.
    #[inline]
    pub unsafe fn front_unchecked(&self) -> NonNull<F::Owner> {
        debug_assert!(!self.is_empty(), "front of an empty list");
        unsafe { owner_of::<F>(self.sentinel.succ()) }
    }

    /// Get the last element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The list must not be empty.
    #[inline]
    pub unsafe fn back_unchecked(&self) -> NonNull<F::Owner> {
        debug_assert!(!self.is_empty(), "back of an empty list");
        unsafe { owner_of::<F>(self.sentinel.pred()) }
    }

    /// Get an iterator over the list, front to back.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter::new(self)
    }

    /// Push an element to the front of the list
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract and must not be linked.
    pub unsafe fn push_front(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        let head = self.head();
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::insert_after(link, head);
        }
    }

    /// Push an element to the back of the list
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract and must not be linked.
    pub unsafe fn push_back(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        let head = self.head();
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(
                !link.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::insert_before(link, head);
        }
    }

    /// Push an element to the front, refusing one that is already linked.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract.
    pub unsafe fn try_push_front(
        self: Pin<&mut Self>,
        elem: NonNull<F::Owner>,
    ) -> Result<(), LinkError> {
        unsafe {
            ensure_detached::<F>(elem)?;
            self.push_front(elem);
        }
        Ok(())
    }

    /// Push an element to the back, refusing one that is already linked.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract.
    pub unsafe fn try_push_back(
        self: Pin<&mut Self>,
        elem: NonNull<F::Owner>,
    ) -> Result<(), LinkError> {
        unsafe {
            ensure_detached::<F>(elem)?;
            self.push_back(elem);
        }
        Ok(())
    }

    /// Pop the first element; it comes back detached
    pub fn pop_front(self: Pin<&mut Self>) -> Option<NonNull<F::Owner>> {
        let first = self.first_link()?;
        unsafe {
            double::unlink(first);
            Some(owner_of::<F>(first))
        }
    }

    /// Pop the last element; it comes back detached
    pub fn pop_back(self: Pin<&mut Self>) -> Option<NonNull<F::Owner>> {
        let last = self.last_link()?;
        unsafe {
            double::unlink(last);
            Some(owner_of::<F>(last))
        }
    }

    /// Remove an element known to be in this list.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract and be linked into this list.
    pub unsafe fn remove(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(link.as_ref().is_linked(), "removing a detached element");
            double::unlink(link);
        }
    }

    /// Remove an element if it is linked, returning whether it was.
    ///
    /// A detached element is left alone, so this is safe to call on an element
    /// whose membership is unknown.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract. If it is linked through `F`,
    /// it must be linked into this list.
    pub unsafe fn remove_if_exists(self: Pin<&mut Self>, elem: NonNull<F::Owner>) -> bool {
        unsafe {
            let link = link_of::<F>(elem);
            if !link.as_ref().is_linked() {
                return false;
            }
            double::unlink(link);
        }
        true
    }

    /// Remove an element, reporting [`LinkError::NotLinked`] for a detached one.
    ///
    /// # Safety
    ///
    /// Same as [`List::remove_if_exists`].
    pub unsafe fn try_remove(
        self: Pin<&mut Self>,
        elem: NonNull<F::Owner>,
    ) -> Result<(), LinkError> {
        if unsafe { self.remove_if_exists(elem) } {
            Ok(())
        } else {
            debug_event!(error = %LinkError::NotLinked, "rejected remove");
            Err(LinkError::NotLinked)
        }
    }

    /// Move the front element to the back. Does nothing on an empty list.
    pub fn rotate_left(self: Pin<&mut Self>) {
        if let Some(first) = self.first_link() {
            let head = self.head();
            unsafe { double::move_before(first, head) };
        }
    }

    /// Move the back element to the front. Does nothing on an empty list.
    pub fn rotate_right(self: Pin<&mut Self>) {
        if let Some(last) = self.last_link() {
            let head = self.head();
            unsafe { double::move_after(last, head) };
        }
    }

    /// Rotate the list so that `elem` becomes the front.
    ///
    /// # Safety
    ///
    /// `elem` must be linked into this list.
    pub unsafe fn rotate_to_front(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        let head = self.head();
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(link.as_ref().is_linked(), "rotating to a detached element");
            // The sentinel moves, the elements keep their relative order.
            double::move_before(head, link);
        }
    }

    /// Move an element to the front of this list.
    ///
    /// The element may currently sit anywhere in this list or in any other
    /// list using the same field.
    ///
    /// # Safety
    ///
    /// `elem` must satisfy the element contract and be linked.
    pub unsafe fn move_to_front(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        let head = self.head();
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(link.as_ref().is_linked(), "moving a detached element");
            double::move_after(link, head);
        }
    }

    /// Move an element to the back of this list.
    ///
    /// # Safety
    ///
    /// Same as [`List::move_to_front`].
    pub unsafe fn move_to_back(self: Pin<&mut Self>, elem: NonNull<F::Owner>) {
        let head = self.head();
        unsafe {
            let link = link_of::<F>(elem);
            debug_assert!(link.as_ref().is_linked(), "moving a detached element");
            double::move_before(link, head);
        }
    }

    /// Move the run `first..=last` to the back of this list.
    ///
    /// The run may come from this list or another list using the same field.
    ///
    /// # Safety
    ///
    /// `first` and `last` must be linked in the same list with `first` not
    /// after `last`, and this list's sentinel must not lie inside the run.
    pub unsafe fn bulk_move_to_back(
        self: Pin<&mut Self>,
        first: NonNull<F::Owner>,
        last: NonNull<F::Owner>,
    ) {
        let head = self.head();
        unsafe { double::bulk_move_before(head, link_of::<F>(first), link_of::<F>(last)) };
    }

    /// Move every element of `other` to the front of this list, keeping their
    /// order. `other` is left empty.
    pub fn splice_front(mut self: Pin<&mut Self>, other: Pin<&mut Self>) {
        if other.is_empty() {
            return;
        }
        let head = self.as_mut().head();
        let source = other.head();
        unsafe { double::splice_between(source, head, head.as_ref().succ()) };
    }

    /// Move every element of `other` to the back of this list, keeping their
    /// order. `other` is left empty.
    pub fn splice_back(mut self: Pin<&mut Self>, other: Pin<&mut Self>) {
        if other.is_empty() {
            return;
        }
        let head = self.as_mut().head();
        let source = other.head();
        unsafe { double::splice_between(source, head.as_ref().pred(), head) };
    }

    /// Move the elements from the front up to and including `entry` into
    /// `dest`. The rest stays in this list.
    ///
    /// # Safety
    ///
    /// `entry` must be linked into this list and `dest` must be empty.
    pub unsafe fn cut_after(
        mut self: Pin<&mut Self>,
        dest: Pin<&mut Self>,
        entry: NonNull<F::Owner>,
    ) {
        debug_assert!(dest.is_empty(), "cut destination must be empty");
        let head = self.as_mut().head();
        let dest = dest.head();
        unsafe { double::cut_position(dest, head, link_of::<F>(entry)) };
    }

    /// Move the elements from the front up to but excluding `entry` into
    /// `dest`. The rest, starting at `entry`, stays in this list.
    ///
    /// # Safety
    ///
    /// `entry` must be linked into this list and `dest` must be empty.
    pub unsafe fn cut_before(
        mut self: Pin<&mut Self>,
        dest: Pin<&mut Self>,
        entry: NonNull<F::Owner>,
    ) {
        debug_assert!(dest.is_empty(), "cut destination must be empty");
        let head = self.as_mut().head();
        let dest = dest.head();
        unsafe { double::cut_before(dest, head, link_of::<F>(entry)) };
    }

    /// Exchange the positions of two linked elements.
    ///
    /// They may be in the same list or in two lists using this field.
    ///
    /// # Safety
    ///
    /// Both elements must satisfy the element contract and be linked.
    pub unsafe fn swap(a: NonNull<F::Owner>, b: NonNull<F::Owner>) {
        unsafe {
            let (a, b) = (link_of::<F>(a), link_of::<F>(b));
            debug_assert!(
                a.as_ref().is_linked() && b.as_ref().is_linked(),
                "swapping a detached element"
            );
            double::swap(a, b);
        }
    }

    /// Put `new` in the position of `old`. `old` comes back detached.
    ///
    /// # Safety
    ///
    /// `old` must be linked, `new` must satisfy the element contract and be
    /// detached.
    pub unsafe fn replace(old: NonNull<F::Owner>, new: NonNull<F::Owner>) {
        unsafe {
            let (old, new) = (link_of::<F>(old), link_of::<F>(new));
            debug_assert!(old.as_ref().is_linked(), "replacing a detached element");
            debug_assert!(
                !new.as_ref().is_linked(),
                "element is already linked into a list"
            );
            double::replace(old, new);
        }
    }

    /// Detach every element, returning how many there were.
    pub fn clear(self: Pin<&mut Self>) -> usize {
        self.into_ref().get_ref().detach_all()
    }

    fn detach_all(&self) -> usize {
        let Some(mut current) = self.first_link() else {
            return 0;
        };
        let sentinel = self.sentinel_ptr();
        let mut detached = 0;
        while current != sentinel {
            unsafe {
                let link = current.as_ref();
                current = link.succ();
                link.force_unlink();
            }
            detached += 1;
        }
        self.sentinel.make_self_loop();
        detached
    }

    /// Get a cursor positioned at the front element.
    pub fn cursor_front_mut(self: Pin<&mut Self>) -> CursorMut<'_, F> {
        let mut this = self;
        let head = this.as_mut().head();
        let current = unsafe { head.as_ref().succ() };
        CursorMut::new(this, head, current)
    }

    /// Get a cursor positioned at the back element.
    pub fn cursor_back_mut(self: Pin<&mut Self>) -> CursorMut<'_, F> {
        let mut this = self;
        let head = this.as_mut().head();
        let current = unsafe { head.as_ref().pred() };
        CursorMut::new(this, head, current)
    }

    /// Get a cursor positioned at `elem`.
    ///
    /// # Safety
    ///
    /// `elem` must be linked into this list.
    pub unsafe fn cursor_mut_from(
        self: Pin<&mut Self>,
        elem: NonNull<F::Owner>,
    ) -> CursorMut<'_, F> {
        let mut this = self;
        let head = this.as_mut().head();
        let current = unsafe { link_of::<F>(elem) };
        debug_assert!(
            unsafe { current.as_ref().is_linked() },
            "cursor on a detached element"
        );
        CursorMut::new(this, head, current)
    }
}

impl<F> Default for List<F>
where
    F: LinkField<Link = DoubleLink>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Drop for List<F>
where
    F: LinkField<Link = DoubleLink>,
{
    fn drop(&mut self) {
        // Elements outlive the list; none may keep pointing at the sentinel.
        let detached = self.detach_all();
        if detached > 0 {
            debug_event!(detached, "dropped a non-empty list");
        }
    }
}

impl<'a, F> IntoIterator for &'a List<F>
where
    F: LinkField<Link = DoubleLink>,
{
    type Item = NonNull<F::Owner>;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Safe methods hand out `&F::Owner`, and moving the handle moves that access
// to another thread.
unsafe impl<F> Send for List<F>
where
    F: LinkField<Link = DoubleLink>,
    F::Owner: Send + Sync,
{
}

use core::iter::FusedIterator;
use core::ptr::NonNull;

use super::{
    double::DoubleLink,
    forward::SList,
    list::List,
    offset::owner_of,
    single::SingleLink,
    traits::{Link, LinkField},
};

/// An iterator over a [`List`], front to back.
///
/// Holding it borrows the list, so the list cannot change underneath it. To
/// remove elements while walking, use a [`CursorMut`](super::cursor::CursorMut).
pub struct Iter<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    _list: &'a List<F>,
    front: Option<NonNull<DoubleLink>>,
    back: Option<NonNull<DoubleLink>>,
}

impl<'a, F> Iter<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    pub(crate) fn new(list: &'a List<F>) -> Self {
        Self {
            front: list.first_link(),
            back: list.last_link(),
            _list: list,
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a, F> Iterator for Iter<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    type Item = NonNull<F::Owner>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.front?;
        if Some(current) == self.back {
            self.finish();
        } else {
            self.front = Some(unsafe { current.as_ref().succ() });
        }
        Some(unsafe { owner_of::<F>(current) })
    }
}

impl<'a, F> DoubleEndedIterator for Iter<'a, F>
where
    F: LinkField<Link = DoubleLink>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let current = self.back?;
        if Some(current) == self.front {
            self.finish();
        } else {
            self.back = Some(unsafe { current.as_ref().pred() });
        }
        Some(unsafe { owner_of::<F>(current) })
    }
}

impl<'a, F> FusedIterator for Iter<'a, F> where F: LinkField<Link = DoubleLink> {}

/// An iterator over an [`SList`], head to tail.
pub struct SIter<'a, F>
where
    F: LinkField<Link = SingleLink>,
{
    _list: &'a SList<F>,
    current: Option<NonNull<SingleLink>>,
}

impl<'a, F> SIter<'a, F>
where
    F: LinkField<Link = SingleLink>,
{
    pub(crate) fn new(list: &'a SList<F>) -> Self {
        Self {
            current: list.head_link(),
            _list: list,
        }
    }
}

impl<'a, F> Iterator for SIter<'a, F>
where
    F: LinkField<Link = SingleLink>,
{
    type Item = NonNull<F::Owner>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = unsafe { current.as_ref().next() };
            unsafe { owner_of::<F>(current) }
        })
    }
}

impl<'a, F> FusedIterator for SIter<'a, F> where F: LinkField<Link = SingleLink> {}

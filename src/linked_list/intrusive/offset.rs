//! Conversions between an owner and its embedded link.
//!
//! Every list operation goes through the four functions here; no other module
//! does address arithmetic.

use core::ptr::NonNull;

use super::{
    error::LinkError,
    traits::{Link, LinkField},
};

/// Returns the byte offset of the link selected by `F` inside its owner.
///
/// The value is a compile-time constant and needs no live instance.
#[inline]
pub const fn offset_of<F: LinkField>() -> usize {
    F::OFFSET
}

/// Recovers the owner from a pointer to its link field.
///
/// # Safety
///
/// `link` must point at the field selected by `F` inside a live `F::Owner`.
/// Any other pointer yields a pointer outside of an object.
#[inline]
pub unsafe fn owner_of<F: LinkField>(link: NonNull<F::Link>) -> NonNull<F::Owner> {
    unsafe { link.byte_sub(F::OFFSET).cast() }
}

/// Returns a pointer to the link field selected by `F` inside `owner`.
///
/// # Safety
///
/// `owner` must point at a live `F::Owner`.
#[inline]
pub unsafe fn link_of<F: LinkField>(owner: NonNull<F::Owner>) -> NonNull<F::Link> {
    unsafe { owner.byte_add(F::OFFSET).cast() }
}

/// Returns the link field selected by `F` inside `owner`.
#[inline]
pub fn link_ref<F: LinkField>(owner: &F::Owner) -> &F::Link {
    unsafe { link_of::<F>(NonNull::from(owner)).as_ref() }
}

/// Check if `owner` is currently in a list through the field selected by `F`.
#[inline]
pub fn is_linked<F: LinkField>(owner: &F::Owner) -> bool {
    link_ref::<F>(owner).is_linked()
}

/// Fails with [`LinkError::AlreadyLinked`] if `owner` is linked through `F`.
///
/// # Safety
///
/// `owner` must point at a live `F::Owner`.
pub(crate) unsafe fn ensure_detached<F: LinkField>(
    owner: NonNull<F::Owner>,
) -> Result<(), LinkError> {
    if unsafe { link_of::<F>(owner).as_ref().is_linked() } {
        debug_event!(error = %LinkError::AlreadyLinked, "rejected insert");
        return Err(LinkError::AlreadyLinked);
    }
    Ok(())
}

/// Defines a field selector for a non-generic owner type.
///
/// Generic owners should use `#[derive(Node)]` instead.
///
/// ```
/// use mola_intrusive::link_field;
/// use mola_intrusive::linked_list::intrusive::{double::DoubleLink, offset};
///
/// pub struct Timer {
///     deadline: u64,
///     link: DoubleLink,
/// }
///
/// link_field!(pub TimerLink = Timer { link: DoubleLink });
///
/// assert_eq!(offset::offset_of::<TimerLink>(), core::mem::offset_of!(Timer, link));
/// ```
#[macro_export]
macro_rules! link_field {
    ($(#[$attr:meta])* $vis:vis $name:ident = $owner:ty { $field:ident : $link:ty }) => {
        $(#[$attr])*
        $vis struct $name;

        unsafe impl $crate::linked_list::intrusive::traits::LinkField for $name {
            type Owner = $owner;
            type Link = $link;

            const OFFSET: usize = ::core::mem::offset_of!($owner, $field);
        }

        const _: () = {
            #[allow(dead_code)]
            fn check(owner: &$owner) -> &$link {
                &owner.$field
            }
        };
    };
}

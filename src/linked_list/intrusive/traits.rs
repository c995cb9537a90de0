use core::ptr::NonNull;

/// A trait for a link embedded in a list element.
///
/// Links use interior mutability so that neighbors can be rewired through
/// shared references while the owning elements stay borrowed elsewhere. Only
/// `unsafe` code writes them, which is what lets links be `Sync`.
pub trait Link: Sized {
    /// Check if the link is currently part of a list
    fn is_linked(&self) -> bool;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self>>;

    /// Set the next pointer in the linked list
    ///
    /// # Safety
    ///
    /// No other thread may be accessing this link, and any list reaching it
    /// must stay well formed once the pointer is written.
    unsafe fn set_next(&self, next: Option<NonNull<Self>>);

    /// Reset the link to the detached state without touching its neighbors.
    ///
    /// # Safety
    ///
    /// The caller must ensure no list still reaches this link, otherwise that
    /// list is left pointing at a link that claims to be detached.
    unsafe fn force_unlink(&self);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous pointer in the linked list
    fn prev(&self) -> Option<NonNull<Self>>;

    /// Set the previous pointer in the linked list
    ///
    /// # Safety
    ///
    /// Same contract as [`Link::set_next`].
    unsafe fn set_prev(&self, prev: Option<NonNull<Self>>);
}

/// Identifies one link field inside an owner type.
///
/// A selector is a zero-sized type standing for "the field `x` of type
/// `Owner`". List handles are generic over a selector, so one owner type can
/// embed several links and sit in several lists at once.
///
/// Selectors are normally generated with `#[derive(Node)]` or
/// [`link_field!`](crate::link_field).
///
/// # Safety
///
/// `OFFSET` must be the byte offset of a field of type `Link` inside `Owner`.
/// Owner resolution subtracts it from link pointers without any check.
pub unsafe trait LinkField {
    /// The type embedding the link.
    type Owner;

    /// The link type stored in the field.
    type Link: Link;

    /// Byte offset of the link field from the start of `Owner`.
    const OFFSET: usize;
}

//! # Intrusive Linked List
//!
//! This module provides intrusive singly and doubly linked lists.
//!
//! ## Core Components
//!
//! - [`traits`]: `Link`, `LinkWithPrev` and the `LinkField` selector trait.
//! - [`offset`]: conversions between an owner and its embedded link.
//! - [`double::DoubleLink`] and [`single::SingleLink`]: the links to embed.
//! - [`list::List`]: a circular doubly linked list closed by a sentinel.
//! - [`cursor::CursorMut`]: editing a `List` around a position.
//! - [`forward::SList`]: a singly linked list.
//! - [`node::ListNode`]: a ready-made element with one link and a payload.
//!
//! ## Safety
//!
//! The lists never own their elements. Operations that hand an element to a
//! list are `unsafe`, and the caller upholds these invariants:
//!
//! - Elements stay alive and do not move while they are linked.
//! - An element is in at most one list per link field.
//! - Element pointers passed to removal or positional operations belong to the
//!   list they are passed to.
//! - While an element is linked, its links are not read from a thread other
//!   than the one operating the list, except under a lock that list also
//!   takes.
//!
//! Cheap preconditions are checked with `debug_assert!`. The `try_*` variants
//! check them in release builds too and report a [`error::LinkError`].

pub mod traits;
pub mod offset;
pub mod error;
pub mod single;
pub mod double;
pub mod node;
pub mod list;
pub mod cursor;
pub mod forward;
pub mod iter;

#[cfg(test)]
mod tests;

//! Intrusive singly- and doubly-linked lists.
//!
//! See [`linked_list::intrusive`] for the list handles and the field selector
//! machinery they are built on.
#![no_std]

#[macro_use]
mod macros;

pub mod linked_list;

pub use mola_intrusive_derive::Node;

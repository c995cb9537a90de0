use mola_intrusive_derive::Node;

use super::{double::DoubleLink, single::SingleLink, traits::Link};

/// A ready-made list element: one link and a payload.
///
/// Use it when the payload does not need to be its own struct. `NodeLink<L, T>`
/// selects the link, so `List<NodeLink<DoubleLink, T>>` holds `DoubleNode<T>`s.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct ListNode<L: Link, T> {
    #[node(field = NodeLink)]
    link: L,
    data: T,
}

/// A node for a doubly linked list.
pub type DoubleNode<T> = ListNode<DoubleLink, T>;

/// A node for a singly linked list.
pub type SingleNode<T> = ListNode<SingleLink, T>;

/// Selector of the link of a [`DoubleNode`].
pub type DoubleNodeLink<T> = NodeLink<DoubleLink, T>;

/// Selector of the link of a [`SingleNode`].
pub type SingleNodeLink<T> = NodeLink<SingleLink, T>;

impl<L: Link + Default, T> ListNode<L, T> {
    /// Creates a detached node holding `data`.
    pub fn new(data: T) -> Self {
        Self {
            link: L::default(),
            data,
        }
    }
}

impl<L: Link, T> ListNode<L, T> {
    /// Get the data associated with the node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data associated with the node
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Check if the node is currently in a list
    pub fn is_linked(&self) -> bool {
        self.link.is_linked()
    }
}

impl<L: Link + Default, T: Default> Default for ListNode<L, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the links are stored directly in the data
//! structure that is being linked. This means that the data structure must have
//! a field that is a `DoubleLink` or a `SingleLink`, and a selector type naming
//! that field. A struct with several link fields can be in several lists at
//! once.
//!
//! # Examples
//!
//! ```
//! use core::pin::pin;
//! use core::ptr::NonNull;
//!
//! use mola_intrusive::Node;
//! use mola_intrusive::linked_list::intrusive::{
//!     double::DoubleLink,
//!     forward::SList,
//!     list::List,
//!     single::SingleLink,
//! };
//!
//! #[derive(Node)]
//! struct Job {
//!     id: u32,
//!     #[node(field = RunQueue)]
//!     run: DoubleLink,
//!     #[node(field = Done)]
//!     done: SingleLink,
//! }
//!
//! let mut jobs: Vec<Job> = (0..3)
//!     .map(|id| Job { id, run: DoubleLink::new(), done: SingleLink::new() })
//!     .collect();
//! let ptrs: Vec<NonNull<Job>> = jobs.iter_mut().map(NonNull::from).collect();
//!
//! let mut queue = pin!(List::<RunQueue>::new());
//! let mut done = SList::<Done>::new();
//!
//! unsafe {
//!     for &job in &ptrs {
//!         queue.as_mut().push_back(job);
//!     }
//!     queue.as_mut().rotate_left();
//!
//!     let ids: Vec<u32> = queue.iter().map(|job| job.as_ref().id).collect();
//!     assert_eq!(ids, vec![1, 2, 0]);
//!
//!     // The same job can sit in both lists through its two links.
//!     done.push_front(ptrs[2]);
//!     assert_eq!(done.front().unwrap().as_ref().id, 2);
//! }
//!
//! let first = queue.as_mut().pop_front().unwrap();
//! assert_eq!(unsafe { first.as_ref().id }, 1);
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Deriving `Node`
//!
//! Every field tagged `#[node(field = Selector)]` gets a selector type. Other
//! `repr`s are fine:
//!
//! ```
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::{double::DoubleLink, offset::offset_of};
//! #[derive(Node)]
//! #[repr(C, align(16))]
//! struct Slot {
//!     tag: u8,
//!     #[node(field = SlotLink)]
//!     link: DoubleLink,
//! }
//!
//! assert_eq!(offset_of::<SlotLink>(), core::mem::offset_of!(Slot, link));
//! ```
//!
//! Packed structs are rejected, since their links may be misaligned:
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! #[repr(C, packed)]
//! struct Slot {
//!     tag: u8,
//!     #[node(field = SlotLink)]
//!     link: DoubleLink,
//! }
//! ```
//!
//! So are enums and tuple structs:
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! enum Slot {
//!     Free,
//!     Used { link: DoubleLink },
//! }
//! ```
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! struct Slot(u8, #[node(field = SlotLink)] DoubleLink);
//! ```
//!
//! A struct needs at least one tagged field:
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! struct Slot {
//!     tag: u8,
//!     link: DoubleLink,
//! }
//! ```
//!
//! And the attributes must be well formed:
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! struct Slot {
//!     #[node(selector = SlotLink)]
//!     link: DoubleLink,
//! }
//! ```
//!
//! ```compile_fail
//! # use mola_intrusive::Node;
//! # use mola_intrusive::linked_list::intrusive::double::DoubleLink;
//! #[derive(Node)]
//! #[node(crate_path = mola_intrusive)]
//! struct Slot {
//!     #[node(field = SlotLink)]
//!     link: DoubleLink,
//! }
//! ```
pub mod intrusive;

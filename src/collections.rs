//! Hand-written containers used by the engines.
//!
//! None of these wrap `std::collections`; `Vec` is only used as a raw
//! growable array for arenas, buckets and ring slots.

mod hash_table;
mod list;
mod rating_tree;
mod ring;
mod stack;

pub use hash_table::{ChainedHashTable, DEFAULT_CAPACITY, MAX_LOAD_FACTOR, TableStats};
pub use list::{Iter, OrderedList};
pub use rating_tree::RatingTree;
pub use ring::{CircularDeque, CircularQueue};
pub use stack::BoundedStack;

//! Priority queue used to order subtrees during tree construction.

pub mod min_heap;

pub use min_heap::{Iter, MinPriorityQueue};

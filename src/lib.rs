//! A navigable ordered set for when `std::collections::BTreeSet` is not enough: nearest-match
//! queries, traversal in both directions, removal of the last yielded key mid-traversal, and
//! live, bound-restricted range views.

pub mod avl_tree;

mod error;

pub use crate::error::TreeError;

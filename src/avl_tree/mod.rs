//! Self-balancing ordered set where the heights of the two child subtrees of any node
//! differ by at most one, with nearest-match queries, bidirectional traversal, removal
//! during traversal, and live range views.

mod iter;
mod node;
mod range;
mod set;
mod tree;

pub use self::iter::{AvlCursor, AvlSetDescendingIter, AvlSetIntoIter, AvlSetIter};
pub use self::range::{AvlRange, AvlRangeIter};
pub use self::set::AvlSet;

use crate::avl_tree::iter::{AvlCursor, AvlSetDescendingIter, AvlSetIntoIter, AvlSetIter};
use crate::avl_tree::range::{self, AvlRange};
use crate::avl_tree::tree;
use crate::error::{Result, TreeError};
use serde_derive::{Deserialize, Serialize};
use std::ops::{Bound, RangeBounds};

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Beyond the usual set
/// operations it answers nearest-match queries, traverses in both directions, supports
/// removal of the last yielded key during traversal, and projects live range views.
///
/// # Examples
/// ```
/// use navigable_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Ok(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
#[derive(Deserialize, Serialize)]
pub struct AvlSet<T> {
    pub(crate) root: tree::Tree<T>,
    pub(crate) len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { root: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` without touching the tree if the key is
    /// already present; duplicates are never stored.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        if tree::insert(&mut self.root, key) {
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Removes a key from the set. Returns `false` if the key was absent.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        if tree::remove(&mut self.root, key).is_some() {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Removes every key in `keys` that the set contains. Returns the number of keys
    /// removed.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..5 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.remove_all([1, 3, 7].iter()), 2);
    /// assert_eq!(set.to_vec(), vec![0, 2, 4]);
    /// ```
    pub fn remove_all<'a, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        keys.into_iter().filter(|key| self.remove(key)).count()
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::get(&self.root, key).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set.
    ///
    /// Returns `Err(TreeError::EmptyCollection)` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(TreeError::EmptyCollection)
    }

    /// Returns the maximum key of the set.
    ///
    /// Returns `Err(TreeError::EmptyCollection)` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn last(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(TreeError::EmptyCollection)
    }

    /// Returns the largest key in the set strictly less than a particular key. Returns
    /// `None` if such a key does not exist; an empty set is not an error.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.lower(&1), None);
    /// assert_eq!(set.lower(&2), Some(&1));
    /// ```
    pub fn lower(&self, key: &T) -> Option<&T> {
        tree::lower(&self.root, key)
    }

    /// Returns the smallest key in the set strictly greater than a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.higher(&0), Some(&1));
    /// assert_eq!(set.higher(&1), None);
    /// ```
    pub fn higher(&self, key: &T) -> Option<&T> {
        tree::higher(&self.root, key)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.root, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.root, key)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter::new(&self.root)
    }

    /// Returns an iterator over the set. The iterator will yield keys using reverse
    /// in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.descending_iter();
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn descending_iter(&self) -> AvlSetDescendingIter<'_, T> {
        AvlSetDescendingIter::new(&self.root)
    }

    /// Returns a removal-capable ascending cursor over the set.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut cursor = set.cursor();
    /// assert_eq!(cursor.next(), Ok(1));
    /// cursor.remove().unwrap();
    /// assert_eq!(cursor.next(), Ok(2));
    /// ```
    pub fn cursor(&mut self) -> AvlCursor<'_, T>
    where
        T: Clone,
    {
        AvlCursor::new(self, Bound::Unbounded, Bound::Unbounded, false)
    }

    /// Returns a removal-capable descending cursor over the set.
    pub fn descending_cursor(&mut self) -> AvlCursor<'_, T>
    where
        T: Clone,
    {
        AvlCursor::new(self, Bound::Unbounded, Bound::Unbounded, true)
    }

    /// Constructs a live view of the keys between `lower` and `upper`, each end inclusive
    /// or exclusive as requested.
    ///
    /// Returns `Err(TreeError::InvalidRange)` if the bounds are inverted, or equal without
    /// both sides inclusive (the explicit singleton form).
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..10 {
    ///     set.insert(key);
    /// }
    ///
    /// let view = set.sub_set(2, true, 5, false).unwrap();
    /// assert_eq!(view.to_vec(), vec![2, 3, 4]);
    /// assert!(set.sub_set(5, true, 2, true).is_err());
    /// ```
    pub fn sub_set(
        &mut self,
        lower: T,
        lower_inclusive: bool,
        upper: T,
        upper_inclusive: bool,
    ) -> Result<AvlRange<'_, T>> {
        let lower = if lower_inclusive {
            Bound::Included(lower)
        } else {
            Bound::Excluded(lower)
        };
        let upper = if upper_inclusive {
            Bound::Included(upper)
        } else {
            Bound::Excluded(upper)
        };
        AvlRange::new(self, lower, upper, false)
    }

    /// Constructs a live view of every key below `upper`.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..10 {
    ///     set.insert(key);
    /// }
    ///
    /// assert_eq!(set.head_set(3, true).to_vec(), vec![0, 1, 2, 3]);
    /// ```
    pub fn head_set(&mut self, upper: T, inclusive: bool) -> AvlRange<'_, T> {
        let upper = if inclusive {
            Bound::Included(upper)
        } else {
            Bound::Excluded(upper)
        };
        AvlRange::with_bounds(self, Bound::Unbounded, upper, false)
    }

    /// Constructs a live view of every key above `lower`.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..10 {
    ///     set.insert(key);
    /// }
    ///
    /// assert_eq!(set.tail_set(7, false).to_vec(), vec![8, 9]);
    /// ```
    pub fn tail_set(&mut self, lower: T, inclusive: bool) -> AvlRange<'_, T> {
        let lower = if inclusive {
            Bound::Included(lower)
        } else {
            Bound::Excluded(lower)
        };
        AvlRange::with_bounds(self, lower, Bound::Unbounded, false)
    }

    /// Constructs a live view from any of the standard range forms; `lo..hi` is the
    /// half-open `[inclusive, exclusive)` convention.
    ///
    /// Returns `Err(TreeError::InvalidRange)` under the same rules as
    /// [`sub_set`](AvlSet::sub_set).
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 0..10 {
    ///     set.insert(key);
    /// }
    ///
    /// assert_eq!(set.range(2..5).unwrap().to_vec(), vec![2, 3, 4]);
    /// assert_eq!(set.range(8..).unwrap().to_vec(), vec![8, 9]);
    /// ```
    pub fn range<R>(&mut self, range: R) -> Result<AvlRange<'_, T>>
    where
        R: RangeBounds<T>,
        T: Clone,
    {
        let lower = range::cloned_bound(range.start_bound());
        let upper = range::cloned_bound(range.end_bound());
        AvlRange::new(self, lower, upper, false)
    }

    /// Constructs an unbounded view of the set in reverse order.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.descending_set().to_vec(), vec![3, 1]);
    /// ```
    pub fn descending_set(&mut self) -> AvlRange<'_, T> {
        AvlRange::with_bounds(self, Bound::Unbounded, Bound::Unbounded, true)
    }

    /// Returns the keys of the set in ascending order as an owned snapshot.
    ///
    /// # Examples
    /// ```
    /// use navigable_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Diagnostic used by the test harnesses: verifies strict ordering, stored heights,
    /// and balance factors for every node. Production code paths never call this.
    pub fn check_invariant(&self) -> bool {
        tree::check(&self.root)
    }

    /// Diagnostic used by the test harnesses: the height of the root node, zero when the
    /// set is empty.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        AvlSetIntoIter::new(self.root)
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

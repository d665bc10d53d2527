use crate::avl_tree::node::Node;
use crate::avl_tree::set::AvlSet;
use crate::avl_tree::tree::{self, Tree};
use crate::error::{Result, TreeError};
use std::cmp::Ordering;
use std::ops::Bound;

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlSetIter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        AvlSetIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for AvlSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.as_deref() {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in reverse order and yields immutable
/// references.
pub struct AvlSetDescendingIter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlSetDescendingIter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        AvlSetDescendingIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for AvlSetDescendingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.as_deref() {
            self.current = &node.right;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.left;
            &node.key
        })
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> AvlSetIntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        AvlSetIntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

// Pushes onto `stack` the key of every node on the descent path toward the near end of the
// range that satisfies both bounds. Subtrees on the excluded side of a failing node are
// skipped whole, so the walk touches O(log n) nodes. The resulting stack top is the first
// pending key beyond `near`; the keys further down the stack are the pending path nodes.
fn refill<T>(stack: &mut Vec<T>, tree: &Tree<T>, near: Bound<&T>, far: Bound<&T>, descending: bool)
where
    T: Ord + Clone,
{
    let mut curr = tree;
    if descending {
        while let Some(node) = curr.as_deref() {
            if !tree::below_upper(&node.key, near) {
                curr = &node.left;
            } else if !tree::above_lower(&node.key, far) {
                curr = &node.right;
            } else {
                stack.push(node.key.clone());
                curr = &node.right;
            }
        }
    } else {
        while let Some(node) = curr.as_deref() {
            if !tree::above_lower(&node.key, near) {
                curr = &node.right;
            } else if !tree::below_upper(&node.key, far) {
                curr = &node.left;
            } else {
                stack.push(node.key.clone());
                curr = &node.left;
            }
        }
    }
}

/// A removal-capable traversal handle for `AvlSet<T>`.
///
/// The cursor yields keys in order (ascending or descending, optionally restricted to a
/// bound pair when obtained from a range view) and can remove the key it yielded last
/// without corrupting the rest of the traversal. It borrows the set exclusively for its
/// whole lifetime, so the backing tree cannot change through any channel other than
/// [`remove`](AvlCursor::remove).
///
/// # Examples
/// ```
/// use navigable_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// for key in 1..=6 {
///     set.insert(key);
/// }
///
/// let mut cursor = set.cursor();
/// while cursor.has_next() {
///     let key = cursor.next().unwrap();
///     if key % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
///
/// assert_eq!(set.to_vec(), vec![1, 3, 5]);
/// ```
pub struct AvlCursor<'a, T>
where
    T: Ord + Clone,
{
    set: &'a mut AvlSet<T>,
    stack: Vec<T>,
    last: Option<T>,
    lower: Bound<T>,
    upper: Bound<T>,
    descending: bool,
}

impl<'a, T> AvlCursor<'a, T>
where
    T: Ord + Clone,
{
    pub(crate) fn new(
        set: &'a mut AvlSet<T>,
        lower: Bound<T>,
        upper: Bound<T>,
        descending: bool,
    ) -> Self {
        let mut cursor = AvlCursor {
            set,
            stack: Vec::new(),
            last: None,
            lower,
            upper,
            descending,
        };
        cursor.resync(None);
        cursor
    }

    // Rebuilds the pending stack from the root for every key strictly beyond `beyond` in
    // iteration order (every in-bound key when `None`). Removal can rotate nodes the old
    // stack still named, so continuing from stale entries would skip or repeat keys; a
    // rebuild restricted to the unvisited remainder preserves exact forward progress.
    fn resync(&mut self, beyond: Option<&T>) {
        self.stack.clear();
        let (near_slot, far_slot) = if self.descending {
            (&self.upper, &self.lower)
        } else {
            (&self.lower, &self.upper)
        };
        let near = match beyond {
            Some(key) => Bound::Excluded(key),
            None => tree::bound_as_ref(near_slot),
        };
        refill(
            &mut self.stack,
            &self.set.root,
            near,
            tree::bound_as_ref(far_slot),
            self.descending,
        );
    }

    /// Checks whether another key is pending. Pure: calling it any number of times never
    /// advances the traversal.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Yields the next key in traversal order.
    ///
    /// Returns `Err(TreeError::NoMoreElements)` if the traversal is exhausted.
    pub fn next(&mut self) -> Result<T> {
        let key = match self.stack.pop() {
            Some(key) => key,
            None => return Err(TreeError::NoMoreElements),
        };

        // Expose the popped node's far-side subtree: its in-bound near spine becomes the
        // next run of pending keys.
        let far_slot = if self.descending { &self.lower } else { &self.upper };
        let far = tree::bound_as_ref(far_slot);
        let mut curr = &self.set.root;
        loop {
            let node = match curr.as_deref() {
                Some(node) => node,
                None => unreachable!(),
            };
            match key.cmp(&node.key) {
                Ordering::Less => curr = &node.left,
                Ordering::Greater => curr = &node.right,
                Ordering::Equal => {
                    let inner = if self.descending { &node.left } else { &node.right };
                    refill(&mut self.stack, inner, Bound::Excluded(&key), far, self.descending);
                    break;
                },
            }
        }

        self.last = Some(key.clone());
        Ok(key)
    }

    /// Removes the key yielded by the preceding call to [`next`](AvlCursor::next) from the
    /// backing set. The rest of the traversal is unaffected: no unvisited key is skipped
    /// and no visited key is yielded again.
    ///
    /// Returns `Err(TreeError::NoPriorElement)` if nothing has been yielded yet or if the
    /// last yielded key was already removed.
    pub fn remove(&mut self) -> Result<()> {
        let key = match self.last.take() {
            Some(key) => key,
            None => return Err(TreeError::NoPriorElement),
        };
        self.set.remove(&key);
        self.resync(Some(&key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::avl_tree::AvlSet;
    use crate::error::TreeError;

    #[test]
    fn test_cursor_empty() {
        let mut set: AvlSet<u32> = AvlSet::new();
        let mut cursor = set.cursor();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(TreeError::NoMoreElements));
    }

    #[test]
    fn test_cursor_remove_before_next() {
        let mut set = AvlSet::new();
        set.insert(1);
        let mut cursor = set.cursor();
        assert_eq!(cursor.remove(), Err(TreeError::NoPriorElement));
    }

    #[test]
    fn test_cursor_remove_twice() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(2);
        let mut cursor = set.cursor();
        cursor.next().unwrap();
        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.remove(), Err(TreeError::NoPriorElement));
    }

    #[test]
    fn test_cursor_yields_in_order() {
        let mut set = AvlSet::new();
        for key in &[5, 1, 4, 2, 3] {
            set.insert(*key);
        }

        let mut cursor = set.cursor();
        let mut keys = Vec::new();
        while cursor.has_next() {
            keys.push(cursor.next().unwrap());
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
        assert_eq!(cursor.next(), Err(TreeError::NoMoreElements));
    }

    #[test]
    fn test_cursor_has_next_is_pure() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(2);

        let mut cursor = set.cursor();
        for _ in 0..10 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_cursor_removes_while_iterating() {
        let mut set = AvlSet::new();
        for key in 0..10 {
            set.insert(key);
        }

        let mut cursor = set.cursor();
        while cursor.has_next() {
            let key = cursor.next().unwrap();
            if key % 2 == 0 {
                cursor.remove().unwrap();
            }
        }

        assert!(set.check_invariant());
        assert_eq!(set.to_vec(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_descending_cursor() {
        let mut set = AvlSet::new();
        for key in 1..=5 {
            set.insert(key);
        }

        let mut cursor = set.descending_cursor();
        let mut keys = Vec::new();
        while cursor.has_next() {
            let key = cursor.next().unwrap();
            keys.push(key);
            if key == 3 {
                cursor.remove().unwrap();
            }
        }

        assert_eq!(keys, vec![5, 4, 3, 2, 1]);
        assert!(set.check_invariant());
        assert_eq!(set.to_vec(), vec![1, 2, 4, 5]);
    }
}

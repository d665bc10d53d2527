use crate::avl_tree::tree;
use serde_derive::{Deserialize, Serialize};
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Deserialize, Serialize)]
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Height of the right subtree minus the height of the left subtree.
    pub fn balance_factor(&self) -> i32 {
        (tree::height(&self.right) as i32) - (tree::height(&self.left) as i32)
    }
}

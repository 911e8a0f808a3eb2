//! AVL nodes and rotations
//!
//! Every structural operation consumes a boxed subtree and hands back the
//! new root of that subtree, so no parent pointers or aliasing are needed.

use std::cmp::Ordering;

use tracing::trace;

use super::Metadata;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single registry entry plus its two subtrees.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) metadata: Metadata,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: u32,
}

/// Height of a possibly-absent subtree (0 for `None`).
pub(crate) fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

impl<K> Node<K> {
    fn leaf(key: K, metadata: Metadata) -> Self {
        Self {
            key,
            metadata,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`
    pub(crate) fn balance(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

//      n                 p
//     / \               / \
//    a   p     ==>     n   c
//       / \           / \
//      b   c         a   b
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

//        n             p
//       / \           / \
//      p   c   ==>   a   n
//     / \               / \
//    a   b             b   c
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Recompute the height of `node` and restore the AVL invariant at it.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance() < 0) {
            trace!(balance, "left-right rotation");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!(balance, "right rotation");
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance() > 0) {
            trace!(balance, "right-left rotation");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!(balance, "left rotation");
        }
        return rotate_left(node);
    }

    node
}

/// Insert `key` below `link`, returning the new subtree root.
///
/// `created` is set when a new node was allocated; a duplicate key merges
/// its metadata in place and leaves the shape alone.
pub(crate) fn insert<K: Ord>(
    link: Link<K>,
    key: K,
    metadata: Metadata,
    created: &mut bool,
) -> Box<Node<K>> {
    let Some(mut node) = link else {
        *created = true;
        return Box::new(Node::leaf(key, metadata));
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = Some(insert(node.left.take(), key, metadata, created));
        }
        Ordering::Greater => {
            node.right = Some(insert(node.right.take(), key, metadata, created));
        }
        Ordering::Equal => {
            node.metadata.extend(metadata);
            return node;
        }
    }

    // Revisit every ancestor: a rotation below can change heights here
    // even when no rotation is needed at this node.
    rebalance(node)
}

//! Binary search tree keyed by small integer ratings.
//!
//! Every node owns a list of values sharing its key, so two tracks rated 4
//! live in the same node. A node disappears only when its list empties.
//! The tree is not rebalanced; with a key domain of 1..=5 its height is
//! bounded by the domain size anyway.

use super::list::OrderedList;
use crate::error::{Error, Result};

type Link<V> = Option<Box<Node<V>>>;

#[derive(Debug)]
struct Node<V> {
    key: u8,
    values: OrderedList<V>,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Node<V> {
    fn leaf(key: u8, value: V) -> Box<Self> {
        let mut values = OrderedList::new();
        values.append(value);
        Box::new(Self {
            key,
            values,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug)]
pub struct RatingTree<V> {
    root: Link<V>,
    min_key: u8,
    max_key: u8,
    total: usize,
}

impl<V> Default for RatingTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RatingTree<V> {
    /// A tree accepting keys `1..=5`.
    pub fn new() -> Self {
        Self {
            root: None,
            min_key: 1,
            max_key: 5,
            total: 0,
        }
    }

    /// A tree accepting keys `min..=max`.
    pub fn with_domain(min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidKeyDomain { min, max });
        }
        Ok(Self {
            root: None,
            min_key: min,
            max_key: max,
            total: 0,
        })
    }

    pub fn domain(&self) -> (u8, u8) {
        (self.min_key, self.max_key)
    }

    pub fn in_domain(&self, key: u8) -> bool {
        (self.min_key..=self.max_key).contains(&key)
    }

    /// Number of stored values across all nodes.
    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        fn walk<V>(link: &Link<V>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + walk(&node.left).max(walk(&node.right)),
            }
        }
        walk(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.total = 0;
    }

    /// Add `value` under `key`. Returns `false` for an out-of-domain key.
    pub fn insert(&mut self, key: u8, value: V) -> bool {
        if !self.in_domain(key) {
            return false;
        }
        insert_into(&mut self.root, key, value);
        self.total += 1;
        true
    }

    pub fn contains_key(&self, key: u8) -> bool {
        self.find(key).is_some()
    }

    /// Values stored under `key`, in insertion order.
    pub fn search_by_key(&self, key: u8) -> Vec<&V> {
        match self.find(key) {
            Some(node) => node.values.iter().collect(),
            None => Vec::new(),
        }
    }

    /// Remove one occurrence of `value` from the node for `key`.
    ///
    /// The node itself is removed once its list is empty.
    pub fn delete_value(&mut self, key: u8, value: &V) -> bool
    where
        V: PartialEq,
    {
        if !self.in_domain(key) {
            return false;
        }
        let Some(node) = find_mut(&mut self.root, key) else {
            return false;
        };
        let Some(pos) = node.values.index_of(value) else {
            return false;
        };
        node.values.remove_at(pos);
        let emptied = node.values.is_empty();
        self.total -= 1;

        if emptied {
            detach(&mut self.root, key);
        }
        true
    }

    /// Keys present in the tree, smallest first.
    pub fn keys_ascending(&self) -> Vec<u8> {
        let mut out = Vec::new();
        walk_keys(&self.root, &mut out);
        out
    }

    /// All values in ascending key order.
    pub fn ascending(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.total);
        walk_in_order(&self.root, &mut out);
        out
    }

    /// All values in descending key order. Values sharing a key keep their
    /// insertion order.
    pub fn descending(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.total);
        walk_reverse(&self.root, &mut out);
        out
    }

    /// Values whose key is `>= min`, ascending by key.
    pub fn values_with_key_at_least(&self, min: u8) -> Vec<&V> {
        let mut out = Vec::new();
        walk_at_least(&self.root, min, &mut out);
        out
    }

    /// Values whose key is `<= max`, ascending by key.
    pub fn values_with_key_at_most(&self, max: u8) -> Vec<&V> {
        let mut out = Vec::new();
        walk_at_most(&self.root, max, &mut out);
        out
    }

    fn find(&self, key: u8) -> Option<&Node<V>> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return Some(node),
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

fn insert_into<V>(link: &mut Link<V>, key: u8, value: V) {
    match link {
        None => *link = Some(Node::leaf(key, value)),
        Some(node) => match key.cmp(&node.key) {
            std::cmp::Ordering::Equal => node.values.append(value),
            std::cmp::Ordering::Less => insert_into(&mut node.left, key, value),
            std::cmp::Ordering::Greater => insert_into(&mut node.right, key, value),
        },
    }
}

fn find_mut<V>(link: &mut Link<V>, key: u8) -> Option<&mut Node<V>> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key) {
        std::cmp::Ordering::Equal => Some(node),
        std::cmp::Ordering::Less => find_mut(&mut node.left, key),
        std::cmp::Ordering::Greater => find_mut(&mut node.right, key),
    }
}

/// Remove the node holding `key`, whatever its values.
fn detach<V>(link: &mut Link<V>, key: u8) {
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    match key.cmp(&node.key) {
        std::cmp::Ordering::Less => return detach(&mut node.left, key),
        std::cmp::Ordering::Greater => return detach(&mut node.right, key),
        std::cmp::Ordering::Equal => {}
    }

    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            // Two children: splice in the in-order successor.
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                let successor = *successor;
                node.key = successor.key;
                node.values = successor.values;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
}

/// Unhook the leftmost node under `link`, promoting its right child.
fn take_min<V>(link: &mut Link<V>) -> Option<Box<Node<V>>> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node)
}

fn walk_keys<V>(link: &Link<V>, out: &mut Vec<u8>) {
    if let Some(node) = link {
        walk_keys(&node.left, out);
        out.push(node.key);
        walk_keys(&node.right, out);
    }
}

fn walk_in_order<'a, V>(link: &'a Link<V>, out: &mut Vec<&'a V>) {
    if let Some(node) = link {
        walk_in_order(&node.left, out);
        out.extend(node.values.iter());
        walk_in_order(&node.right, out);
    }
}

fn walk_reverse<'a, V>(link: &'a Link<V>, out: &mut Vec<&'a V>) {
    if let Some(node) = link {
        walk_reverse(&node.right, out);
        out.extend(node.values.iter());
        walk_reverse(&node.left, out);
    }
}

// A left subtree can only hold keys >= min when this node's key is.
fn walk_at_least<'a, V>(link: &'a Link<V>, min: u8, out: &mut Vec<&'a V>) {
    let Some(node) = link else {
        return;
    };
    if node.key >= min {
        walk_at_least(&node.left, min, out);
        out.extend(node.values.iter());
    }
    walk_at_least(&node.right, min, out);
}

// A right subtree can only hold keys <= max when this node's key is.
fn walk_at_most<'a, V>(link: &'a Link<V>, max: u8, out: &mut Vec<&'a V>) {
    let Some(node) = link else {
        return;
    };
    walk_at_most(&node.left, max, out);
    if node.key <= max {
        out.extend(node.values.iter());
        walk_at_most(&node.right, max, out);
    }
}

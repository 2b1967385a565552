//! Doubly-linked list backed by a node arena.
//!
//! Nodes are addressed by stable slot indices instead of pointers. Removed
//! slots go onto a free list and are reused by later inserts.

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct OrderedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every element and release the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Insert at the tail. O(1).
    pub fn append(&mut self, value: T) {
        let idx = self.allocate(value);
        self.node_mut(idx).prev = self.tail;
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Insert at the head. O(1).
    pub fn prepend(&mut self, value: T) {
        let idx = self.allocate(value);
        self.node_mut(idx).next = self.head;
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Insert so that `value` ends up at position `index`.
    ///
    /// `index == len()` appends. Returns `false` (and drops nothing into the
    /// list) when `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> bool {
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.prepend(value);
            return true;
        }
        if index == self.len {
            self.append(value);
            return true;
        }

        let Some(next) = self.slot_at(index) else {
            return false;
        };
        let prev = self.node(next).prev;
        let idx = self.allocate(value);
        {
            let node = self.node_mut(idx);
            node.prev = prev;
            node.next = Some(next);
        }
        self.node_mut(next).prev = Some(idx);
        if let Some(p) = prev {
            self.node_mut(p).next = Some(idx);
        }
        self.len += 1;
        true
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let idx = self.slot_at(index)?;
        self.unlink(idx)
    }

    /// Move the element at `from` so that it ends up at position `to`.
    ///
    /// Implemented as remove-then-reinsert. Both indices must be in range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.len || to >= self.len {
            return false;
        }
        if from == to {
            return true;
        }
        match self.remove_at(from) {
            Some(value) => self.insert_at(to, value),
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let idx = self.slot_at(index)?;
        Some(&self.node(idx).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let idx = self.slot_at(index)?;
        Some(&mut self.node_mut(idx).value)
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Reverse in place by swapping every node's links, then head and tail.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node_mut(idx);
            std::mem::swap(&mut node.prev, &mut node.next);
            // After the swap, the old `next` lives in `prev`.
            cursor = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Keep only the elements matching `keep`. Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            cursor = node.next;
            if !keep(&node.value) {
                self.unlink(idx);
                removed += 1;
            }
        }
        removed
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Copy the elements out in traversal order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // Walk from whichever end is closer to `index`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|idx| self.node(idx).next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = cursor.and_then(|idx| self.node(idx).prev);
            }
            cursor
        }
    }

    fn unlink(&mut self, idx: usize) -> Option<T> {
        let node = self.slots.get_mut(idx)?.take()?;
        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(idx);
        self.len -= 1;
        Some(node.value)
    }

    fn allocate(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    // Slots reachable from head/tail links are always occupied.
    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("linked slot {idx} is vacant"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("linked slot {idx} is vacant"),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

/// Head-to-tail iterator over an [`OrderedList`].
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node(idx);
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

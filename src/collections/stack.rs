//! Array-backed LIFO with an optional size cap.
//!
//! Overflow drops the bottom (oldest) element, so a capped stack always holds
//! the most recent `capacity` pushes.

#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> BoundedStack<T> {
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// A stack keeping at most `capacity` elements (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push on top. Returns the evicted bottom element when the cap is hit.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.items.push(value);
        match self.capacity {
            Some(cap) if self.items.len() > cap => Some(self.items.remove(0)),
            _ => None,
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Top-first iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    /// Bottom-to-top copy.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

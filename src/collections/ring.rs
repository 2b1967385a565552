//! Fixed-capacity ring buffers.
//!
//! `CircularQueue` is a sliding window: enqueueing into a full queue evicts
//! the oldest element first. `CircularDeque` refuses inserts when full
//! instead. Skip tracking relies on the queue's eviction, so the two are kept
//! deliberately different.

/// FIFO ring buffer that drops its oldest element on overflow.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> CircularQueue<T> {
    /// Create a queue holding at most `capacity` elements (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Push at the rear. When full, the front element is dequeued first and
    /// returned.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() { self.dequeue() } else { None };
        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.capacity();
        self.count += 1;
        evicted
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.front = 0;
        self.rear = 0;
        self.count = 0;
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Front-to-rear iterator over exactly `len()` slots.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let cap = self.capacity();
        (0..self.count).filter_map(move |i| self.slots[(self.front + i) % cap].as_ref())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Double-ended ring buffer that rejects inserts when full.
#[derive(Debug, Clone)]
pub struct CircularDeque<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> CircularDeque<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Push before the front. Returns `false` when full.
    pub fn add_front(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.front = (self.front + self.capacity() - 1) % self.capacity();
        self.slots[self.front] = Some(value);
        self.count += 1;
        true
    }

    /// Push after the rear. Returns `false` when full.
    pub fn add_rear(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.capacity();
        self.count += 1;
        true
    }

    pub fn remove_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        value
    }

    pub fn remove_rear(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.rear = (self.rear + self.capacity() - 1) % self.capacity();
        let value = self.slots[self.rear].take();
        self.count -= 1;
        value
    }

    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn peek_rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let last = (self.rear + self.capacity() - 1) % self.capacity();
        self.slots[last].as_ref()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.front = 0;
        self.rear = 0;
        self.count = 0;
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let cap = self.capacity();
        (0..self.count).filter_map(move |i| self.slots[(self.front + i) % cap].as_ref())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

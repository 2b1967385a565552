//! Separate-chaining hash table keyed by strings.
//!
//! Each bucket is a chain of `(key, value)` entries. Deletion is physical, so
//! a chain only ever holds live entries. The table doubles and rehashes once
//! `len >= capacity * 0.75`.
//!
//! Keys that collide heavily degrade every operation to O(n); no probing or
//! rebalancing is attempted.

use serde::Serialize;

/// Default bucket count for a new table.
pub const DEFAULT_CAPACITY: usize = 16;

/// Resize threshold as a fraction of capacity.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

const HASH_BASE: u64 = 31;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

type Bucket<V> = Vec<Entry<V>>;

/// Bucket occupancy summary, see [`ChainedHashTable::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    /// Entries that share their bucket with an earlier entry.
    pub collisions: usize,
    pub max_bucket: usize,
    /// Mean chain length over non-empty buckets.
    pub avg_bucket: f64,
}

#[derive(Debug, Clone)]
pub struct ChainedHashTable<V> {
    buckets: Vec<Bucket<V>>,
    len: usize,
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedHashTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Insert or overwrite. Returns the previous value for an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = bucket_index(&key, self.capacity());
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.buckets[idx].push(Entry { key, value });
        self.len += 1;

        if self.len as f64 >= self.capacity() as f64 * MAX_LOAD_FACTOR {
            self.resize(self.capacity() * 2);
        }
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = bucket_index(key, self.capacity());
        self.buckets[idx]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = bucket_index(key, self.capacity());
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let idx = bucket_index(key, self.capacity());
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|e| e.key == key)?;
        let entry = bucket.remove(pos);
        self.len -= 1;
        Some(entry.value)
    }

    /// Drop all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Entries in bucket order, then chain order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|e| (e.key.as_str(), &e.value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries().map(|(_, v)| v)
    }

    pub fn stats(&self) -> TableStats {
        let mut collisions = 0;
        let mut max_bucket = 0;
        let mut used = 0;
        for bucket in &self.buckets {
            let n = bucket.len();
            if n > 0 {
                used += 1;
                collisions += n - 1;
            }
            max_bucket = max_bucket.max(n);
        }

        TableStats {
            size: self.len,
            capacity: self.capacity(),
            collisions,
            max_bucket,
            avg_bucket: if used == 0 {
                0.0
            } else {
                self.len as f64 / used as f64
            },
        }
    }

    // Every live entry is rehashed against the new capacity.
    fn resize(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for entry in old.into_iter().flatten() {
            let idx = bucket_index(&entry.key, new_capacity);
            self.buckets[idx].push(entry);
        }
        tracing::debug!(
            size = self.len,
            capacity = new_capacity,
            "hash table resized"
        );
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// Polynomial string hash folded into `capacity` at every step.
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    let modulus = capacity as u64;
    let mut hash: u64 = 0;
    for byte in key.bytes() {
        hash = (hash * HASH_BASE + u64::from(byte)) % modulus;
    }
    hash as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_index_is_deterministic_and_in_range() {
        for cap in [1, 2, 7, 16, 32, 1024] {
            for key in ["", "a", "track-1", "Daft Punk", "ünïcödé"] {
                let a = bucket_index(key, cap);
                assert_eq!(a, bucket_index(key, cap));
                assert!(a < cap);
            }
        }
    }

    #[test]
    fn bucket_index_matches_polynomial_fold() {
        // "ab" = (97 * 31 + 98) mod 16 = 3105 mod 16 = 1
        assert_eq!(bucket_index("ab", 16), 1);
        assert_eq!(bucket_index("", 16), 0);
    }

    #[test]
    fn stats_count_collisions_per_bucket() {
        let mut t2: ChainedHashTable<i32> = ChainedHashTable {
            buckets: empty_buckets(4),
            len: 0,
        };
        t2.buckets[0].push(Entry {
            key: "x".into(),
            value: 1,
        });
        t2.buckets[0].push(Entry {
            key: "y".into(),
            value: 2,
        });
        t2.buckets[2].push(Entry {
            key: "z".into(),
            value: 3,
        });
        t2.len = 3;

        let s = t2.stats();
        assert_eq!(s.size, 3);
        assert_eq!(s.capacity, 4);
        assert_eq!(s.collisions, 1);
        assert_eq!(s.max_bucket, 2);
        assert!((s.avg_bucket - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn single_bucket_table_grows_on_first_insert() {
        let mut t = ChainedHashTable::with_capacity(1);
        t.set("a", 1);
        assert_eq!(t.capacity(), 2);
        assert_eq!(t.get("a"), Some(&1));
    }
}

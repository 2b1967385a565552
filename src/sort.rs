//! Comparator-driven sorting algorithms.
//!
//! All three return a new vector and leave the input untouched. Only merge
//! sort is stable.

mod criteria;
mod heap;
mod merge;
mod quick;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use criteria::{SortCriterion, SortField, SortOrder, chained, comparator};
pub use heap::{heap_sort, heap_sort_in_place};
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_in_place};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    #[default]
    #[serde(alias = "merge-sort", alias = "merge_sort", alias = "mergesort")]
    Merge,
    #[serde(alias = "quick-sort", alias = "quick_sort", alias = "quicksort")]
    Quick,
    #[serde(alias = "heap-sort", alias = "heap_sort", alias = "heapsort")]
    Heap,
}

impl SortAlgorithm {
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Merge)
    }

    pub fn sort<T, F>(self, items: &[T], cmp: &F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            Self::Merge => merge_sort(items, cmp),
            Self::Quick => quick_sort(items, cmp),
            Self::Heap => heap_sort(items, cmp),
        }
    }
}

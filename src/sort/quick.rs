use std::cmp::Ordering;

/// Quick sort on a copy of `items`. Not stable.
pub fn quick_sort<T, F>(items: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut out = items.to_vec();
    quick_sort_in_place(&mut out, cmp);
    out
}

/// Lomuto partitioning around the last element.
///
/// Recurses into the smaller side and loops on the larger, so stack depth
/// stays logarithmic even when already-sorted input drives time to O(n²).
pub fn quick_sort_in_place<T, F>(mut items: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let p = partition(items, cmp);
        let (lo, rest) = std::mem::take(&mut items).split_at_mut(p);
        let hi = &mut rest[1..];
        if lo.len() < hi.len() {
            quick_sort_in_place(lo, cmp);
            items = hi;
        } else {
            quick_sort_in_place(hi, cmp);
            items = lo;
        }
    }
}

fn partition<T, F>(items: &mut [T], cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let pivot = items.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if cmp(&items[i], &items[pivot]) == Ordering::Less {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}

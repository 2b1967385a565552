use std::cmp::Ordering;

/// Heap sort on a copy of `items`. Not stable.
pub fn heap_sort<T, F>(items: &[T], cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut out = items.to_vec();
    heap_sort_in_place(&mut out, cmp);
    out
}

/// Build a max-heap, then repeatedly swap the max to the back. O(1) extra space.
pub fn heap_sort_in_place<T, F>(items: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = items.len();
    for root in (0..n / 2).rev() {
        sift_down(items, root, n, cmp);
    }
    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, cmp);
    }
}

fn sift_down<T, F>(items: &mut [T], mut root: usize, end: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let mut largest = root;
        if cmp(&items[left], &items[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < end && cmp(&items[right], &items[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        items.swap(root, largest);
        root = largest;
    }
}

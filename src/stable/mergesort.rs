//! Top-down merge sort. Splits at the midpoint, sorts both halves and merges
//! them into a fresh vector. Stable.

use std::cmp::Ordering;

sort_impl!("mergesort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Copying variant. Leaves `v` untouched and returns the sorted elements.
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_sort(v.to_vec(), &mut |a, b| a.lt(b))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    // Same write-back scheme as quicksort, the slice is untouched until the
    // recursion has produced the full result.
    let result = merge_sort(v.to_vec(), &mut is_less);

    for (slot, val) in v.iter_mut().zip(result) {
        *slot = val;
    }
}

fn merge_sort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return v;
    }

    let mut left = v;
    let right = left.split_off(len / 2);

    let left = merge_sort(left, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

/// Merges two non-decreasing runs. Ties take from the left run, which is what
/// keeps the sort stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if is_less(r, l) {
            merged.push(right.next().unwrap());
        } else {
            merged.push(left.next().unwrap());
        }
    }

    // At most one of these still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}

//! Recursive three-way quicksort, pivot picked from the middle of the slice.
//!
//! Partitions into less/equal/greater vectors instead of swapping in place,
//! so it allocates O(n) per recursion level.

use std::cmp::Ordering;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Copying variant. Leaves `v` untouched and returns the sorted elements.
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quicksort(v.to_vec(), &mut |a, b| a.lt(b))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    // The recursion consumes a scratch copy, the input slice is only written
    // once the result is complete. A panicking comparison leaves `v` intact.
    let result = quicksort(v.to_vec(), &mut is_less);

    for (slot, val) in v.iter_mut().zip(result) {
        *slot = val;
    }
}

fn quicksort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return v;
    }

    // Lift the pivot out so the remaining elements can be moved into the
    // partitions. swap_remove re-orders the tail, which is fine, relative
    // order inside a partition carries no guarantee.
    let pivot = v.swap_remove(len / 2);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for val in v {
        if is_less(&val, &pivot) {
            less.push(val);
        } else if is_less(&pivot, &val) {
            greater.push(val);
        } else {
            equal.push(val);
        }
    }
    equal.push(pivot);

    let mut result = quicksort(less, is_less);
    result.append(&mut equal);
    result.append(&mut quicksort(greater, is_less));

    result
}

use std::cmp::Ordering;

sort_impl!("bubble");

/// Sorts the slice with adjacent-swap passes, stopping early once a full pass
/// performs no swap.
///
/// This sort is stable, in-place and *O*(*n*^2) worst-case. Only elements that
/// compare strictly greater than their right neighbor are swapped, so equal
/// elements keep their relative order.
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::cmp);
}

/// Sorts the slice with a comparator function. See [`sort`].
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;

        // After pass i the largest i + 1 elements sit in their final positions,
        // so each pass scans one element fewer.
        for j in 0..n - 1 - i {
            if compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }

        // A pass without swaps means the remaining prefix is already sorted.
        if !swapped {
            break;
        }
    }
}

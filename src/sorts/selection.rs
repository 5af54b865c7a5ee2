use std::cmp::Ordering;

sort_impl!("selection");

/// Sorts the slice by repeatedly selecting the minimum of the unsorted suffix
/// and swapping it to the front of that suffix.
///
/// This sort is unstable (a swap across the slice can reorder equal elements),
/// in-place and *O*(*n*^2) in every case. Ties pick the first occurrence of the
/// minimum.
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
        let mut min_idx = i;
        for j in i + 1..n {
            if compare(&data[j], &data[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }

        // Unconditional, a self-swap when the boundary already holds the minimum.
        data.swap(i, min_idx);
    }
}

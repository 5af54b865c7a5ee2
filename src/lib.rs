//! Reference comparison sorts plus the text pipeline around them: parse a
//! comma-separated integer list, sort it with the selected algorithm, and chunk
//! the result into fixed-width display rows together with the measured sort time.

use std::cmp::Ordering;

/// Common surface every sorter in this crate exposes, so tests and benchmarks
/// can drive all algorithms through one interface.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Generates the `SortImpl` registration type for a sorter module. Expects the
/// module to define free `sort` and `sort_by` functions.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod run;
pub mod sorts;

pub use run::{run, RunError, SortMode, SortOutput, ROW_WIDTH};

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension trait for resolving any Rust range expression over [`isize`] into an
//! [`OffsetRange`] - see [`IntoOffsetRange`] trait.

use super::{index_bounds_check::length_as_offset, offset_range::OffsetRange};
use std::ops::{Bound, RangeBounds};

/// Extension trait that resolves `a..b`, `a..=b`, `a..`, `..b`, `..=b` and `..` into a
/// half-open [`OffsetRange`] for a sequence of a given length.
///
/// > <div class="warning">
/// >
/// > We cannot add inherent methods to the [`std::ops`] range types (orphan rule), so
/// > this is a blanket extension trait over [`RangeBounds<isize>`].
/// >
/// > </div>
///
/// Resolution rules:
///
/// | Bound               | Resolves to        |
/// |---------------------|--------------------|
/// | unbounded start     | `0`                |
/// | included start `s`  | `s`                |
/// | excluded start `s`  | `s + 1`            |
/// | unbounded end       | `length`           |
/// | excluded end `e`    | `e`                |
/// | included end `e`    | `e + 1`            |
///
/// The `+ 1` adjustments saturate at [`isize::MAX`].
///
/// ```
/// use bounded_access::{IntoOffsetRange, OffsetRange};
///
/// assert_eq!((1_isize..=2).to_offset_range(3), OffsetRange::new(1, 3));
/// assert_eq!((-1_isize..).to_offset_range(3), OffsetRange::new(-1, 3));
/// assert_eq!((..).to_offset_range(3), OffsetRange::new(0, 3));
/// ```
pub trait IntoOffsetRange {
    fn to_offset_range(&self, length: usize) -> OffsetRange;
}

impl<R> IntoOffsetRange for R
where
    R: RangeBounds<isize> + ?Sized,
{
    fn to_offset_range(&self, length: usize) -> OffsetRange {
        let start = match self.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match self.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length_as_offset(length),
        };
        OffsetRange::new(start, end)
    }
}

/// Lets an already resolved [`OffsetRange`] be passed anywhere a range expression is
/// accepted.
impl RangeBounds<isize> for OffsetRange {
    fn start_bound(&self) -> Bound<&isize> { Bound::Included(&self.start) }

    fn end_bound(&self) -> Bound<&isize> { Bound::Excluded(&self.end) }
}

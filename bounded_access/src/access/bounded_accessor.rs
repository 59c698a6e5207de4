// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Policy driven slicing and indexing for contiguous sequences - see
//! [`BoundedAccessor`] trait.

use super::{AccessError, AccessPolicy, AccessResult};
use crate::{IntoOffsetRange, OffsetRange, to_element_index};
use std::ops::{Bound, Range, RangeBounds};

/// Bounds-safe slicing and indexing with three access policies.
///
/// Implemented for `[T]`, so every method is also available on `Vec<T>`, arrays, and
/// `Box<[T]>` through auto-deref. Ranges are any Rust range expression over [`isize`]
/// (`a..b`, `a..=b`, `a..`, `..b`, `..=b`, `..`, or an [`OffsetRange`]), so negative and
/// overlong offsets can be expressed directly. An unbounded end (`a..`, `..`) always
/// reaches the end of the sequence, even for zero-sized `T` with more than
/// [`isize::MAX`] elements, where an explicit `isize` end cannot.
///
/// Every operation is a pure function of its inputs. Results borrow from the sequence,
/// which is never mutated.
///
/// # Policies at a glance
///
/// ```text
/// a = [1, 2, 3]
///
/// request      slice_strict      slice_truncating   slice_safe
/// ───────────  ────────────────  ─────────────────  ───────────────
/// 0..5         Err(OutOfRange)   Ok([1, 2, 3])      Ok(None)
/// -1..2        Err(OutOfRange)   Ok([1, 2])         Ok(None)
/// 1..2         Ok([2])           Ok([2])            Ok(Some([2]))
/// 3..4         Err(OutOfRange)   Ok([])             Ok(None)
/// 4..3         Err(Malformed)    Err(Malformed)     Err(Malformed)
/// ```
///
/// # Examples
///
/// ```
/// use bounded_access::{AccessError, BoundedAccessor};
///
/// let a = vec![1, 2, 3];
///
/// assert_eq!(a.slice_truncating(-1..2), Ok(&[1, 2][..]));
/// assert_eq!(a.slice_safe(1..3), Ok(Some(&[2, 3][..])));
/// assert_eq!(a.slice_safe(0..5), Ok(None));
/// assert_eq!(a.element_safe(3), None);
/// assert_eq!(
///     a.slice_truncating(4..3),
///     Err(AccessError::MalformedRange { start: 4, end: 3 })
/// );
/// ```
pub trait BoundedAccessor<T> {
    /// The contiguous elements that every operation reads from.
    fn as_sequence(&self) -> &[T];

    /// Returns exactly `[start, end)`, failing fast when any part of the range lies
    /// outside `[0, len]`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::MalformedRange`] if `start > end`.
    /// - [`AccessError::OutOfRange`] if `start < 0` or `end > len`.
    fn slice_strict(&self, range: impl RangeBounds<isize>) -> Result<&[T], AccessError> {
        let items = self.as_sequence();
        let requested = resolve_well_formed(&range, items.len())?;
        requested
            .to_index_range(items.len())
            .and_then(|index_range| {
                items.get(to_sequence_end(&range, index_range, items.len()))
            })
            .ok_or(AccessError::OutOfRange {
                start: requested.start,
                end: requested.end,
                length: items.len(),
            })
    }

    /// Returns `[max(start, 0), min(end, len))`, which is empty when clamping leaves
    /// nothing (for example a range entirely past the end).
    ///
    /// # Errors
    ///
    /// [`AccessError::MalformedRange`] if `start > end`. Bounds never cause an error.
    fn slice_truncating(
        &self,
        range: impl RangeBounds<isize>,
    ) -> Result<&[T], AccessError> {
        let items = self.as_sequence();
        let requested = resolve_well_formed(&range, items.len())?;
        let clamped = requested.clamp_range_to(items.len());
        Ok(items
            .get(to_sequence_end(&range, clamped, items.len()))
            .unwrap_or_default())
    }

    /// Returns exactly `[start, end)` only when the whole range lies inside `[0, len]`,
    /// and [`None`] otherwise. No clamping: partial overlap is still [`None`].
    ///
    /// # Errors
    ///
    /// [`AccessError::MalformedRange`] if `start > end`. Absence is reserved for
    /// bounds violations.
    fn slice_safe(
        &self,
        range: impl RangeBounds<isize>,
    ) -> Result<Option<&[T]>, AccessError> {
        let items = self.as_sequence();
        let requested = resolve_well_formed(&range, items.len())?;
        Ok(requested
            .to_index_range(items.len())
            .and_then(|index_range| {
                items.get(to_sequence_end(&range, index_range, items.len()))
            }))
    }

    /// Returns the element at `index` when `0 <= index < len`.
    fn element_safe(&self, index: isize) -> Option<&T> {
        let items = self.as_sequence();
        to_element_index(index, items.len()).and_then(|it| items.get(it))
    }

    /// Returns the element at `index`, failing fast when it doesn't exist.
    ///
    /// # Errors
    ///
    /// [`AccessError::IndexOutOfRange`] unless `0 <= index < len`.
    fn element_strict(&self, index: isize) -> Result<&T, AccessError> {
        self.element_safe(index)
            .ok_or(AccessError::IndexOutOfRange {
                index,
                length: self.as_sequence().len(),
            })
    }

    /// Dispatches to [`slice_strict()`], [`slice_truncating()`] or [`slice_safe()`].
    ///
    /// # Errors
    ///
    /// Whatever the selected operation returns.
    ///
    /// [`slice_strict()`]: Self::slice_strict
    /// [`slice_truncating()`]: Self::slice_truncating
    /// [`slice_safe()`]: Self::slice_safe
    fn slice_with_policy(
        &self,
        range: impl RangeBounds<isize>,
        policy: AccessPolicy,
    ) -> Result<AccessResult<'_, T>, AccessError> {
        match policy {
            AccessPolicy::Strict => self.slice_strict(range).map(AccessResult::Subsequence),
            AccessPolicy::Truncating => {
                self.slice_truncating(range).map(AccessResult::Subsequence)
            }
            AccessPolicy::Safe => self.slice_safe(range).map(AccessResult::from),
        }
    }

    /// Dispatches to [`element_strict()`] or [`element_safe()`].
    ///
    /// # Errors
    ///
    /// - [`AccessError::UnsupportedPolicy`] for [`AccessPolicy::Truncating`], which has
    ///   no meaning for a single element.
    /// - [`AccessError::IndexOutOfRange`] for [`AccessPolicy::Strict`] misses.
    ///
    /// [`element_strict()`]: Self::element_strict
    /// [`element_safe()`]: Self::element_safe
    fn element_with_policy(
        &self,
        index: isize,
        policy: AccessPolicy,
    ) -> Result<AccessResult<'_, T>, AccessError> {
        match policy {
            AccessPolicy::Strict => self.element_strict(index).map(AccessResult::Element),
            AccessPolicy::Truncating => Err(AccessError::UnsupportedPolicy { policy }),
            AccessPolicy::Safe => Ok(AccessResult::from(self.element_safe(index))),
        }
    }
}

impl<T> BoundedAccessor<T> for [T] {
    fn as_sequence(&self) -> &[T] { self }
}

/// Resolves `range` against `length`, rejecting inverted ranges before any bounds are
/// looked at.
fn resolve_well_formed(
    range: &impl RangeBounds<isize>,
    length: usize,
) -> Result<OffsetRange, AccessError> {
    let requested = range.to_offset_range(length);
    if requested.is_inverted() {
        return Err(AccessError::MalformedRange {
            start: requested.start,
            end: requested.end,
        });
    }
    Ok(requested)
}

/// An unbounded end always means the end of the sequence. The signed [`OffsetRange`]
/// saturates at [`isize::MAX`], which is short of `length` for zero-sized element types.
fn to_sequence_end(
    range: &impl RangeBounds<isize>,
    index_range: Range<usize>,
    length: usize,
) -> Range<usize> {
    match range.end_bound() {
        Bound::Unbounded => index_range.start..length,
        Bound::Included(_) | Bound::Excluded(_) => index_range,
    }
}

#[cfg(test)]
mod tests_slice {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: [i32; 3] = [1, 2, 3];

    #[test]
    fn test_slice_truncating_scenarios() {
        assert_eq!(A.slice_truncating(0..5), Ok(&[1, 2, 3][..]));
        assert_eq!(A.slice_truncating(-1..2), Ok(&[1, 2][..]));
        assert_eq!(A.slice_truncating(1..2), Ok(&[2][..]));
        assert_eq!(A.slice_truncating(3..4), Ok(&[][..]));
        assert_eq!(A.slice_truncating(-7..-3), Ok(&[][..]));
    }

    #[test]
    fn test_slice_safe_scenarios() {
        assert_eq!(A.slice_safe(0..5), Ok(None));
        assert_eq!(A.slice_safe(-1..2), Ok(None));
        assert_eq!(A.slice_safe(1..3), Ok(Some(&[2, 3][..])));
        assert_eq!(A.slice_safe(3..4), Ok(None));
        assert_eq!(A.slice_safe(3..3), Ok(Some(&[][..])));
    }

    #[test]
    fn test_slice_strict_scenarios() {
        assert_eq!(
            A.slice_strict(0..5),
            Err(AccessError::OutOfRange {
                start: 0,
                end: 5,
                length: 3
            })
        );
        assert_eq!(
            A.slice_strict(-1..2),
            Err(AccessError::OutOfRange {
                start: -1,
                end: 2,
                length: 3
            })
        );
        assert_eq!(A.slice_strict(1..2), Ok(&[2][..]));
        assert_eq!(A.slice_strict(0..3), Ok(&[1, 2, 3][..]));
    }

    #[test]
    fn test_reversed_range_is_malformed_under_every_policy() {
        let malformed = Err(AccessError::MalformedRange { start: 4, end: 3 });
        assert_eq!(A.slice_strict(4..3), malformed);
        assert_eq!(A.slice_truncating(4..3), malformed);
        assert_eq!(
            A.slice_safe(4..3),
            Err(AccessError::MalformedRange { start: 4, end: 3 })
        );
    }

    #[test]
    fn test_other_range_shapes() {
        assert_eq!(A.slice_truncating(..), Ok(&[1, 2, 3][..]));
        assert_eq!(A.slice_truncating(1..), Ok(&[2, 3][..]));
        assert_eq!(A.slice_truncating(..=1), Ok(&[1, 2][..]));
        assert_eq!(A.slice_safe(0..=2), Ok(Some(&[1, 2, 3][..])));
        assert_eq!(A.slice_safe(0..=3), Ok(None));
        assert_eq!(
            A.slice_strict(OffsetRange::new(2, 3)),
            Ok(&[3][..])
        );
    }

    #[test]
    fn test_unbounded_end_past_isize_max() {
        // SAFETY: a dangling, aligned pointer is valid for any number of zero-sized
        // elements.
        let huge: &[()] = unsafe {
            std::slice::from_raw_parts(std::ptr::NonNull::dangling().as_ptr(), usize::MAX)
        };

        assert_eq!(huge.slice_strict(..).map(<[()]>::len), Ok(usize::MAX));
        assert_eq!(huge.slice_strict(1..).map(<[()]>::len), Ok(usize::MAX - 1));
        assert_eq!(huge.slice_truncating(-3..).map(<[()]>::len), Ok(usize::MAX));
        assert_eq!(
            huge.slice_safe(..).map(|it| it.map(<[()]>::len)),
            Ok(Some(usize::MAX))
        );
        assert_eq!(
            huge.slice_strict(0..isize::MAX).map(<[()]>::len),
            Ok(isize::MAX.unsigned_abs())
        );
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.slice_truncating(-1..1), Ok(&[][..]));
        assert_eq!(empty.slice_safe(0..0), Ok(Some(&[][..])));
        assert_eq!(empty.slice_safe(0..1), Ok(None));
        assert_eq!(empty.element_safe(0), None);
    }
}

#[cfg(test)]
mod tests_element {
    use super::*;
    // No `pretty_assertions::assert_eq` here, it clashes with the one `test_case` expands `=>` into.
    use test_case::test_case;

    #[test_case(0 => Some(1) ; "first")]
    #[test_case(2 => Some(3) ; "last")]
    #[test_case(-1 => None ; "negative")]
    #[test_case(3 => None ; "one past the end")]
    #[test_case(isize::MAX => None ; "huge")]
    fn test_element_safe(index: isize) -> Option<i32> {
        [1, 2, 3].element_safe(index).copied()
    }

    #[test]
    fn test_element_strict() {
        let a = vec![1, 2, 3];
        assert_eq!(a.element_strict(0), Ok(&1));
        assert_eq!(
            a.element_strict(-1),
            Err(AccessError::IndexOutOfRange {
                index: -1,
                length: 3
            })
        );
        assert_eq!(
            a.element_strict(3),
            Err(AccessError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
    }
}

#[cfg(test)]
mod tests_with_policy {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slice_with_policy() {
        let a = vec![1, 2, 3];
        assert_eq!(
            a.slice_with_policy(0..5, AccessPolicy::Truncating),
            Ok(AccessResult::Subsequence(&[1, 2, 3][..]))
        );
        assert_eq!(
            a.slice_with_policy(0..5, AccessPolicy::Safe),
            Ok(AccessResult::Absent)
        );
        assert!(
            a.slice_with_policy(0..5, AccessPolicy::Strict)
                .is_err_and(|it| it.is_out_of_range())
        );
    }

    #[test]
    fn test_element_with_policy() {
        let a = vec![1, 2, 3];
        assert_eq!(
            a.element_with_policy(0, AccessPolicy::Strict),
            Ok(AccessResult::Element(&1))
        );
        assert_eq!(
            a.element_with_policy(-1, AccessPolicy::Safe),
            Ok(AccessResult::Absent)
        );
        assert_eq!(
            a.element_with_policy(0, AccessPolicy::Truncating),
            Err(AccessError::UnsupportedPolicy {
                policy: AccessPolicy::Truncating
            })
        );
    }
}

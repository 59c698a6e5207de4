// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module provides the result enums for the bounds checking scenarios that the
//! accessor needs:
//! - [`IndexBoundsResult`] - Results for single signed index checking against `[0,
//!   length)` (underflow, within, overflow)
//! - [`RangeValidityStatus`] - Results for validating range structure and bounds
//!   correctness against `[0, length]`

/// Result of checking a signed index against `[0, length)`.
///
/// Used with [`check_index_bounds()`] to find out whether an element exists at an index.
/// Unlike unsigned array access, a signed index can fall off either end of the sequence,
/// so this is a three-state result: below zero (underflow), a real element (within), or
/// at/after the end (overflow). See the [Interval Notation] section in the module
/// documentation for notation details.
///
/// ## Examples
///
/// ```
/// use bounded_access::{IndexBoundsResult, check_index_bounds};
///
/// assert_eq!(check_index_bounds(-1, 3), IndexBoundsResult::Underflowed);
/// assert_eq!(check_index_bounds(0, 3), IndexBoundsResult::Within);
/// assert_eq!(check_index_bounds(3, 3), IndexBoundsResult::Overflowed);
/// ```
///
/// [`check_index_bounds()`]: crate::check_index_bounds
/// [Interval Notation]: mod@crate::bounds_check#interval-notation
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IndexBoundsResult {
    /// Index is negative.
    Underflowed,

    /// Index refers to an existing element.
    Within,

    /// Index is at or past the end of the sequence.
    Overflowed,
}

/// Result of range structure validation operations.
///
/// Used with [`check_range_is_valid_for_length`] to determine if a range is well-formed
/// and lies entirely inside `[0, length]`. This captures WHY a range might be invalid,
/// so callers can tell a caller logic defect ([`Inverted`]) apart from a legitimate
/// "slice past the end" request ([`StartOutOfBounds`], [`EndOutOfBounds`]) without
/// re-checking.
///
/// # Examples
///
/// ```
/// use bounded_access::{OffsetRange, RangeValidityStatus};
///
/// let length = 10;
///
/// assert_eq!(
///     OffsetRange::new(2, 7).check_range_is_valid_for_length(length),
///     RangeValidityStatus::Valid
/// );
/// assert_eq!(
///     OffsetRange::new(8, 3).check_range_is_valid_for_length(length),
///     RangeValidityStatus::Inverted
/// );
/// assert_eq!(
///     OffsetRange::new(-1, 5).check_range_is_valid_for_length(length),
///     RangeValidityStatus::StartOutOfBounds
/// );
/// assert_eq!(
///     OffsetRange::new(5, 15).check_range_is_valid_for_length(length),
///     RangeValidityStatus::EndOutOfBounds
/// );
/// ```
///
/// [`check_range_is_valid_for_length`]: crate::OffsetRange::check_range_is_valid_for_length
/// [`Inverted`]: RangeValidityStatus::Inverted
/// [`StartOutOfBounds`]: RangeValidityStatus::StartOutOfBounds
/// [`EndOutOfBounds`]: RangeValidityStatus::EndOutOfBounds
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeValidityStatus {
    /// Range is well-formed and inside `[0, length]`.
    Valid,

    /// Range is inverted (start > end). Takes precedence over the bounds variants.
    Inverted,

    /// Start is negative or past the end (`start < 0 || start > length`).
    StartOutOfBounds,

    /// End is negative or past the end (`end < 0 || end > length`).
    EndOutOfBounds,
}

impl RangeValidityStatus {
    /// Both [`StartOutOfBounds`] and [`EndOutOfBounds`] count as bounds violations;
    /// [`Inverted`] does not.
    ///
    /// [`StartOutOfBounds`]: RangeValidityStatus::StartOutOfBounds
    /// [`EndOutOfBounds`]: RangeValidityStatus::EndOutOfBounds
    /// [`Inverted`]: RangeValidityStatus::Inverted
    #[must_use]
    pub fn is_out_of_bounds(self) -> bool {
        matches!(
            self,
            RangeValidityStatus::StartOutOfBounds | RangeValidityStatus::EndOutOfBounds
        )
    }
}

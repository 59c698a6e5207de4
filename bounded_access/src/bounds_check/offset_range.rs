// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Signed half-open ranges and their validation and clamping against a sequence length -
//! see [`OffsetRange`].

use super::{index_bounds_check::length_as_offset, result_enums::RangeValidityStatus};
use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Range};

/// A requested half-open range `[start, end)` of signed offsets.
///
/// Requests come from callers that may be computing offsets relative to something else
/// (a cursor, a window, an end position), so both endpoints are signed and neither is
/// required to be in bounds. Nothing about the type enforces `start <= end` either: what
/// happens to an inverted or out-of-bounds request is decided by the access policy, not
/// by the range.
///
/// Use [`IntoOffsetRange`] to get one of these from any Rust range expression over
/// [`isize`].
///
/// # Validation vs clamping
///
/// ```text
/// length = 3, sequence = [a, b, c]
///
/// Offset:    -2  -1   0   1   2   3   4   5
///                   ┌───┬───┬───┐
///                   │ a │ b │ c │
///                   └───┴───┴───┘
///                   ↑           ↑
///                 0 (min)    length (max, valid as an exclusive end)
///
/// -1..2   check_range_is_valid_for_length → StartOutOfBounds
///         clamp_range_to                  → 0..2   ([a, b])
///
///  0..5   check_range_is_valid_for_length → EndOutOfBounds
///         clamp_range_to                  → 0..3   ([a, b, c])
///
///  3..4   check_range_is_valid_for_length → EndOutOfBounds
///         clamp_range_to                  → 3..3   ([])
///
///  1..3   check_range_is_valid_for_length → Valid
///         clamp_range_to                  → 1..3   ([b, c])
/// ```
///
/// [`IntoOffsetRange`]: crate::IntoOffsetRange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    pub start: isize,
    pub end: isize,
}

impl OffsetRange {
    #[must_use]
    pub fn new(start: isize, end: isize) -> Self { Self { start, end } }

    #[must_use]
    pub fn is_inverted(&self) -> bool { self.start > self.end }

    /// Checks that the range is well-formed and lies entirely inside `[0, length]`.
    ///
    /// The end may equal `length` since the range is exclusive. An inverted range is
    /// reported as [`RangeValidityStatus::Inverted`] even when it is also out of bounds.
    #[must_use]
    pub fn check_range_is_valid_for_length(&self, length: usize) -> RangeValidityStatus {
        let max = length_as_offset(length);

        // Check for inverted ranges (start > end).
        if self.is_inverted() {
            return RangeValidityStatus::Inverted;
        }

        if self.start < 0 || self.start > max {
            return RangeValidityStatus::StartOutOfBounds;
        }

        if self.end < 0 || self.end > max {
            return RangeValidityStatus::EndOutOfBounds;
        }

        RangeValidityStatus::Valid
    }

    /// Clamps both endpoints into `[0, length]` and returns the resulting `usize` range.
    ///
    /// When clamping leaves nothing (the clamped start is at or after the clamped end),
    /// the result is the empty range at the clamped start. This also covers inverted
    /// ranges, so callers that must reject those have to check [`is_inverted()`] first.
    ///
    /// [`is_inverted()`]: Self::is_inverted
    #[must_use]
    pub fn clamp_range_to(&self, length: usize) -> Range<usize> {
        let max = length_as_offset(length);
        let clamped_start = self.start.clamp(0, max).unsigned_abs();
        let clamped_end = self.end.clamp(0, max).unsigned_abs();

        if clamped_start >= clamped_end {
            clamped_start..clamped_start // Empty range.
        } else {
            clamped_start..clamped_end
        }
    }

    /// Exact conversion to a `usize` range, only for [`RangeValidityStatus::Valid`]
    /// ranges.
    #[must_use]
    pub fn to_index_range(&self, length: usize) -> Option<Range<usize>> {
        match self.check_range_is_valid_for_length(length) {
            RangeValidityStatus::Valid => {
                Some(self.start.unsigned_abs()..self.end.unsigned_abs())
            }
            RangeValidityStatus::Inverted
            | RangeValidityStatus::StartOutOfBounds
            | RangeValidityStatus::EndOutOfBounds => None,
        }
    }
}

impl From<Range<isize>> for OffsetRange {
    fn from(range: Range<isize>) -> Self { Self::new(range.start, range.end) }
}

impl Display for OffsetRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}..{}", self.start, self.end)
    }
}


#[cfg(test)]
mod tests_range_clamp {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_clamp_normal_cases() {
        let length = 10;

        assert_eq!(
            OffsetRange::new(2, 7).clamp_range_to(length),
            2..7,
            "Normal range should remain unchanged"
        );
        assert_eq!(
            OffsetRange::new(0, 10).clamp_range_to(length),
            0..10,
            "Full content range should remain unchanged"
        );
    }

    #[test]
    fn test_range_clamp_beyond_bounds() {
        let length = 10;

        assert_eq!(OffsetRange::new(5, 15).clamp_range_to(length), 5..10);
        assert_eq!(OffsetRange::new(-4, 3).clamp_range_to(length), 0..3);
        assert_eq!(OffsetRange::new(-4, 40).clamp_range_to(length), 0..10);
        assert_eq!(
            OffsetRange::new(20, 30).clamp_range_to(length),
            10..10,
            "Range past the end should become empty at the end"
        );
        assert_eq!(
            OffsetRange::new(-9, -2).clamp_range_to(length),
            0..0,
            "Range before the start should become empty at the start"
        );
    }

    #[test]
    fn test_inverted_range_clamping() {
        assert_eq!(OffsetRange::new(8, 3).clamp_range_to(10), 8..8);
    }

    #[test]
    fn test_zero_length_content() {
        assert_eq!(OffsetRange::new(0, 5).clamp_range_to(0), 0..0);
        assert_eq!(OffsetRange::new(-5, 5).clamp_range_to(0), 0..0);
    }

    #[test]
    fn test_display() {
        assert_eq!(OffsetRange::new(-1, 2).to_string(), "-1..2");
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Signed single-index bounds checking - see [`check_index_bounds()`].

use super::result_enums::IndexBoundsResult;

/// Converts a sequence length into the signed offset space used by ranges and indices.
///
/// Lengths above [`isize::MAX`] (only possible for zero-sized element types) saturate.
/// Every signed offset is still compared correctly against such a length, since no
/// [`isize`] can exceed [`isize::MAX`].
#[must_use]
pub fn length_as_offset(length: usize) -> isize {
    isize::try_from(length).unwrap_or(isize::MAX)
}

/// Checks a signed `index` against `[0, length)`.
///
/// ```text
/// length = 3
///
///   Underflowed  │      Within      │ Overflowed
///  ───────┬──────┼─────┬─────┬──────┼─────┬─────
///  index: │  -1  │  0  │  1  │  2   │  3  │  4
/// ```
#[must_use]
pub fn check_index_bounds(index: isize, length: usize) -> IndexBoundsResult {
    if index < 0 {
        IndexBoundsResult::Underflowed
    } else if index >= length_as_offset(length) {
        IndexBoundsResult::Overflowed
    } else {
        IndexBoundsResult::Within
    }
}

/// Returns the `usize` position for `index` only when it refers to an existing element.
#[must_use]
pub fn to_element_index(index: isize, length: usize) -> Option<usize> {
    match check_index_bounds(index, length) {
        IndexBoundsResult::Within => usize::try_from(index).ok(),
        IndexBoundsResult::Underflowed | IndexBoundsResult::Overflowed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // No `pretty_assertions::assert_eq` here, it clashes with the one `test_case` expands `=>` into.
    use test_case::test_case;

    #[test_case(-5, 3 => IndexBoundsResult::Underflowed ; "far below zero")]
    #[test_case(-1, 3 => IndexBoundsResult::Underflowed ; "just below zero")]
    #[test_case(0, 3 => IndexBoundsResult::Within ; "first element")]
    #[test_case(2, 3 => IndexBoundsResult::Within ; "last element")]
    #[test_case(3, 3 => IndexBoundsResult::Overflowed ; "one past the end")]
    #[test_case(0, 0 => IndexBoundsResult::Overflowed ; "empty sequence")]
    fn test_check_index_bounds(index: isize, length: usize) -> IndexBoundsResult {
        check_index_bounds(index, length)
    }

    #[test]
    fn test_to_element_index() {
        assert_eq!(to_element_index(1, 3), Some(1));
        assert_eq!(to_element_index(-1, 3), None);
        assert_eq!(to_element_index(3, 3), None);
    }

    #[test]
    fn test_length_as_offset_saturates() {
        assert_eq!(length_as_offset(7), 7);
        assert_eq!(length_as_offset(usize::MAX), isize::MAX);
    }
}

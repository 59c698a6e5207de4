// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::AccessPolicy;
use miette::Diagnostic;

/// Failures surfaced by [`BoundedAccessor`] operations.
///
/// Absence is not an error. A [`Safe`] access that misses returns [`None`] (or
/// [`AccessResult::Absent`]), never one of these variants.
///
/// There are two failure classes, and they are kept apart on purpose:
/// - Bounds violations ([`OutOfRange`], [`IndexOutOfRange`]) only come from [`Strict`]
///   access. Slicing past the end is a legitimate request that the other policies
///   degrade gracefully.
/// - [`MalformedRange`] (`start > end`) is a caller logic defect and is reported under
///   every policy, so that clamping or absence can never hide it.
///
/// [`BoundedAccessor`]: crate::BoundedAccessor
/// [`AccessResult::Absent`]: crate::AccessResult::Absent
/// [`Safe`]: AccessPolicy::Safe
/// [`Strict`]: AccessPolicy::Strict
/// [`OutOfRange`]: AccessError::OutOfRange
/// [`IndexOutOfRange`]: AccessError::IndexOutOfRange
/// [`MalformedRange`]: AccessError::MalformedRange
#[derive(thiserror::Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("range {start}..{end} is out of range for a sequence of length {length}")]
    #[diagnostic(
        code(bounded_access::out_of_range),
        help("Use the truncating policy to clamp, or the safe policy to get nothing back")
    )]
    OutOfRange {
        start: isize,
        end: isize,
        length: usize,
    },

    #[error("index {index} is out of range for a sequence of length {length}")]
    #[diagnostic(
        code(bounded_access::out_of_range),
        help("Use the safe policy to get nothing back instead of an error")
    )]
    IndexOutOfRange { index: isize, length: usize },

    #[error("range {start}..{end} is malformed: start is greater than end")]
    #[diagnostic(
        code(bounded_access::malformed_range),
        help("This is a caller logic error; no access policy accepts a reversed range")
    )]
    MalformedRange { start: isize, end: isize },

    #[error("the {policy} policy does not apply to single element access")]
    #[diagnostic(
        code(bounded_access::unsupported_policy),
        help("Single elements can only be read with the strict or safe policy")
    )]
    UnsupportedPolicy { policy: AccessPolicy },
}

impl AccessError {
    /// True for both range and single index bounds violations.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            AccessError::OutOfRange { .. } | AccessError::IndexOutOfRange { .. }
        )
    }

    #[must_use]
    pub fn is_malformed_range(&self) -> bool {
        matches!(self, AccessError::MalformedRange { .. })
    }
}

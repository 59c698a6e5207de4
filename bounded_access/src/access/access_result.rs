// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

/// What a policy-driven access produced. Failures travel separately, as the `Err` side
/// of the [`Result`] returned by [`slice_with_policy()`] and [`element_with_policy()`].
///
/// Serializes with an `outcome` tag and a `value` payload:
///
/// ```
/// use bounded_access::{AccessPolicy, BoundedAccessor};
///
/// let items = [1, 2, 3];
/// let result = items.slice_with_policy(1..3, AccessPolicy::Safe).unwrap();
/// assert_eq!(
///     serde_json::to_string(&result).unwrap(),
///     r#"{"outcome":"subsequence","value":[2,3]}"#
/// );
/// ```
///
/// [`slice_with_policy()`]: crate::BoundedAccessor::slice_with_policy
/// [`element_with_policy()`]: crate::BoundedAccessor::element_with_policy
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum AccessResult<'a, T> {
    /// A contiguous, order-preserving subrange of the original sequence. May be empty.
    Subsequence(&'a [T]),
    Element(&'a T),
    /// The access was out of bounds under the [`Safe`](crate::AccessPolicy::Safe)
    /// policy.
    Absent,
}

// Manual impls so that `T` itself does not have to be `Clone` / `Copy`.
impl<T> Clone for AccessResult<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for AccessResult<'_, T> {}

impl<'a, T> AccessResult<'a, T> {
    #[must_use]
    pub fn is_absent(&self) -> bool { matches!(self, AccessResult::Absent) }

    #[must_use]
    pub fn as_subsequence(&self) -> Option<&'a [T]> {
        match *self {
            AccessResult::Subsequence(items) => Some(items),
            AccessResult::Element(_) | AccessResult::Absent => None,
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&'a T> {
        match *self {
            AccessResult::Element(item) => Some(item),
            AccessResult::Subsequence(_) | AccessResult::Absent => None,
        }
    }
}

impl<'a, T> From<Option<&'a [T]>> for AccessResult<'a, T> {
    fn from(maybe_items: Option<&'a [T]>) -> Self {
        maybe_items.map_or(AccessResult::Absent, AccessResult::Subsequence)
    }
}

impl<'a, T> From<Option<&'a T>> for AccessResult<'a, T> {
    fn from(maybe_item: Option<&'a T>) -> Self {
        maybe_item.map_or(AccessResult::Absent, AccessResult::Element)
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checking vocabulary for signed indices and ranges over a sequence of a known
//! length.
//!
//! Everything here is a pure function of `(index or range, length)`. The [`access`]
//! module builds the three access policies on top of these pieces.
//!
//! | Item                       | File                       | Key Question                                  |
//! |----------------------------|----------------------------|-----------------------------------------------|
//! | [`check_index_bounds()`]   | [`index_bounds_check`]     | "Is there an element at this signed index?"   |
//! | [`OffsetRange`]            | [`offset_range`]           | "Is this range valid? What does it clamp to?" |
//! | [`IntoOffsetRange`]        | [`range_convert_ext`]      | "Which half-open range does `a..=b` mean?"    |
//! | [`IndexBoundsResult`], [`RangeValidityStatus`] | [`result_enums`] | "Why is this access out of bounds?" |
//!
//! ## Interval Notation
//!
//! | Notation | Meaning                          | Example   | Elements Included |
//! |----------|----------------------------------|-----------|-------------------|
//! | `[a, b]` | Both endpoints included (closed) | `[0, 3]`  | 0, 1, 2, 3        |
//! | `[a, b)` | Start included, end excluded     | `[0, 3)`  | 0, 1, 2           |
//!
//! - Element access checks an index against `[0, length)`.
//! - Range access checks both endpoints against `[0, length]`, since an exclusive end
//!   may sit one past the last element.
//!
//! [`access`]: mod@crate::access

// Attach.
pub mod index_bounds_check;
pub mod offset_range;
pub mod range_convert_ext;
pub mod result_enums;

// Re-export.
pub use index_bounds_check::*;
pub use offset_range::*;
pub use range_convert_ext::*;
pub use result_enums::*;

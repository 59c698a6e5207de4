// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # bounded_access
//!
//! Bounds-safe slicing and indexing for sequences, with three explicit policies for what
//! happens when a request reaches outside of the sequence:
//!
//! | Policy       | Out of bounds                         | `start > end`      |
//! |--------------|---------------------------------------|--------------------|
//! | `Strict`     | error (`OutOfRange`)                  | `MalformedRange`   |
//! | `Truncating` | clamped to `[0, len]`, maybe empty    | `MalformedRange`   |
//! | `Safe`       | absent (`None`)                       | `MalformedRange`   |
//!
//! ```
//! use bounded_access::BoundedAccessor;
//!
//! let a = [1, 2, 3];
//! assert_eq!(a.slice_truncating(0..5), Ok(&[1, 2, 3][..]));
//! assert_eq!(a.slice_truncating(-1..2), Ok(&[1, 2][..]));
//! assert_eq!(a.slice_truncating(3..4), Ok(&[][..]));
//! assert_eq!(a.slice_safe(0..5), Ok(None));
//! assert_eq!(a.slice_safe(1..3), Ok(Some(&[2, 3][..])));
//! assert_eq!(a.element_safe(3), None);
//! assert_eq!(a.element_safe(0), Some(&1));
//! ```
//!
//! Inverted ranges are never quietly turned into an empty result or absence. They are a
//! caller logic error and surface as [`AccessError::MalformedRange`] under every policy.
//!
//! The library does no I/O and no logging. The `bslice` binary wraps it in a small CLI
//! (see [`cli`]), and that is where logging gets set up (see [`log`]).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod access;
pub mod bounds_check;
pub mod cli;
pub mod log;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use access::*;
pub use bounds_check::*;

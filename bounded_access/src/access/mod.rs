// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three access policies (fail fast, truncate, safe) for slicing and indexing
//! sequences - see [`BoundedAccessor`].
//!
//! | Item              | File                  | Key Question                                |
//! |-------------------|-----------------------|---------------------------------------------|
//! | [`AccessPolicy`]  | [`access_policy`]     | "What should happen when I go out of bounds?" |
//! | [`BoundedAccessor`] | [`bounded_accessor`] | "Give me this range/index under that policy." |
//! | [`AccessResult`]  | [`access_result`]     | "What came back: elements, or nothing?"     |
//! | [`AccessError`]   | [`access_error`]      | "Why did it fail?"                          |

// Attach.
pub mod access_error;
pub mod access_policy;
pub mod access_result;
pub mod bounded_accessor;

// Re-export.
pub use access_error::*;
pub use access_policy::*;
pub use access_result::*;
pub use bounded_accessor::*;

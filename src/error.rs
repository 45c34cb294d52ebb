// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types returned by the strict (`try_*`) API.
//!
//! The lenient API never fails: invalid field values are ignored and
//! resolution saturates. These errors only surface through the `try_*`
//! counterparts.

use std::fmt;
use thiserror::Error;

/// Result alias for fallible `moment` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A validated field of a [`Point`](crate::Point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        };
        f.write_str(name)
    }
}

/// Errors raised by the strict API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field value outside `0..max`.
    #[error("{field} out of range: {value} (expected 0..{max})")]
    OutOfRange { field: Field, value: i64, max: i64 },

    /// More positional values than hour, minute, second and nanosecond.
    #[error("too many time-of-day arguments: got {count}, at most 4 allowed")]
    TooManyArguments { count: usize },

    /// The resolved instant falls outside the range chrono can represent.
    #[error("resolved instant is outside the representable date-time range")]
    Unrepresentable,
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moment
//!
//! Time-of-day values decoupled from any calendar date, and durations
//! anchored to them. Define a recurring daily event once ("09:30 for two
//! hours") and resolve it on any date to get absolute timestamps.
//!
//! # Core types
//!
//! - [`Point`] — hour, minute, second and nanosecond in a [`Zone`], no date.
//! - [`PointConfig`] — named-field description of a [`Point`].
//! - [`Span`] — a signed length anchored to a [`Point`].
//! - [`Occurrence`] — a [`Span`] resolved on one day.
//! - [`Zone`] — local, UTC, fixed-offset or IANA zone reference.
//! - [`CalendarDay`] — anything a point can be resolved on
//!   (`NaiveDate`, `NaiveDateTime`, `DateTime<Tz>`).
//!
//! # Lenient and strict API
//!
//! The plain operations never fail: out-of-range fields are ignored,
//! a `None` zone is ignored, and out-of-range instants saturate. Each has a
//! `try_*` counterpart returning [`Result`] with an [`Error`].
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use moment::{Point, Span, Zone};
//!
//! let standup = Span::new(Point::new(9, 30).with_time_zone(Zone::Utc), TimeDelta::minutes(15));
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//! assert_eq!(standup.start(&day).to_rfc3339(), "2024-03-15T09:30:00+00:00");
//! assert_eq!(standup.end(&day).to_rfc3339(), "2024-03-15T09:45:00+00:00");
//! ```

mod calendar;
mod error;
mod occurrence;
mod point;
mod span;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarDay;
pub use error::{Error, Field, Result};
pub use occurrence::Occurrence;
pub use point::{Point, PointConfig, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
pub use span::Span;
pub use zone::Zone;

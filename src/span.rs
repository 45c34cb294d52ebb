// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A length of time anchored to a [`Point`].
//!
//! A [`Span`] describes a recurring daily event such as "09:30 for two
//! hours". The length is a signed [`TimeDelta`] and is never validated: a
//! span may be empty, negative, or longer than a day.
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use moment::{Point, Span, Zone};
//!
//! let night = Span::new(Point::new(22, 0).with_time_zone(Zone::Utc), TimeDelta::hours(4));
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert_eq!(night.start(&day).to_rfc3339(), "2024-01-01T22:00:00+00:00");
//! assert_eq!(night.end(&day).to_rfc3339(), "2024-01-02T02:00:00+00:00");
//! ```

use crate::calendar::CalendarDay;
use crate::error::{Error, Result};
use crate::occurrence::Occurrence;
use crate::point::{saturated, Point};
use chrono::{DateTime, FixedOffset, TimeDelta};
use log::warn;
use qtty::time::TimeUnit;
use qtty::{Quantity, Second, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_SECOND: f64 = 1e9;

/// A duration starting at a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Point,
    length: TimeDelta,
}

impl Span {
    /// Anchor `length` at `start`. The span keeps its own copy of the point.
    pub const fn new(start: Point, length: TimeDelta) -> Self {
        Span { start, length }
    }

    /// Anchor a typed time quantity at `start`.
    ///
    /// The length is rounded to whole nanoseconds and saturates at the
    /// bounds of [`TimeDelta`].
    ///
    /// ```
    /// use chrono::TimeDelta;
    /// use moment::{Point, Span};
    /// use qtty::Hours;
    ///
    /// let span = Span::from_quantity(Point::new(9, 30), Hours::new(1.5));
    /// assert_eq!(span.length(), TimeDelta::minutes(90));
    /// ```
    pub fn from_quantity<U: TimeUnit>(start: Point, length: Quantity<U>) -> Self {
        Span::new(start, delta_from_seconds(length.to::<Second>().value()))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The time of day the span starts at.
    #[inline]
    pub const fn begin(&self) -> Point {
        self.start
    }

    #[inline]
    pub const fn length(&self) -> TimeDelta {
        self.length
    }

    /// The length as a typed time quantity.
    pub fn length_in<U: TimeUnit>(&self) -> Quantity<U> {
        let seconds = self.length.num_seconds() as f64
            + f64::from(self.length.subsec_nanos()) / NANOS_PER_SECOND;
        Seconds::new(seconds).to::<U>()
    }

    // ── resolution ────────────────────────────────────────────────────

    /// Start of the span on `day`; exactly `self.begin().on(day)`.
    pub fn start<D: CalendarDay + ?Sized>(&self, day: &D) -> DateTime<FixedOffset> {
        self.start.on(day)
    }

    /// End of the span on `day`: the start plus the length.
    ///
    /// With a negative length the end precedes the start. Results beyond
    /// chrono's range saturate; [`Span::try_end`] reports them instead.
    pub fn end<D: CalendarDay + ?Sized>(&self, day: &D) -> DateTime<FixedOffset> {
        let start = self.start(day);
        match start.checked_add_signed(self.length) {
            Some(end) => end,
            None => {
                warn!("{self} on {}: end is unrepresentable; saturating", day.calendar_date());
                saturated(self.length < TimeDelta::zero())
            }
        }
    }

    pub fn try_start<D: CalendarDay + ?Sized>(&self, day: &D) -> Result<DateTime<FixedOffset>> {
        self.start.try_on(day)
    }

    pub fn try_end<D: CalendarDay + ?Sized>(&self, day: &D) -> Result<DateTime<FixedOffset>> {
        self.try_start(day)?
            .checked_add_signed(self.length)
            .ok_or(Error::Unrepresentable)
    }

    /// Both endpoints of the span on `day`.
    pub fn on<D: CalendarDay + ?Sized>(&self, day: &D) -> Occurrence {
        Occurrence::new(self.start(day), self.end(day))
    }
}

fn delta_from_seconds(seconds: f64) -> TimeDelta {
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as i64;
    let bound = if seconds < 0.0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    };
    TimeDelta::try_seconds(whole as i64)
        .and_then(|secs| secs.checked_add(&TimeDelta::nanoseconds(nanos)))
        .unwrap_or(bound)
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.start, self.length)
    }
}

// Serde support
//
// The length travels as whole seconds plus a signed sub-second part,
// matching `TimeDelta::num_seconds` / `TimeDelta::subsec_nanos`.
#[cfg(feature = "serde")]
impl Serialize for Span {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Span", 3)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("length_seconds", &self.length.num_seconds())?;
        s.serialize_field("length_nanos", &self.length.subsec_nanos())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Span {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: Point,
            length_seconds: i64,
            #[serde(default)]
            length_nanos: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let length = TimeDelta::try_seconds(raw.length_seconds)
            .and_then(|secs| secs.checked_add(&TimeDelta::nanoseconds(i64::from(raw.length_nanos))))
            .ok_or_else(|| serde::de::Error::custom("span length out of range"))?;
        Ok(Span::new(raw.start, length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Zone;
    use chrono::{NaiveDate, TimeZone, Utc};
    use qtty::{Hour, Hours, Minute, Minutes};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(h: i64, m: i64) -> Point {
        Point::new(h, m).with_time_zone(Zone::Utc)
    }

    #[test]
    fn crossing_midnight() {
        let span = Span::new(utc(22, 0), TimeDelta::hours(4));
        let d = day(2024, 1, 1);
        assert_eq!(span.start(&d), Utc.with_ymd_and_hms(2024, 1, 1, 22, 0, 0).unwrap());
        assert_eq!(span.end(&d), Utc.with_ymd_and_hms(2024, 1, 2, 2, 0, 0).unwrap());
    }

    #[test]
    fn start_delegates_to_point() {
        let point = Point::from_args(&[6, 15, 30, 250]).with_time_zone(chrono_tz::Europe::Berlin);
        let span = Span::new(point, TimeDelta::minutes(45));
        let d = day(2024, 10, 27);
        assert_eq!(span.start(&d), point.on(&d));
        assert_eq!(span.begin(), point);
    }

    #[test]
    fn negative_length_ends_before_start() {
        let span = Span::new(utc(1, 0), TimeDelta::hours(-3));
        let d = day(2024, 5, 10);
        let occurrence = span.on(&d);
        assert!(occurrence.end < occurrence.start);
        assert_eq!(occurrence.end, Utc.with_ymd_and_hms(2024, 5, 9, 22, 0, 0).unwrap());
        assert_eq!(span.end(&d) - span.start(&d), TimeDelta::hours(-3));
    }

    #[test]
    fn multi_day_and_zero_lengths() {
        let d = day(2024, 2, 28);
        let long = Span::new(utc(12, 0), TimeDelta::days(3) + TimeDelta::minutes(1));
        assert_eq!(long.end(&d), Utc.with_ymd_and_hms(2024, 3, 2, 12, 1, 0).unwrap());

        let empty = Span::new(utc(12, 0), TimeDelta::zero());
        assert_eq!(empty.end(&d), empty.start(&d));
    }

    #[test]
    fn span_keeps_its_own_copy_of_the_point() {
        let mut point = utc(9, 0);
        let span = Span::new(point, TimeDelta::hours(1));
        point.set_hour(17);
        assert_eq!(span.begin().hour(), 9);
    }

    #[test]
    fn length_from_and_to_quantities() {
        let span = Span::from_quantity(utc(8, 0), Hours::new(2.5));
        assert_eq!(span.length(), TimeDelta::minutes(150));
        assert!((span.length_in::<Minute>() - Minutes::new(150.0)).abs() < Minutes::new(1e-9));
        assert!((span.length_in::<Hour>() - Hours::new(2.5)).abs() < Hours::new(1e-12));

        let back = Span::from_quantity(utc(8, 0), Minutes::new(-0.5));
        assert_eq!(back.length(), TimeDelta::seconds(-30));
    }

    #[test]
    fn subsecond_quantity_rounds_to_nanoseconds() {
        let span = Span::from_quantity(utc(0, 0), Seconds::new(1.25));
        assert_eq!(span.length(), TimeDelta::milliseconds(1250));
    }

    #[test]
    fn end_saturates_and_try_end_reports() {
        let span = Span::new(utc(23, 0), TimeDelta::days(2));
        assert_eq!(span.try_end(&NaiveDate::MAX), Err(Error::Unrepresentable));
        assert_eq!(span.end(&NaiveDate::MAX), DateTime::<Utc>::MAX_UTC);
        assert!(span.try_start(&NaiveDate::MAX).is_ok());
    }

    #[test]
    fn display() {
        let span = Span::new(utc(22, 0), TimeDelta::hours(4));
        let text = span.to_string();
        assert!(text.starts_with("22:00:00 UTC for P"), "{text}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let span = Span::new(utc(22, 0), TimeDelta::hours(-4) - TimeDelta::nanoseconds(5));
        let json = serde_json::to_string(&span).unwrap();
        assert!(json.contains(r#""length_seconds":-14400"#));
        assert!(json.contains(r#""length_nanos":-5"#));
        assert_eq!(serde_json::from_str::<Span>(&json).unwrap(), span);
    }
}

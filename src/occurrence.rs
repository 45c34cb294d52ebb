// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A span resolved on one calendar day.

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use std::fmt;

/// Concrete start and end instants of a [`Span`](crate::Span) on a day.
///
/// The endpoints are kept as resolved, so `end` precedes `start` when the
/// span has a negative length. Use [`Occurrence::ordered`] to get a
/// canonical interval.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use moment::{Point, Span, Zone};
///
/// let span = Span::new(Point::new(9, 30).with_time_zone(Zone::Utc), TimeDelta::hours(2));
/// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let occurrence = span.on(&day);
/// assert_eq!(occurrence.duration(), TimeDelta::hours(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Occurrence {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Occurrence { start, end }
    }

    /// `end - start`; negative for reversed occurrences.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the end comes before the start.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// The same occurrence with its endpoints in chronological order.
    pub fn ordered(&self) -> Self {
        if self.is_reversed() {
            Occurrence::new(self.end, self.start)
        } else {
            *self
        }
    }

    /// Whether `instant` lies in the ordered half-open range `[start, end)`.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.fixed_offset();
        let ordered = self.ordered();
        ordered.start <= instant && instant < ordered.end
    }

    /// Overlap of the two ordered occurrences.
    ///
    /// Ranges are half-open: occurrences that only touch do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (a, b) = (self.ordered(), other.ordered());
        let start = a.start.max(b.start);
        let end = a.end.min(b.end);

        if start < end {
            Some(Occurrence::new(start, end))
        } else {
            None
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

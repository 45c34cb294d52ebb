// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Source adapter for the calendar date a point is resolved on.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that names a calendar day.
///
/// Only year, month and day are taken; the time of day of a date-time is
/// ignored. For a [`DateTime`] the date is the one observed in its own zone.
pub trait CalendarDay {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

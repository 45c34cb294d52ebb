// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date-less time of day.
//!
//! A [`Point`] is an hour, minute, second and nanosecond in a [`Zone`],
//! without a calendar date. It becomes an absolute instant only when
//! resolved on a day with [`Point::on`].
//!
//! # Validation
//!
//! Hour, minute and second are always kept in range. The lenient setters
//! ([`Point::set_hour`], ...) ignore out-of-range values and keep the
//! previous field; the strict twins ([`Point::try_set_hour`], ...) report
//! them as [`Error::OutOfRange`]. Both mutate the receiver in place.
//!
//! ```
//! use moment::Point;
//!
//! let mut p = Point::new(9, 30);
//! p.set_hour(24); // ignored
//! assert_eq!(p.hour(), 9);
//! assert!(p.try_set_minute(-1).is_err());
//! assert_eq!(p.minute(), 30);
//! ```

use crate::calendar::CalendarDay;
use crate::error::{Error, Field, Result};
use crate::zone::Zone;
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeDelta, Utc};
use log::{debug, warn};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Number of hours in a day.
pub const HOURS_PER_DAY: i64 = 24;
/// Number of minutes in an hour.
pub const MINUTES_PER_HOUR: i64 = 60;
/// Number of seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Largest number of positional values accepted by [`Point::from_args`].
const MAX_ARGS: usize = 4;

/// Named-field description of a [`Point`].
///
/// Every field defaults to zero; a missing zone means the host's local zone.
///
/// ```
/// use moment::{Point, PointConfig, Zone};
///
/// let p = Point::from_config(PointConfig {
///     hour: 22,
///     minute: 15,
///     time_zone: Some(Zone::Utc),
///     ..PointConfig::default()
/// });
/// assert_eq!(p.to_string(), "22:15:00 UTC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PointConfig {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
    pub time_zone: Option<Zone>,
}

impl PointConfig {
    /// Positional values in the order hour, minute, second, nanosecond.
    ///
    /// Missing trailing values are zero. Callers check the length first.
    fn from_args(args: &[i64]) -> Self {
        let arg = |i: usize| args.get(i).copied().unwrap_or(0);
        Self {
            hour: arg(0),
            minute: arg(1),
            second: arg(2),
            nanosecond: arg(3),
            time_zone: None,
        }
    }
}

/// A time of day with no date attached.
///
/// `Point::default()` is the zero value: midnight with an unset zone, which
/// resolves in UTC. Every constructor instead starts from the local zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: i64,
    time_zone: Option<Zone>,
}

impl Point {
    // ── constructors ──────────────────────────────────────────────────

    /// Midnight in the host's local zone.
    pub const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
            time_zone: Some(Zone::Local),
        }
    }

    /// `hour:minute` in the local zone. Out-of-range values stay at zero.
    pub fn new(hour: i64, minute: i64) -> Self {
        Self::from_config(PointConfig {
            hour,
            minute,
            ..PointConfig::default()
        })
    }

    /// Build from named fields, ignoring out-of-range values.
    pub fn from_config(config: PointConfig) -> Self {
        let mut point = Self::midnight();
        point.set_time_zone(config.time_zone);
        point.set_nanosecond(config.nanosecond);
        point
            .set_second(config.second)
            .set_minute(config.minute)
            .set_hour(config.hour);
        point
    }

    /// Build from named fields, failing on the first out-of-range value.
    pub fn try_from_config(config: PointConfig) -> Result<Self> {
        let mut point = Self::midnight();
        point.set_time_zone(config.time_zone);
        point.set_nanosecond(config.nanosecond);
        point
            .try_set_hour(config.hour)?
            .try_set_minute(config.minute)?
            .try_set_second(config.second)?;
        Ok(point)
    }

    /// Build from up to four positional values: hour, minute, second and
    /// nanosecond, in that order. Missing values are zero.
    ///
    /// More than four values are all discarded and midnight in the local
    /// zone is returned.
    ///
    /// ```
    /// use moment::Point;
    ///
    /// let p = Point::from_args(&[9, 30]);
    /// assert_eq!((p.hour(), p.minute(), p.second()), (9, 30, 0));
    ///
    /// assert_eq!(Point::from_args(&[1, 2, 3, 4, 5]), Point::midnight());
    /// ```
    pub fn from_args(args: &[i64]) -> Self {
        if args.len() > MAX_ARGS {
            debug!(
                "ignoring {} time-of-day arguments (at most {MAX_ARGS})",
                args.len()
            );
            return Self::midnight();
        }
        Self::from_config(PointConfig::from_args(args))
    }

    /// Strict form of [`Point::from_args`].
    pub fn try_from_args(args: &[i64]) -> Result<Self> {
        if args.len() > MAX_ARGS {
            return Err(Error::TooManyArguments { count: args.len() });
        }
        Self::try_from_config(PointConfig::from_args(args))
    }

    /// Same point in another zone.
    pub fn with_time_zone(mut self, zone: impl Into<Zone>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[inline]
    pub const fn nanosecond(&self) -> i64 {
        self.nanosecond
    }

    /// The configured zone, `None` when unset.
    #[inline]
    pub const fn time_zone(&self) -> Option<Zone> {
        self.time_zone
    }

    // ── setters ───────────────────────────────────────────────────────

    /// Replace the zone. `None` leaves the current zone untouched.
    pub fn set_time_zone(&mut self, zone: impl Into<Option<Zone>>) -> &mut Self {
        if let Some(zone) = zone.into() {
            self.time_zone = Some(zone);
        }
        self
    }

    /// Set the hour if it lies in `0..24`, otherwise keep the current one.
    pub fn set_hour(&mut self, hour: i64) -> &mut Self {
        if let Err(err) = self.try_set_hour(hour) {
            debug!("ignoring invalid value: {err}");
        }
        self
    }

    /// Set the minute if it lies in `0..60`, otherwise keep the current one.
    pub fn set_minute(&mut self, minute: i64) -> &mut Self {
        if let Err(err) = self.try_set_minute(minute) {
            debug!("ignoring invalid value: {err}");
        }
        self
    }

    /// Set the second if it lies in `0..60`, otherwise keep the current one.
    pub fn set_second(&mut self, second: i64) -> &mut Self {
        if let Err(err) = self.try_set_second(second) {
            debug!("ignoring invalid value: {err}");
        }
        self
    }

    /// Set the nanosecond verbatim.
    ///
    /// Values outside `0..1_000_000_000` are accepted and carry into the
    /// neighbouring seconds when the point is resolved.
    pub fn set_nanosecond(&mut self, nanosecond: i64) -> &mut Self {
        self.nanosecond = nanosecond;
        self
    }

    pub fn try_set_hour(&mut self, hour: i64) -> Result<&mut Self> {
        self.hour = checked_field(Field::Hour, hour, HOURS_PER_DAY)?;
        Ok(self)
    }

    pub fn try_set_minute(&mut self, minute: i64) -> Result<&mut Self> {
        self.minute = checked_field(Field::Minute, minute, MINUTES_PER_HOUR)?;
        Ok(self)
    }

    pub fn try_set_second(&mut self, second: i64) -> Result<&mut Self> {
        self.second = checked_field(Field::Second, second, SECONDS_PER_MINUTE)?;
        Ok(self)
    }

    // ── resolution ────────────────────────────────────────────────────

    /// Time elapsed since midnight, nanosecond carry included.
    pub fn offset_from_midnight(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.hour))
            + TimeDelta::minutes(i64::from(self.minute))
            + TimeDelta::seconds(i64::from(self.second))
            + TimeDelta::nanoseconds(self.nanosecond)
    }

    /// The instant this point designates on `day`.
    ///
    /// Only the calendar date of `day` is used. An unset zone resolves in
    /// UTC. See [`Zone::localize`] for daylight-saving transitions.
    ///
    /// Instants beyond chrono's range saturate at the nearest bound; use
    /// [`Point::try_on`] to detect that case.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use moment::{Point, Zone};
    ///
    /// let p = Point::new(9, 30).with_time_zone(Zone::Utc);
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert_eq!(p.on(&day).to_rfc3339(), "2024-03-15T09:30:00+00:00");
    /// ```
    pub fn on<D: CalendarDay + ?Sized>(&self, day: &D) -> DateTime<FixedOffset> {
        match self.try_on(day) {
            Ok(instant) => instant,
            Err(err) => {
                warn!("{self} on {}: {err}; saturating", day.calendar_date());
                saturated(day.calendar_date().year() < 0)
            }
        }
    }

    /// Strict form of [`Point::on`].
    pub fn try_on<D: CalendarDay + ?Sized>(&self, day: &D) -> Result<DateTime<FixedOffset>> {
        let wall = day
            .calendar_date()
            .and_time(NaiveTime::MIN)
            .checked_add_signed(self.offset_from_midnight())
            .ok_or(Error::Unrepresentable)?;
        self.time_zone
            .unwrap_or(Zone::Utc)
            .localize(wall)
            .ok_or(Error::Unrepresentable)
    }
}

fn checked_field(field: Field, value: i64, max: i64) -> Result<u32> {
    if (0..max).contains(&value) {
        Ok(value as u32)
    } else {
        Err(Error::OutOfRange { field, value, max })
    }
}

/// The bound of chrono's range on the given side.
pub(crate) fn saturated(past: bool) -> DateTime<FixedOffset> {
    if past {
        DateTime::<Utc>::MIN_UTC.fixed_offset()
    } else {
        DateTime::<Utc>::MAX_UTC.fixed_offset()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        match &self.time_zone {
            Some(zone) => write!(f, " {zone}"),
            None => f.write_str(" unset"),
        }
    }
}

// Serde support
//
// Deserialisation goes through the strict constructor so that stored
// points cannot smuggle in out-of-range fields.
#[cfg(feature = "serde")]
impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Point", 5)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.serialize_field("second", &self.second)?;
        s.serialize_field("nanosecond", &self.nanosecond)?;
        s.serialize_field("time_zone", &self.time_zone)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            hour: i64,
            #[serde(default)]
            minute: i64,
            #[serde(default)]
            second: i64,
            #[serde(default)]
            nanosecond: i64,
            #[serde(default)]
            time_zone: Option<Zone>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut point = Point::try_from_config(PointConfig {
            hour: raw.hour,
            minute: raw.minute,
            second: raw.second,
            nanosecond: raw.nanosecond,
            time_zone: None,
        })
        .map_err(serde::de::Error::custom)?;
        point.time_zone = raw.time_zone;
        Ok(point)
    }
}

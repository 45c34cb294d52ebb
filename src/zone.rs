// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time zone reference carried by a [`Point`](crate::Point).
//!
//! A [`Zone`] only names a zone; the actual offset rules come from chrono
//! (`Local`, `Utc`, `FixedOffset`) or from the IANA database bundled with
//! `chrono-tz`. Resolving a wall-clock time in a zone always yields a
//! `DateTime<FixedOffset>` so that callers get one concrete type whatever
//! zone the point was configured with.

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use log::trace;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The zone a time of day is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The host's local zone, as reported by [`chrono::Local`].
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset from UTC without daylight-saving rules.
    Fixed(FixedOffset),
    /// An IANA zone from the `chrono-tz` database.
    Named(Tz),
}

impl Zone {
    /// Place a wall-clock time in this zone.
    ///
    /// Ambiguous local times (a backward transition) take the earlier
    /// instant. Local times skipped by a forward transition are read with
    /// the offset in force before the gap, which moves them forward by the
    /// gap length (02:30 on a spring-forward night becomes 03:30).
    ///
    /// Returns `None` only when the instant leaves chrono's range.
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => localize_in(&Local, naive),
            Zone::Utc => localize_in(&Utc, naive),
            Zone::Fixed(offset) => localize_in(offset, naive),
            Zone::Named(tz) => localize_in(tz, naive),
        }
    }

    /// Short label used by `Display`.
    pub fn label(&self) -> String {
        match self {
            Zone::Local => "Local".to_owned(),
            Zone::Utc => "UTC".to_owned(),
            Zone::Fixed(offset) => offset.to_string(),
            Zone::Named(tz) => tz.name().to_owned(),
        }
    }
}

fn localize_in<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.fixed_offset()),
        LocalResult::Ambiguous(earliest, latest) => {
            let (earliest, latest) = (earliest.fixed_offset(), latest.fixed_offset());
            trace!("ambiguous local time {naive}: picking {earliest} over {latest}");
            Some(earliest)
        }
        LocalResult::None => {
            // Offset in force shortly before the skipped interval.
            let probe = naive
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(naive);
            let before = zone.offset_from_utc_datetime(&probe).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
            let shifted = zone.from_utc_datetime(&utc).fixed_offset();
            trace!("local time {naive} skipped by a transition: shifted to {shifted}");
            Some(shifted)
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Utc> for Zone {
    fn from(_: Utc) -> Self {
        Zone::Utc
    }
}

impl From<Local> for Zone {
    fn from(_: Local) -> Self {
        Zone::Local
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Zone::Named(tz)
    }
}

// Serde support
//
// Goes through a plain mirror enum: fixed offsets travel as whole seconds
// east of UTC and IANA zones as their database name.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
enum RawZone {
    Local,
    Utc,
    Fixed(i32),
    Named(String),
}

#[cfg(feature = "serde")]
impl Serialize for Zone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = match self {
            Zone::Local => RawZone::Local,
            Zone::Utc => RawZone::Utc,
            Zone::Fixed(offset) => RawZone::Fixed(offset.local_minus_utc()),
            Zone::Named(tz) => RawZone::Named(tz.name().to_owned()),
        };
        raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawZone::deserialize(deserializer)? {
            RawZone::Local => Ok(Zone::Local),
            RawZone::Utc => Ok(Zone::Utc),
            RawZone::Fixed(seconds) => FixedOffset::east_opt(seconds)
                .map(Zone::Fixed)
                .ok_or_else(|| de::Error::custom(format!("invalid UTC offset: {seconds} s"))),
            RawZone::Named(name) => name
                .parse::<Tz>()
                .map(Zone::Named)
                .map_err(|_| de::Error::custom(format!("unknown time zone `{name}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn utc_and_fixed_keep_wall_clock() {
        let wall = naive(2024, 3, 15, 9, 30);
        let utc = Zone::Utc.localize(wall).unwrap();
        assert_eq!(utc.naive_local(), wall);
        assert_eq!(utc.offset().local_minus_utc(), 0);

        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let fixed = Zone::Fixed(ist).localize(wall).unwrap();
        assert_eq!(fixed.naive_local(), wall);
        assert_eq!(fixed.naive_utc(), naive(2024, 3, 15, 4, 0));
    }

    #[test]
    fn named_zone_applies_dst_offset() {
        let zone = Zone::Named(chrono_tz::Europe::Paris);
        let winter = zone.localize(naive(2024, 1, 10, 12, 0)).unwrap();
        let summer = zone.localize(naive(2024, 7, 10, 12, 0)).unwrap();
        assert_eq!(winter.offset().local_minus_utc(), 3600);
        assert_eq!(summer.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn spring_forward_gap_moves_forward() {
        // 2024-03-10 02:00 EST jumps to 03:00 EDT in New York.
        let zone = Zone::Named(chrono_tz::America::New_York);
        let resolved = zone.localize(naive(2024, 3, 10, 2, 30)).unwrap();
        assert_eq!(resolved.hour(), 3);
        assert_eq!(resolved.minute(), 30);
        assert_eq!(resolved.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(resolved.naive_utc(), naive(2024, 3, 10, 7, 30));
    }

    #[test]
    fn spring_forward_gap_east_of_utc() {
        // 2024-03-31 02:00 CET jumps to 03:00 CEST in Paris.
        let zone = Zone::Named(chrono_tz::Europe::Paris);
        let resolved = zone.localize(naive(2024, 3, 31, 2, 30)).unwrap();
        assert_eq!(resolved.hour(), 3);
        assert_eq!(resolved.minute(), 30);
        assert_eq!(resolved.naive_utc(), naive(2024, 3, 31, 1, 30));
    }

    #[test]
    fn fall_back_overlap_picks_earliest() {
        // 01:30 happens twice in New York on 2024-11-03; EDT comes first.
        let zone = Zone::Named(chrono_tz::America::New_York);
        let resolved = zone.localize(naive(2024, 11, 3, 1, 30)).unwrap();
        assert_eq!(resolved.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(resolved.naive_utc(), naive(2024, 11, 3, 5, 30));
    }

    #[test]
    fn labels() {
        assert_eq!(Zone::Utc.to_string(), "UTC");
        assert_eq!(Zone::Local.to_string(), "Local");
        assert_eq!(
            Zone::Fixed(FixedOffset::west_opt(3 * 3600).unwrap()).to_string(),
            "-03:00"
        );
        assert_eq!(Zone::from(chrono_tz::Asia::Tokyo).to_string(), "Asia/Tokyo");
    }

    #[test]
    fn conversions_from_chrono_types() {
        assert_eq!(Zone::from(Utc), Zone::Utc);
        assert_eq!(Zone::from(Local), Zone::Local);
        let offset = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(Zone::from(offset), Zone::Fixed(offset));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_named_and_fixed() {
        let named = Zone::Named(chrono_tz::Europe::Madrid);
        let json = serde_json::to_string(&named).unwrap();
        assert_eq!(json, r#"{"Named":"Europe/Madrid"}"#);
        assert_eq!(serde_json::from_str::<Zone>(&json).unwrap(), named);

        let fixed = Zone::Fixed(FixedOffset::east_opt(-7200).unwrap());
        let json = serde_json::to_string(&fixed).unwrap();
        assert_eq!(json, r#"{"Fixed":-7200}"#);
        assert_eq!(serde_json::from_str::<Zone>(&json).unwrap(), fixed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_unknown_zone() {
        let err = serde_json::from_str::<Zone>(r#"{"Named":"Mars/Olympus"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown time zone"));
    }
}

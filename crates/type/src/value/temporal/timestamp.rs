// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use chrono_tz::Tz;

use super::parse::parse_timestamp;
use crate::Error;

/// The zone a [`Timestamp`] was expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
	Utc,
	Fixed(FixedOffset),
	Named(Tz),
}

/// A zoned point in time.
///
/// The instant is always held in UTC; the zone is carried alongside so that
/// derived timestamps can be re-expressed in the zone of their input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
	instant: DateTime<Utc>,
	zone: Zone,
}

impl Timestamp {
	pub fn new(instant: DateTime<Utc>, zone: Zone) -> Self {
		Self {
			instant,
			zone,
		}
	}

	pub fn utc(instant: DateTime<Utc>) -> Self {
		Self::new(instant, Zone::Utc)
	}

	/// Builds a UTC timestamp from calendar fields. Returns `None` for
	/// out-of-range fields.
	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
		Some(Self::utc(naive.and_utc()))
	}

	pub fn instant(&self) -> DateTime<Utc> {
		self.instant
	}

	pub fn zone(&self) -> Zone {
		self.zone
	}

	/// Returns a timestamp for `instant` expressed in this timestamp's zone.
	pub fn with_instant(&self, instant: DateTime<Utc>) -> Self {
		Self::new(instant, self.zone)
	}

	/// The instant as seen in this timestamp's zone.
	pub fn local(&self) -> DateTime<FixedOffset> {
		match self.zone {
			Zone::Utc => self.instant.fixed_offset(),
			Zone::Fixed(offset) => self.instant.with_timezone(&offset),
			Zone::Named(tz) => self.instant.with_timezone(&tz).fixed_offset(),
		}
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.zone {
			Zone::Utc => f.write_str(&self.instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			Zone::Fixed(_) => f.write_str(&self.local().to_rfc3339_opts(SecondsFormat::AutoSi, false)),
			Zone::Named(tz) => {
				write!(f, "{}[{}]", self.local().to_rfc3339_opts(SecondsFormat::AutoSi, false), tz.name())
			}
		}
	}
}

impl FromStr for Timestamp {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_timestamp(s)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Calendar-aware time bucketing.
//!
//! Truncation happens on the UTC calendar fields of the instant. Sub-day units
//! bucket by the numeric value of their field (minute 47 with a slice of 15
//! lands on minute 45), not by time elapsed since an epoch. The result is
//! re-expressed in the zone of the input timestamp.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use relwin_type::{DurationUnit, Error, Result, Timestamp};
use tracing::instrument;

const FUNCTION: &str = "time_slice";

/// Truncates `timestamp` to the start of its `slice_size`-wide `unit` bucket,
/// or to the exclusive end of that bucket when `end_of_slice` is set.
#[instrument(name = "timeslice::time_slice", level = "trace")]
pub fn time_slice(timestamp: &Timestamp, unit: DurationUnit, slice_size: u32, end_of_slice: bool) -> Result<Timestamp> {
	if slice_size == 0 {
		return Err(Error::invalid_argument(FUNCTION, "slice size must be at least 1"));
	}

	let start = truncate(timestamp.instant().naive_utc(), unit, slice_size)?;
	let result = if end_of_slice {
		advance(start, unit, slice_size)?
	} else {
		start
	};

	Ok(timestamp.with_instant(result.and_utc()))
}

/// Validates a host-supplied slice size.
pub fn slice_size(size: i64) -> Result<u32> {
	if size < 1 {
		return Err(Error::invalid_argument(FUNCTION, format!("slice size must be at least 1, got {}", size)));
	}
	u32::try_from(size).map_err(|_| Error::invalid_argument(FUNCTION, format!("slice size {} is too large", size)))
}

fn truncate(dt: NaiveDateTime, unit: DurationUnit, size: u32) -> Result<NaiveDateTime> {
	let date = dt.date();
	let truncated = match unit {
		DurationUnit::Seconds => date.and_hms_opt(dt.hour(), dt.minute(), floor(dt.second(), size)),
		DurationUnit::Minutes => date.and_hms_opt(dt.hour(), floor(dt.minute(), size), 0),
		DurationUnit::Hours => date.and_hms_opt(floor(dt.hour(), size), 0, 0),
		DurationUnit::Days => date.and_hms_opt(0, 0, 0),
		DurationUnit::Weeks => date
			.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
			.and_then(|monday| monday.and_hms_opt(0, 0, 0)),
		DurationUnit::Months => first_of(date.year(), date.month()),
		DurationUnit::Quarters => first_of(date.year(), ((date.month() - 1) / 3) * 3 + 1),
		DurationUnit::Years => first_of(date.year(), 1),
	};

	truncated.ok_or_else(|| out_of_range(unit))
}

fn floor(field: u32, size: u32) -> u32 {
	(field / size) * size
}

fn first_of(year: i32, month: u32) -> Option<NaiveDateTime> {
	NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

fn advance(start: NaiveDateTime, unit: DurationUnit, size: u32) -> Result<NaiveDateTime> {
	let n = i64::from(size);
	let advanced = match unit {
		DurationUnit::Seconds => TimeDelta::try_seconds(n).and_then(|d| start.checked_add_signed(d)),
		DurationUnit::Minutes => TimeDelta::try_minutes(n).and_then(|d| start.checked_add_signed(d)),
		DurationUnit::Hours => TimeDelta::try_hours(n).and_then(|d| start.checked_add_signed(d)),
		DurationUnit::Days => TimeDelta::try_days(n).and_then(|d| start.checked_add_signed(d)),
		DurationUnit::Weeks => TimeDelta::try_weeks(n).and_then(|d| start.checked_add_signed(d)),
		DurationUnit::Months | DurationUnit::Quarters | DurationUnit::Years => unit
			.months()
			.and_then(|months| size.checked_mul(months))
			.and_then(|months| start.checked_add_months(Months::new(months))),
	};

	advanced.ok_or_else(|| out_of_range(unit))
}

fn out_of_range(unit: DurationUnit) -> Error {
	Error::invalid_argument(FUNCTION, format!("{} slice is outside the supported date range", unit))
}

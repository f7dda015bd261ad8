// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
	Error,
	value::temporal::{Timestamp, Zone},
};

/// Parses an RFC 3339 timestamp, optionally followed by a bracketed zone
/// name: `2024-03-15T10:47:33Z`, `2024-03-15T10:47:33+05:30` or
/// `2024-03-15T10:47:33+01:00[Europe/Paris]`.
///
/// A trailing `Z` yields [`Zone::Utc`], an explicit offset yields
/// [`Zone::Fixed`] and a bracketed name yields [`Zone::Named`].
pub fn parse_timestamp(text: &str) -> Result<Timestamp, Error> {
	let text = text.trim();

	let (datetime_text, zone_name) = match text.strip_suffix(']').and_then(|t| t.split_once('[')) {
		Some((datetime, name)) => (datetime, Some(name)),
		None => (text, None),
	};

	// lowercase 'z' is accepted by RFC 3339 parsers but not by the host
	if datetime_text.ends_with('z') {
		return Err(invalid(text, "UTC designator must be an uppercase 'Z'"));
	}

	let parsed = DateTime::parse_from_rfc3339(datetime_text).map_err(|e| invalid(text, &e.to_string()))?;
	let instant = parsed.with_timezone(&Utc);

	let zone = match zone_name {
		Some(name) => {
			let tz: Tz = name.parse().map_err(|_| invalid(text, &format!("unknown time zone '{}'", name)))?;
			Zone::Named(tz)
		}
		None if datetime_text.ends_with('Z') => Zone::Utc,
		None => Zone::Fixed(*parsed.offset()),
	};

	Ok(Timestamp::new(instant, zone))
}

fn invalid(text: &str, reason: &str) -> Error {
	Error::InvalidTimestamp {
		text: text.to_string(),
		reason: reason.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_utc() {
		let ts = parse_timestamp("2024-03-15T10:47:33Z").unwrap();
		assert_eq!(ts.zone(), Zone::Utc);
		assert_eq!(ts, Timestamp::from_ymd_hms(2024, 3, 15, 10, 47, 33).unwrap());
	}

	#[test]
	fn test_parse_fractional_seconds() {
		let ts = parse_timestamp("2024-03-15T10:47:33.250Z").unwrap();
		assert_eq!(ts.to_string(), "2024-03-15T10:47:33.250Z");
	}

	#[test]
	fn test_parse_zero_offset_is_fixed() {
		let ts = parse_timestamp("2024-03-15T10:47:33+00:00").unwrap();
		assert!(matches!(ts.zone(), Zone::Fixed(_)));
		assert_eq!(ts.to_string(), "2024-03-15T10:47:33+00:00");
	}

	#[test]
	fn test_parse_lowercase_z_rejected() {
		let err = parse_timestamp("2024-03-15T10:47:33z").unwrap_err();
		assert_eq!(err.code(), "TEMPORAL_001");
	}

	#[test]
	fn test_parse_unknown_zone() {
		let err = parse_timestamp("2024-03-15T10:47:33+01:00[Mars/Olympus]").unwrap_err();
		assert!(err.to_string().contains("unknown time zone 'Mars/Olympus'"));
	}

	#[test]
	fn test_parse_garbage() {
		assert!(parse_timestamp("yesterday").is_err());
		assert!(parse_timestamp("").is_err());
	}
}

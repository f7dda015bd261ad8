// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Calendar granularity used for time bucketing, ordered from finest
/// (`Seconds`) to coarsest (`Years`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationUnit {
	Seconds,
	Minutes,
	Hours,
	Days,
	Weeks,
	Months,
	Quarters,
	Years,
}

impl DurationUnit {
	pub const ALL: [DurationUnit; 8] = [
		DurationUnit::Seconds,
		DurationUnit::Minutes,
		DurationUnit::Hours,
		DurationUnit::Days,
		DurationUnit::Weeks,
		DurationUnit::Months,
		DurationUnit::Quarters,
		DurationUnit::Years,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			DurationUnit::Seconds => "SECONDS",
			DurationUnit::Minutes => "MINUTES",
			DurationUnit::Hours => "HOURS",
			DurationUnit::Days => "DAYS",
			DurationUnit::Weeks => "WEEKS",
			DurationUnit::Months => "MONTHS",
			DurationUnit::Quarters => "QUARTERS",
			DurationUnit::Years => "YEARS",
		}
	}

	/// Length of one unit in calendar months, for the month-based units.
	pub fn months(&self) -> Option<u32> {
		match self {
			DurationUnit::Months => Some(1),
			DurationUnit::Quarters => Some(3),
			DurationUnit::Years => Some(12),
			_ => None,
		}
	}
}

impl Display for DurationUnit {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DurationUnit {
	type Err = Error;

	/// Case-insensitive; accepts the singular and plural unit names.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"SECOND" | "SECONDS" => Ok(DurationUnit::Seconds),
			"MINUTE" | "MINUTES" => Ok(DurationUnit::Minutes),
			"HOUR" | "HOURS" => Ok(DurationUnit::Hours),
			"DAY" | "DAYS" => Ok(DurationUnit::Days),
			"WEEK" | "WEEKS" => Ok(DurationUnit::Weeks),
			"MONTH" | "MONTHS" => Ok(DurationUnit::Months),
			"QUARTER" | "QUARTERS" => Ok(DurationUnit::Quarters),
			"YEAR" | "YEARS" => Ok(DurationUnit::Years),
			_ => Err(Error::UnsupportedUnit {
				unit: s.to_string(),
			}),
		}
	}
}

impl TryFrom<String> for DurationUnit {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<DurationUnit> for String {
	fn from(unit: DurationUnit) -> Self {
		unit.as_str().to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_unit_names() {
		assert_eq!("SECONDS".parse::<DurationUnit>().unwrap(), DurationUnit::Seconds);
		assert_eq!("minute".parse::<DurationUnit>().unwrap(), DurationUnit::Minutes);
		assert_eq!(" Quarters ".parse::<DurationUnit>().unwrap(), DurationUnit::Quarters);
		for unit in DurationUnit::ALL {
			assert_eq!(unit.as_str().parse::<DurationUnit>().unwrap(), unit);
		}
	}

	#[test]
	fn test_parse_unknown_unit() {
		let err = "FORTNIGHTS".parse::<DurationUnit>().unwrap_err();
		assert_eq!(
			err,
			Error::UnsupportedUnit {
				unit: "FORTNIGHTS".to_string()
			}
		);
	}

	#[test]
	fn test_units_ordered_by_granularity() {
		let mut sorted = DurationUnit::ALL;
		sorted.sort();
		assert_eq!(sorted, DurationUnit::ALL);
		assert!(DurationUnit::Seconds < DurationUnit::Years);
		assert!(DurationUnit::Weeks < DurationUnit::Months);
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::timeslice;
use relwin_type::{DurationUnit, Result, Value};

use super::{Arity, Emitted, Native, NativeContext, block, boolean, datetime, int8, operand, unit as parse_unit};
use crate::Operand;

/// `time_slice(timestamp, unit, [slice_size = 1], [end_of_slice = false])`
pub struct TimeSlice;

impl TimeSlice {
	/// Applies the operator. When `unit` is given it was resolved ahead of
	/// time and the unit argument is not parsed again.
	pub fn apply(&self, args: Vec<Operand>, unit: Option<DurationUnit>) -> Result<Operand> {
		let name = self.name();
		let mut args = args.into_iter();

		let timestamp = datetime(name, args.next().unwrap_or_else(Operand::undefined))?;
		let unit_arg = args.next().unwrap_or_else(Operand::undefined);
		let unit = match unit {
			Some(unit) => unit,
			None => parse_unit(name, unit_arg)?,
		};
		let slice_size = match args.next() {
			Some(operand) => timeslice::slice_size(int8(name, operand)?)?,
			None => 1,
		};
		let end_of_slice = match args.next() {
			Some(operand) => boolean(name, operand)?,
			None => false,
		};

		match timestamp {
			Some(timestamp) => {
				let result = timeslice::time_slice(&timestamp, unit, slice_size, end_of_slice)?;
				Ok(Operand::Scalar(Value::DateTime(result)))
			}
			None => Ok(Operand::undefined()),
		}
	}
}

impl Native for TimeSlice {
	fn name(&self) -> &'static str {
		"time_slice"
	}

	fn arity(&self) -> Arity {
		Arity::between(2, 4)
	}

	fn invoke(&self, _ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand> {
		self.apply(args, None)
	}

	fn emit(&self, args: &[Emitted]) -> String {
		let name = self.name();
		let constant = |idx: usize| args.get(idx).and_then(|arg| arg.constant.as_ref());

		let timestamp = format!("::relwin_engine::native::datetime({:?}, {})?", name, operand(args, 0));
		let parsed = match constant(1) {
			Some(Value::Utf8(text)) => text.parse::<DurationUnit>().ok(),
			_ => None,
		};
		let unit = match parsed {
			Some(unit) => format!("::relwin_type::DurationUnit::{}", variant(unit)),
			None => format!("::relwin_engine::native::unit({:?}, {})?", name, operand(args, 1)),
		};
		let slice_size = match (args.get(2), constant(2)) {
			(None, _) => "1".to_string(),
			(_, Some(Value::Int8(n))) if (1..=i64::from(u32::MAX)).contains(n) => n.to_string(),
			_ => format!(
				"::relwin_core::timeslice::slice_size(::relwin_engine::native::int8({:?}, {})?)?",
				name,
				operand(args, 2)
			),
		};
		let end_of_slice = match (args.get(3), constant(3)) {
			(None, _) => "false".to_string(),
			(_, Some(Value::Boolean(end))) => end.to_string(),
			_ => format!("::relwin_engine::native::boolean({:?}, {})?", name, operand(args, 3)),
		};

		let body = format!(
			"match ({}, {}, {}, {}) {{ (Some(ts), unit, size, end) => ::relwin_engine::Operand::Scalar(\
			 ::relwin_type::Value::DateTime(::relwin_core::timeslice::time_slice(&ts, unit, size, end)?)), \
			 (None, ..) => ::relwin_engine::Operand::undefined() }}",
			timestamp, unit, slice_size, end_of_slice
		);
		block(args, body)
	}
}

fn variant(unit: DurationUnit) -> &'static str {
	match unit {
		DurationUnit::Seconds => "Seconds",
		DurationUnit::Minutes => "Minutes",
		DurationUnit::Hours => "Hours",
		DurationUnit::Days => "Days",
		DurationUnit::Weeks => "Weeks",
		DurationUnit::Months => "Months",
		DurationUnit::Quarters => "Quarters",
		DurationUnit::Years => "Years",
	}
}

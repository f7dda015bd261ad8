// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::{FrameBound, FrameMode, FrameSpec, frame};
use relwin_type::{Result, Value};

use super::{
	Arity, Emitted, Native, NativeContext, block, bounds_record, frame_bound, frame_spec, int8, operand, row_count,
	row_index,
};
use crate::Operand;

/// `rows(lower, upper)`
pub struct Rows;

/// `range(lower, upper)`
pub struct Range;

/// `unbounded()`
pub struct Unbounded;

/// `current_row()`
pub struct CurrentRow;

/// `frame_bounds(frame, current_row, row_count | relation)`, yielding a
/// `{low, high}` record.
pub struct FrameBounds;

fn build(function: &str, mode: FrameMode, args: Vec<Operand>) -> Result<Operand> {
	let mut args = args.into_iter();
	let lower = frame_bound(function, args.next().unwrap_or_else(Operand::undefined))?;
	let upper = frame_bound(function, args.next().unwrap_or_else(Operand::undefined))?;
	Ok(Operand::Frame(FrameSpec::new(mode, lower, upper)))
}

fn emit_frame(function: &str, constructor: &str, args: &[Emitted]) -> String {
	let bounds: Vec<String> = (0..2)
		.map(|idx| match args.get(idx).and_then(|arg| arg.constant.as_ref()) {
			Some(Value::Int8(n)) if *n >= 0 => format!("::relwin_core::FrameBound::Offset({})", n),
			_ => format!("::relwin_engine::native::frame_bound({:?}, {})?", function, operand(args, idx)),
		})
		.collect();
	block(
		args,
		format!("::relwin_engine::Operand::Frame(::relwin_core::FrameSpec::{}({}))", constructor, bounds.join(", ")),
	)
}

impl Native for Rows {
	fn name(&self) -> &'static str {
		"rows"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(2)
	}

	fn invoke(&self, _ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand> {
		build(self.name(), FrameMode::Rows, args)
	}

	fn emit(&self, args: &[Emitted]) -> String {
		emit_frame(self.name(), "rows", args)
	}
}

impl Native for Range {
	fn name(&self) -> &'static str {
		"range"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(2)
	}

	fn invoke(&self, _ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand> {
		build(self.name(), FrameMode::Range, args)
	}

	fn emit(&self, args: &[Emitted]) -> String {
		emit_frame(self.name(), "range", args)
	}
}

impl Native for Unbounded {
	fn name(&self) -> &'static str {
		"unbounded"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(0)
	}

	fn invoke(&self, _ctx: &NativeContext, _args: Vec<Operand>) -> Result<Operand> {
		Ok(Operand::FrameBound(FrameBound::Unbounded))
	}

	fn emit(&self, _args: &[Emitted]) -> String {
		"::relwin_engine::Operand::FrameBound(::relwin_core::FrameBound::Unbounded)".to_string()
	}
}

impl Native for CurrentRow {
	fn name(&self) -> &'static str {
		"current_row"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(0)
	}

	fn invoke(&self, _ctx: &NativeContext, _args: Vec<Operand>) -> Result<Operand> {
		Ok(Operand::FrameBound(FrameBound::CurrentRow))
	}

	fn emit(&self, _args: &[Emitted]) -> String {
		"::relwin_engine::Operand::FrameBound(::relwin_core::FrameBound::CurrentRow)".to_string()
	}
}

impl Native for FrameBounds {
	fn name(&self) -> &'static str {
		"frame_bounds"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(3)
	}

	fn invoke(&self, _ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand> {
		let name = self.name();
		let mut args = args.into_iter();

		let spec = frame_spec(name, args.next().unwrap_or_else(Operand::undefined))?;
		let current_row = row_index(name, "current row", int8(name, args.next().unwrap_or_else(Operand::undefined))?)?;
		let row_count = row_count(name, args.next().unwrap_or_else(Operand::undefined))?;

		bounds_record(frame::bounds(&spec, current_row, row_count)?)
	}

	fn emit(&self, args: &[Emitted]) -> String {
		let body = format!(
			"::relwin_engine::native::bounds_record(::relwin_core::frame::bounds(\
			 &::relwin_engine::native::frame_spec({name:?}, {spec})?, \
			 ::relwin_engine::native::row_index({name:?}, \"current row\", \
			 ::relwin_engine::native::int8({name:?}, {current})?)?, \
			 ::relwin_engine::native::row_count({name:?}, {count})?)?)?",
			name = self.name(),
			spec = operand(args, 0),
			current = operand(args, 1),
			count = operand(args, 2),
		);
		block(args, body)
	}
}

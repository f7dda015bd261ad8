// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Type of a host value.
///
/// The scalar kinds describe [`crate::Value`]s; the remaining kinds exist so
/// that type mismatches on operator inputs can name what was actually passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Type of an undefined value, or of an expression whose type is only
	/// known at runtime
	Undefined,
	/// Statically unknown; resolved when the expression is evaluated
	Any,
	Boolean,
	Int8,
	Float8,
	Utf8,
	DateTime,
	Row,
	Relation,
	Frame,
	FrameBound,
	Function,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Float8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Any => f.write_str("Any"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Row => f.write_str("Row"),
			Type::Relation => f.write_str("Relation"),
			Type::Frame => f.write_str("Frame"),
			Type::FrameBound => f.write_str("FrameBound"),
			Type::Function => f.write_str("Function"),
		}
	}
}

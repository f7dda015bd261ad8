// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Display, Formatter},
	sync::Arc,
};

use relwin_core::{FrameBound, FrameSpec, Relation, Row, RowPredicate};
use relwin_type::{Error, Result, Type, Value};

/// The host's generic runtime value, as seen by both backends.
#[derive(Clone)]
pub enum Operand {
	Scalar(Value),
	Record(Row),
	Relation(Relation),
	Frame(FrameSpec),
	FrameBound(FrameBound),
	Function(Arc<dyn RowPredicate>),
}

impl Operand {
	pub fn undefined() -> Self {
		Operand::Scalar(Value::Undefined)
	}

	pub fn kind(&self) -> Type {
		match self {
			Operand::Scalar(value) => value.get_type(),
			Operand::Record(_) => Type::Row,
			Operand::Relation(_) => Type::Relation,
			Operand::Frame(_) => Type::Frame,
			Operand::FrameBound(_) => Type::FrameBound,
			Operand::Function(_) => Type::Function,
		}
	}

	/// Unwraps a scalar, failing with a type mismatch attributed to `context`.
	pub fn into_value(self, context: &str) -> Result<Value> {
		match self {
			Operand::Scalar(value) => Ok(value),
			other => Err(Error::type_mismatch(context, "a scalar", other.kind())),
		}
	}
}

impl From<Value> for Operand {
	fn from(value: Value) -> Self {
		Operand::Scalar(value)
	}
}

impl From<Relation> for Operand {
	fn from(relation: Relation) -> Self {
		Operand::Relation(relation)
	}
}

impl From<Row> for Operand {
	fn from(row: Row) -> Self {
		Operand::Record(row)
	}
}

impl Display for Operand {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Scalar(value) => Display::fmt(value, f),
			Operand::Record(row) => Display::fmt(row, f),
			Operand::Relation(relation) => Display::fmt(relation, f),
			Operand::Frame(frame) => Display::fmt(frame, f),
			Operand::FrameBound(bound) => Display::fmt(bound, f),
			Operand::Function(function) => write!(f, "function(row) -> {}", function.return_type()),
		}
	}
}

impl Debug for Operand {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
			Operand::Record(row) => f.debug_tuple("Record").field(row).finish(),
			Operand::Relation(relation) => f.debug_tuple("Relation").field(relation).finish(),
			Operand::Frame(frame) => f.debug_tuple("Frame").field(frame).finish(),
			Operand::FrameBound(bound) => f.debug_tuple("FrameBound").field(bound).finish(),
			Operand::Function(function) => {
				f.debug_struct("Function").field("return_type", &function.return_type()).finish()
			}
		}
	}
}

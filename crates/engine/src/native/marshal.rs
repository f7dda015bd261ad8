// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Conversions from [`Operand`] into the argument types of the core
//! operators. Natives and generated code both go through these, so a bad
//! argument fails with the same error whichever path evaluated it.

use std::sync::Arc;

use relwin_core::{FrameBound, FrameBounds, FrameSpec, Relation, Row, RowLayout, RowPredicate, relation::RelationView};
use relwin_type::{DurationUnit, Error, Result, Timestamp, Type, Value};

use crate::Operand;

/// A timestamp argument; `Undefined` yields `None`.
pub fn datetime(function: &str, operand: Operand) -> Result<Option<Timestamp>> {
	match operand {
		Operand::Scalar(Value::DateTime(ts)) => Ok(Some(ts)),
		Operand::Scalar(Value::Undefined) => Ok(None),
		other => Err(Error::type_mismatch(function, Type::DateTime, other.kind())),
	}
}

pub fn utf8(function: &str, operand: Operand) -> Result<String> {
	match operand {
		Operand::Scalar(Value::Utf8(text)) => Ok(text),
		other => Err(Error::type_mismatch(function, Type::Utf8, other.kind())),
	}
}

pub fn int8(function: &str, operand: Operand) -> Result<i64> {
	match operand {
		Operand::Scalar(Value::Int8(value)) => Ok(value),
		other => Err(Error::type_mismatch(function, Type::Int8, other.kind())),
	}
}

pub fn boolean(function: &str, operand: Operand) -> Result<bool> {
	match operand {
		Operand::Scalar(Value::Boolean(value)) => Ok(value),
		other => Err(Error::type_mismatch(function, Type::Boolean, other.kind())),
	}
}

/// A unit name, parsed case-insensitively.
pub fn unit(function: &str, operand: Operand) -> Result<DurationUnit> {
	utf8(function, operand)?.parse()
}

pub fn relation(function: &str, operand: Operand) -> Result<Relation> {
	match operand {
		Operand::Relation(relation) => Ok(relation),
		other => Err(Error::type_mismatch(function, "a relation", other.kind())),
	}
}

pub fn function(function: &str, operand: Operand) -> Result<Arc<dyn RowPredicate>> {
	match operand {
		Operand::Function(predicate) => Ok(predicate),
		other => Err(Error::type_mismatch(function, "a function", other.kind())),
	}
}

/// A frame bound, or a non-negative `Int8` offset.
pub fn frame_bound(function: &str, operand: Operand) -> Result<FrameBound> {
	match operand {
		Operand::FrameBound(bound) => Ok(bound),
		Operand::Scalar(Value::Int8(n)) => FrameBound::offset(n),
		other => Err(Error::type_mismatch(function, "a frame bound", other.kind())),
	}
}

pub fn frame_spec(function: &str, operand: Operand) -> Result<FrameSpec> {
	match operand {
		Operand::Frame(spec) => Ok(spec),
		other => Err(Error::type_mismatch(function, Type::Frame, other.kind())),
	}
}

pub fn row_index(function: &str, what: &str, value: i64) -> Result<usize> {
	usize::try_from(value)
		.map_err(|_| Error::invalid_argument(function, format!("{} must not be negative, got {}", what, value)))
}

/// A partition size, given either as a relation or as an `Int8` count.
pub fn row_count(function: &str, operand: Operand) -> Result<usize> {
	match operand {
		Operand::Relation(relation) => Ok(relation.row_count()),
		other => row_index(function, "row count", int8(function, other)?),
	}
}

/// Frame bounds as a `{low, high}` record.
pub fn bounds_record(bounds: FrameBounds) -> Result<Operand> {
	let values = vec![Value::Int8(to_int8(bounds.low)?), Value::Int8(to_int8(bounds.high)?)];
	Ok(Operand::Record(Row::new(RowLayout::new(["low", "high"]), values)?))
}

fn to_int8(index: usize) -> Result<i64> {
	i64::try_from(index).map_err(|_| Error::invalid_argument("frame_bounds", format!("index {} exceeds Int8", index)))
}

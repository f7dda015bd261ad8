// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

pub mod temporal;
pub mod r#type;

use temporal::Timestamp;
use r#type::Type;

/// A scalar host value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A point in time together with the zone it is expressed in
	DateTime(Timestamp),
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::DateTime(_) => Type::DateTime,
		}
	}

	pub fn utf8(text: impl Into<String>) -> Self {
		Value::Utf8(text.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// Compares two values of compatible types. Numbers compare across
	/// `Int8`/`Float8`; any comparison involving `Undefined` or mismatched
	/// kinds yields `None`.
	pub fn compare(&self, other: &Value) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
			(Value::Int8(l), Value::Int8(r)) => Some(l.cmp(r)),
			(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r),
			(Value::Int8(l), Value::Float8(r)) => (*l as f64).partial_cmp(r),
			(Value::Float8(l), Value::Int8(r)) => l.partial_cmp(&(*r as f64)),
			(Value::Utf8(l), Value::Utf8(r)) => Some(l.cmp(r)),
			(Value::DateTime(l), Value::DateTime(r)) => Some(l.instant().cmp(&r.instant())),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float8(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

impl From<Timestamp> for Value {
	fn from(value: Timestamp) -> Self {
		Value::DateTime(value)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use relwin_type::{Error, Result, Timestamp, Type, Value};

use super::RowLayout;

/// A single row of a relation with typed field access.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
	layout: RowLayout,
	values: Vec<Value>,
}

impl Row {
	pub fn new(layout: RowLayout, values: Vec<Value>) -> Result<Self> {
		if layout.len() != values.len() {
			return Err(Error::invalid_argument(
				"row",
				format!("layout has {} fields but {} values were given", layout.len(), values.len()),
			));
		}
		Ok(Self {
			layout,
			values,
		})
	}

	pub fn layout(&self) -> &RowLayout {
		&self.layout
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn value(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn get(&self, name: &str) -> Result<&Value> {
		self.layout.index_of(name).and_then(|idx| self.values.get(idx)).ok_or_else(|| Error::ColumnNotFound {
			name: name.to_string(),
		})
	}

	pub fn boolean(&self, name: &str) -> Result<bool> {
		match self.get(name)? {
			Value::Boolean(value) => Ok(*value),
			other => Err(field_mismatch(name, Type::Boolean, other)),
		}
	}

	pub fn int8(&self, name: &str) -> Result<i64> {
		match self.get(name)? {
			Value::Int8(value) => Ok(*value),
			other => Err(field_mismatch(name, Type::Int8, other)),
		}
	}

	/// Reads a numeric field as `f64`; `Int8` fields are widened.
	pub fn float8(&self, name: &str) -> Result<f64> {
		match self.get(name)? {
			Value::Float8(value) => Ok(*value),
			Value::Int8(value) => Ok(*value as f64),
			other => Err(field_mismatch(name, Type::Float8, other)),
		}
	}

	pub fn utf8(&self, name: &str) -> Result<&str> {
		match self.get(name)? {
			Value::Utf8(value) => Ok(value.as_str()),
			other => Err(field_mismatch(name, Type::Utf8, other)),
		}
	}

	pub fn datetime(&self, name: &str) -> Result<Timestamp> {
		match self.get(name)? {
			Value::DateTime(value) => Ok(*value),
			other => Err(field_mismatch(name, Type::DateTime, other)),
		}
	}
}

fn field_mismatch(name: &str, expected: Type, actual: &Value) -> Error {
	Error::type_mismatch(format!("field '{}'", name), expected, actual.get_type())
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (idx, (name, value)) in self.layout.names().iter().zip(self.values.iter()).enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", name, value)?;
		}
		f.write_str("}")
	}
}

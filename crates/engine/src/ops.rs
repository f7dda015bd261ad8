// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Scalar operator semantics shared by both backends and by generated code.
//!
//! `Undefined` propagates through comparison and arithmetic. Boolean
//! connectives follow three-valued logic.

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use relwin_type::{Error, Result, Type, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
	Eq,
	Ne,
	Gt,
	Ge,
	Lt,
	Le,
}

impl CompareOp {
	fn holds(&self, ordering: Ordering) -> bool {
		match self {
			CompareOp::Eq => ordering == Ordering::Equal,
			CompareOp::Ne => ordering != Ordering::Equal,
			CompareOp::Gt => ordering == Ordering::Greater,
			CompareOp::Ge => ordering != Ordering::Less,
			CompareOp::Lt => ordering == Ordering::Less,
			CompareOp::Le => ordering != Ordering::Greater,
		}
	}
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			CompareOp::Eq => "==",
			CompareOp::Ne => "!=",
			CompareOp::Gt => ">",
			CompareOp::Ge => ">=",
			CompareOp::Lt => "<",
			CompareOp::Le => "<=",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
	Add,
	Sub,
	Mul,
}

impl Display for ArithOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ArithOp::Add => "+",
			ArithOp::Sub => "-",
			ArithOp::Mul => "*",
		})
	}
}

pub fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<Value> {
	if left.is_undefined() || right.is_undefined() {
		return Ok(Value::Undefined);
	}

	match left.compare(right) {
		Some(ordering) => Ok(Value::Boolean(op.holds(ordering))),
		// NaN on either side
		None if left.get_type().is_number() && right.get_type().is_number() => {
			Ok(Value::Boolean(op == CompareOp::Ne))
		}
		None => Err(Error::type_mismatch(op.to_string(), left.get_type(), right.get_type())),
	}
}

pub fn arith(op: ArithOp, left: &Value, right: &Value) -> Result<Value> {
	match (left, right) {
		(Value::Undefined, _) | (_, Value::Undefined) => Ok(Value::Undefined),
		(Value::Int8(l), Value::Int8(r)) => {
			let result = match op {
				ArithOp::Add => l.checked_add(*r),
				ArithOp::Sub => l.checked_sub(*r),
				ArithOp::Mul => l.checked_mul(*r),
			};
			result.map(Value::Int8)
				.ok_or_else(|| Error::invalid_argument(op.to_string(), format!("{} {} {} overflows Int8", l, op, r)))
		}
		(l, r) if l.get_type().is_number() && r.get_type().is_number() => {
			let (l, r) = (as_float(l), as_float(r));
			Ok(Value::Float8(match op {
				ArithOp::Add => l + r,
				ArithOp::Sub => l - r,
				ArithOp::Mul => l * r,
			}))
		}
		(l, r) if l.get_type().is_number() => Err(Error::type_mismatch(op.to_string(), "a number", r.get_type())),
		(l, _) => Err(Error::type_mismatch(op.to_string(), "a number", l.get_type())),
	}
}

fn as_float(value: &Value) -> f64 {
	match value {
		Value::Int8(v) => *v as f64,
		Value::Float8(v) => *v,
		_ => f64::NAN,
	}
}

pub fn and(left: &Value, right: &Value) -> Result<Value> {
	match (boolean("and", left)?, boolean("and", right)?) {
		(Some(false), _) | (_, Some(false)) => Ok(Value::Boolean(false)),
		(Some(true), Some(true)) => Ok(Value::Boolean(true)),
		_ => Ok(Value::Undefined),
	}
}

pub fn or(left: &Value, right: &Value) -> Result<Value> {
	match (boolean("or", left)?, boolean("or", right)?) {
		(Some(true), _) | (_, Some(true)) => Ok(Value::Boolean(true)),
		(Some(false), Some(false)) => Ok(Value::Boolean(false)),
		_ => Ok(Value::Undefined),
	}
}

pub fn not(value: &Value) -> Result<Value> {
	Ok(match boolean("not", value)? {
		Some(value) => Value::Boolean(!value),
		None => Value::Undefined,
	})
}

fn boolean(context: &str, value: &Value) -> Result<Option<bool>> {
	match value {
		Value::Boolean(value) => Ok(Some(*value)),
		Value::Undefined => Ok(None),
		other => Err(Error::type_mismatch(context, Type::Boolean, other.get_type())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compare_numbers() {
		assert_eq!(compare(CompareOp::Gt, &Value::Int8(5), &Value::Int8(3)).unwrap(), Value::Boolean(true));
		assert_eq!(compare(CompareOp::Le, &Value::Float8(3.0), &Value::Int8(3)).unwrap(), Value::Boolean(true));
		assert_eq!(compare(CompareOp::Ne, &Value::Int8(1), &Value::Int8(1)).unwrap(), Value::Boolean(false));
	}

	#[test]
	fn test_compare_undefined_propagates() {
		assert_eq!(compare(CompareOp::Eq, &Value::Undefined, &Value::Int8(3)).unwrap(), Value::Undefined);
	}

	#[test]
	fn test_compare_mismatched_kinds() {
		let err = compare(CompareOp::Gt, &Value::utf8("a"), &Value::Int8(3)).unwrap_err();
		assert_eq!(err.to_string(), "Expected Utf8, found: Int8");
	}

	#[test]
	fn test_arith() {
		assert_eq!(arith(ArithOp::Add, &Value::Int8(2), &Value::Int8(3)).unwrap(), Value::Int8(5));
		assert_eq!(arith(ArithOp::Mul, &Value::Int8(2), &Value::Float8(1.5)).unwrap(), Value::Float8(3.0));
		assert_eq!(arith(ArithOp::Sub, &Value::Undefined, &Value::Int8(1)).unwrap(), Value::Undefined);
		assert_eq!(arith(ArithOp::Add, &Value::Int8(i64::MAX), &Value::Int8(1)).unwrap_err().code(), "ARGUMENT_001");
		assert_eq!(
			arith(ArithOp::Add, &Value::Int8(1), &Value::Boolean(true)).unwrap_err().to_string(),
			"Expected a number, found: Boolean"
		);
	}

	#[test]
	fn test_three_valued_logic() {
		let t = Value::Boolean(true);
		let f = Value::Boolean(false);
		let u = Value::Undefined;
		assert_eq!(and(&f, &u).unwrap(), f);
		assert_eq!(and(&t, &u).unwrap(), u);
		assert_eq!(or(&t, &u).unwrap(), t);
		assert_eq!(or(&f, &u).unwrap(), u);
		assert_eq!(not(&u).unwrap(), u);
		assert_eq!(not(&t).unwrap(), f);
		assert_eq!(and(&t, &Value::Int8(1)).unwrap_err().code(), "TYPE_001");
	}
}

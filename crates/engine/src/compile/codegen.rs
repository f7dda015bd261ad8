// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Renders the Rust source a code generator splices in to evaluate an
//! expression. Native calls become direct calls into `relwin-core` through
//! the marshalling helpers in [`crate::native`]; scalar operators go through
//! [`crate::ops`], so generated code shares the semantics of both backends.
//!
//! Emitted source is an expression of type [`crate::Operand`]. It may use
//! `?` and expects `ctx: &NativeContext` and `vars: &Variables` in scope;
//! [`emit_function`] wraps it in a function with that signature.

use relwin_type::{Result, Value};

use crate::{
	expression::Expression,
	native::{Emitted, Natives},
};

pub fn emit(expression: &Expression, natives: &Natives) -> Result<String> {
	Generator {
		natives,
		in_lambda: false,
	}
	.expression(expression)
}

/// A complete function `name(ctx, vars) -> Result<Operand>` evaluating
/// `expression`.
pub fn emit_function(name: &str, expression: &Expression, natives: &Natives) -> Result<String> {
	Ok(format!(
		"#[allow(unused_variables)]\n\
		 pub fn {}(ctx: &::relwin_engine::native::NativeContext, vars: &::relwin_engine::Variables) \
		 -> ::relwin_type::Result<::relwin_engine::Operand> {{\n\
		 \tOk({})\n\
		 }}\n",
		identifier(name),
		emit(expression, natives)?
	))
}

struct Generator<'a> {
	natives: &'a Natives,
	in_lambda: bool,
}

impl Generator<'_> {
	fn expression(&self, expression: &Expression) -> Result<String> {
		Ok(match expression {
			Expression::Constant(value) => format!("::relwin_engine::Operand::Scalar({})", value_source(value)),
			Expression::Field(name) if self.in_lambda => {
				format!("::relwin_engine::Operand::Scalar(row.get({:?})?.clone())", name)
			}
			Expression::Field(name) => format!(
				"Err::<::relwin_engine::Operand, _>(::relwin_type::Error::ColumnNotFound {{ name: {:?}.to_string() }})?",
				name
			),
			Expression::Variable(name) => format!("vars.get({:?})?.clone()", name),
			Expression::Compare {
				op,
				left,
				right,
			} => self.scalar(
				&format!("::relwin_engine::ops::compare(::relwin_engine::ops::CompareOp::{:?}, ", op),
				&op.to_string(),
				&[left.as_ref(), right.as_ref()],
			)?,
			Expression::Arith {
				op,
				left,
				right,
			} => self.scalar(
				&format!("::relwin_engine::ops::arith(::relwin_engine::ops::ArithOp::{:?}, ", op),
				&op.to_string(),
				&[left.as_ref(), right.as_ref()],
			)?,
			Expression::And(left, right) => self.scalar("::relwin_engine::ops::and(", "and", &[left.as_ref(), right.as_ref()])?,
			Expression::Or(left, right) => self.scalar("::relwin_engine::ops::or(", "or", &[left.as_ref(), right.as_ref()])?,
			Expression::Not(inner) => self.scalar("::relwin_engine::ops::not(", "not", &[inner.as_ref()])?,
			Expression::Call {
				name,
				args,
			} => {
				let native = self.natives.resolve(name, args.len())?;
				let args = args.iter().map(|arg| self.argument(arg)).collect::<Result<Vec<_>>>()?;
				native.emit(&args)
			}
			Expression::Lambda {
				returns,
				body,
			} => {
				let returns = Expression::lambda_return_type(*returns, body);
				let body = Generator {
					natives: self.natives,
					in_lambda: true,
				}
				.expression(body)?;
				format!(
					"::relwin_engine::native::lambda(::relwin_type::Type::{}, {{ let ctx = ctx.clone(); \
					 let vars = vars.clone(); move |row: &::relwin_core::Row| -> \
					 ::relwin_type::Result<::relwin_type::Value> {{ let (ctx, vars) = (&ctx, &vars); \
					 let result: ::relwin_engine::Operand = {}; result.into_value(\"lambda\") }} }})",
					returns, body
				)
			}
		})
	}

	/// A scalar operator over operands unwrapped left to right.
	fn scalar(&self, call: &str, context: &str, operands: &[&Expression]) -> Result<String> {
		let operands = operands
			.iter()
			.map(|operand| Ok(format!("&{}.into_value({:?})?", self.expression(operand)?, context)))
			.collect::<Result<Vec<_>>>()?;
		Ok(format!("::relwin_engine::Operand::Scalar({}{})?)", call, operands.join(", ")))
	}

	fn argument(&self, expression: &Expression) -> Result<Emitted> {
		Ok(Emitted {
			source: self.expression(expression)?,
			constant: match expression {
				Expression::Constant(value) => Some(value.clone()),
				_ => None,
			},
		})
	}
}
/// A constant as a host value.
fn value_source(value: &Value) -> String {
	match value {
		Value::Undefined => "::relwin_type::Value::Undefined".to_string(),
		Value::Boolean(value) => format!("::relwin_type::Value::Boolean({})", value),
		Value::Int8(value) => format!("::relwin_type::Value::Int8({})", value),
		Value::Float8(value) if value.is_finite() => format!("::relwin_type::Value::Float8({:?})", value),
		Value::Float8(value) => format!("::relwin_type::Value::Float8(f64::from_bits({:#x}))", value.to_bits()),
		Value::Utf8(text) => format!("::relwin_type::Value::utf8({:?})", text),
		Value::DateTime(ts) => {
			format!("::relwin_type::Value::DateTime({:?}.parse::<::relwin_type::Timestamp>()?)", ts.to_string())
		}
	}
}

fn identifier(name: &str) -> String {
	let mut result: String =
		name.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();
	if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
		result.insert(0, '_');
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expression::CompareOp;

	fn greater_than_three() -> Expression {
		Expression::compare(CompareOp::Gt, Expression::field("value"), Expression::constant(3i64))
	}

	#[test]
	fn test_time_slice_with_defaults() {
		let expr = Expression::call("time_slice", vec![Expression::variable("ts"), Expression::constant("MINUTES")]);
		let emitted = emit(&expr, &Natives::standard()).unwrap();
		assert!(emitted.starts_with("{ let arg0 = vars.get(\"ts\")?.clone(); match ("));
		assert!(emitted.contains("::relwin_type::DurationUnit::Minutes, 1, false)"));
	}

	#[test]
	fn test_frame_bounds_indices_are_checked() {
		let expr = Expression::call(
			"frame_bounds",
			vec![
				Expression::call("rows", vec![Expression::call("unbounded", vec![]), Expression::constant(1i64)]),
				Expression::variable("i"),
				Expression::variable("n"),
			],
		);
		let emitted = emit(&expr, &Natives::standard()).unwrap();
		assert!(!emitted.contains(" as "));
		assert!(emitted.contains("::relwin_core::FrameBound::Offset(1)"));
		assert!(emitted.contains("::relwin_engine::native::row_count(\"frame_bounds\", arg2)?"));
	}

	#[test]
	fn test_field_outside_lambda() {
		assert_eq!(
			emit(&greater_than_three(), &Natives::standard()).unwrap(),
			"::relwin_engine::Operand::Scalar(::relwin_engine::ops::compare(::relwin_engine::ops::CompareOp::Gt, \
			 &Err::<::relwin_engine::Operand, _>(::relwin_type::Error::ColumnNotFound { name: \"value\".to_string() \
			 })?.into_value(\">\")?, &::relwin_engine::Operand::Scalar(::relwin_type::Value::Int8(3)).into_value(\">\")?)?)"
		);
	}

	#[test]
	fn test_having_lambda() {
		let expr = Expression::call("having", vec![Expression::variable("t"), Expression::lambda(greater_than_three())]);
		let emitted = emit(&expr, &Natives::standard()).unwrap();
		assert!(emitted.contains(
			"let arg1 = ::relwin_engine::native::lambda(::relwin_type::Type::Boolean, { let ctx = ctx.clone();"
		));
		assert!(emitted.contains("::relwin_engine::Operand::Scalar(row.get(\"value\")?.clone())"));
		assert!(emitted.contains("&*::relwin_engine::native::function(\"having\", arg1)?, &ctx.filter)?"));
	}

	#[test]
	fn test_emit_function() {
		let function = emit_function("cutoff at", &Expression::constant(true), &Natives::standard()).unwrap();
		assert_eq!(
			function,
			"#[allow(unused_variables)]\npub fn cutoff_at(ctx: &::relwin_engine::native::NativeContext, \
			 vars: &::relwin_engine::Variables) -> ::relwin_type::Result<::relwin_engine::Operand> {\n\
			 \tOk(::relwin_engine::Operand::Scalar(::relwin_type::Value::Boolean(true)))\n}\n"
		);
	}

	#[test]
	fn test_unknown_function() {
		let err = emit(&Expression::call("lag", vec![]), &Natives::standard()).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");
	}

	#[test]
	fn test_non_finite_float() {
		assert_eq!(value_source(&Value::Float8(2.5)), "::relwin_type::Value::Float8(2.5)");
		assert_eq!(
			value_source(&Value::Float8(f64::INFINITY)),
			"::relwin_type::Value::Float8(f64::from_bits(0x7ff0000000000000))"
		);
	}

	#[test]
	fn test_identifier() {
		assert_eq!(identifier("ts"), "ts");
		assert_eq!(identifier("created at"), "created_at");
		assert_eq!(identifier("1st"), "_1st");
	}
}

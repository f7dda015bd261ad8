// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tree-walking backend. Natives are resolved by name each time a call is
//! evaluated, and lambdas re-walk their body for every row.

use std::sync::Arc;

use relwin_core::{CoreConfig, Interrupt, Row};
use relwin_type::{Error, Result};
use tracing::{instrument, trace};

use self::lambda::InterpretedLambda;
use crate::{
	Backend, Operand, Variables,
	expression::Expression,
	native::{NativeContext, Natives},
	ops,
};

mod lambda;

#[derive(Clone)]
pub struct Interpreter {
	natives: Arc<Natives>,
	context: NativeContext,
}

struct Scope<'a> {
	variables: &'a Variables,
	row: Option<&'a Row>,
}

impl Interpreter {
	pub fn new(natives: Arc<Natives>, config: &CoreConfig) -> Self {
		Self {
			natives,
			context: NativeContext::from_config(config),
		}
	}

	pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
		self.context = self.context.with_interrupt(interrupt);
		self
	}

	#[instrument(name = "interpret::evaluate", level = "debug", skip_all, fields(expression = %expression))]
	pub fn evaluate(&self, expression: &Expression, variables: &Variables) -> Result<Operand> {
		self.eval(
			expression,
			&Scope {
				variables,
				row: None,
			},
		)
	}

	fn apply(&self, body: &Expression, variables: &Variables, row: &Row) -> Result<Operand> {
		self.eval(
			body,
			&Scope {
				variables,
				row: Some(row),
			},
		)
	}

	fn eval(&self, expression: &Expression, scope: &Scope) -> Result<Operand> {
		match expression {
			Expression::Constant(value) => Ok(Operand::Scalar(value.clone())),
			Expression::Field(name) => {
				let row = scope.row.ok_or_else(|| Error::ColumnNotFound {
					name: name.clone(),
				})?;
				Ok(Operand::Scalar(row.get(name)?.clone()))
			}
			Expression::Variable(name) => scope.variables.get(name).cloned(),
			Expression::Compare {
				op,
				left,
				right,
			} => {
				let context = op.to_string();
				let left = self.eval(left, scope)?.into_value(&context)?;
				let right = self.eval(right, scope)?.into_value(&context)?;
				ops::compare(*op, &left, &right).map(Operand::Scalar)
			}
			Expression::Arith {
				op,
				left,
				right,
			} => {
				let context = op.to_string();
				let left = self.eval(left, scope)?.into_value(&context)?;
				let right = self.eval(right, scope)?.into_value(&context)?;
				ops::arith(*op, &left, &right).map(Operand::Scalar)
			}
			Expression::And(left, right) => {
				let left = self.eval(left, scope)?.into_value("and")?;
				let right = self.eval(right, scope)?.into_value("and")?;
				ops::and(&left, &right).map(Operand::Scalar)
			}
			Expression::Or(left, right) => {
				let left = self.eval(left, scope)?.into_value("or")?;
				let right = self.eval(right, scope)?.into_value("or")?;
				ops::or(&left, &right).map(Operand::Scalar)
			}
			Expression::Not(inner) => {
				let inner = self.eval(inner, scope)?.into_value("not")?;
				ops::not(&inner).map(Operand::Scalar)
			}
			Expression::Call {
				name,
				args,
			} => {
				let native = self.natives.resolve(name, args.len())?;
				trace!(native = name.as_str(), "invoking native");
				let args = args.iter().map(|arg| self.eval(arg, scope)).collect::<Result<Vec<_>>>()?;
				native.invoke(&self.context, args)
			}
			Expression::Lambda {
				returns,
				body,
			} => Ok(Operand::Function(Arc::new(InterpretedLambda {
				interpreter: self.clone(),
				returns: Expression::lambda_return_type(*returns, body),
				body: body.as_ref().clone(),
				variables: scope.variables.clone(),
			}))),
		}
	}
}

impl Default for Interpreter {
	fn default() -> Self {
		Self::new(Arc::new(Natives::standard()), &CoreConfig::default())
	}
}

impl Backend for Interpreter {
	fn name(&self) -> &'static str {
		"interpreted"
	}

	fn execute(&self, expression: &Expression, variables: &Variables) -> Result<Operand> {
		self.evaluate(expression, variables)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ahead-of-time backend. An [`Expression`] is lowered once into a
//! [`CompiledExpr`] closure tree: natives and their arity are resolved while
//! compiling, and constant unit names are parsed up front.

use std::sync::Arc;

use relwin_core::{CoreConfig, Interrupt};
use relwin_type::{DurationUnit, Error, Result, Value};
use tracing::{debug, instrument};

pub use self::{context::ExecContext, expr::CompiledExpr};
use crate::{
	Backend, Operand, Variables,
	expression::Expression,
	native::{self, Native, NativeContext, Natives, TimeSlice},
	ops,
};

pub mod codegen;
pub mod context;
pub mod expr;

#[derive(Clone)]
pub struct Compiler {
	natives: Arc<Natives>,
	context: NativeContext,
}

impl Compiler {
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

	#[instrument(name = "compile::compile", level = "debug", skip_all, fields(expression = %expression))]
	pub fn compile(&self, expression: &Expression) -> CompiledExpr {
		self.compile_expr(expression)
	}

	/// Runs a compiled expression with this compiler's native context.
	pub fn run(&self, compiled: &CompiledExpr, variables: &Variables) -> Result<Operand> {
		compiled.execute(&ExecContext::new(variables, &self.context))
	}

	fn compile_expr(&self, expression: &Expression) -> CompiledExpr {
		match expression {
			Expression::Constant(value) => {
				let value = value.clone();
				CompiledExpr::new(move |_| Ok(Operand::Scalar(value.clone())))
			}
			Expression::Field(name) => {
				let name = name.clone();
				CompiledExpr::new(move |ctx| {
					let row = ctx.row.ok_or_else(|| Error::ColumnNotFound {
						name: name.clone(),
					})?;
					Ok(Operand::Scalar(row.get(&name)?.clone()))
				})
			}
			Expression::Variable(name) => {
				let name = name.clone();
				CompiledExpr::new(move |ctx| ctx.variables.get(&name).cloned())
			}
			Expression::Compare {
				op,
				left,
				right,
			} => {
				let (op, context) = (*op, op.to_string());
				let (left, right) = (self.compile_expr(left), self.compile_expr(right));
				CompiledExpr::new(move |ctx| {
					let left = left.execute(ctx)?.into_value(&context)?;
					let right = right.execute(ctx)?.into_value(&context)?;
					ops::compare(op, &left, &right).map(Operand::Scalar)
				})
			}
			Expression::Arith {
				op,
				left,
				right,
			} => {
				let (op, context) = (*op, op.to_string());
				let (left, right) = (self.compile_expr(left), self.compile_expr(right));
				CompiledExpr::new(move |ctx| {
					let left = left.execute(ctx)?.into_value(&context)?;
					let right = right.execute(ctx)?.into_value(&context)?;
					ops::arith(op, &left, &right).map(Operand::Scalar)
				})
			}
			Expression::And(left, right) => {
				let (left, right) = (self.compile_expr(left), self.compile_expr(right));
				CompiledExpr::new(move |ctx| {
					let left = left.execute(ctx)?.into_value("and")?;
					let right = right.execute(ctx)?.into_value("and")?;
					ops::and(&left, &right).map(Operand::Scalar)
				})
			}
			Expression::Or(left, right) => {
				let (left, right) = (self.compile_expr(left), self.compile_expr(right));
				CompiledExpr::new(move |ctx| {
					let left = left.execute(ctx)?.into_value("or")?;
					let right = right.execute(ctx)?.into_value("or")?;
					ops::or(&left, &right).map(Operand::Scalar)
				})
			}
			Expression::Not(inner) => {
				let inner = self.compile_expr(inner);
				CompiledExpr::new(move |ctx| {
					let inner = inner.execute(ctx)?.into_value("not")?;
					ops::not(&inner).map(Operand::Scalar)
				})
			}
			Expression::Call {
				name,
				args,
			} => self.compile_call(name, args),
			Expression::Lambda {
				returns,
				body,
			} => {
				let returns = Expression::lambda_return_type(*returns, body);
				let body = Arc::new(self.compile_expr(body));
				CompiledExpr::new(move |ctx| {
					let body = body.clone();
					let variables = ctx.variables.clone();
					let native_ctx = ctx.native.clone();
					Ok(native::lambda(returns, move |row| {
						body.execute(&ExecContext::new(&variables, &native_ctx).with_row(row))?
							.into_value("lambda")
					}))
				})
			}
		}
	}

	fn compile_call(&self, name: &str, args: &[Expression]) -> CompiledExpr {
		let native = match self.natives.resolve(name, args.len()) {
			Ok(native) => native,
			Err(err) => {
				debug!(function = name, %err, "call left unresolved");
				return CompiledExpr::failing(err);
			}
		};
		let compiled: Vec<CompiledExpr> = args.iter().map(|arg| self.compile_expr(arg)).collect();

		if native.name() == TimeSlice.name() {
			if let Some(unit) = constant_unit(args.get(1)) {
				return CompiledExpr::new(move |ctx| TimeSlice.apply(evaluate_all(&compiled, ctx)?, Some(unit)));
			}
		}

		CompiledExpr::new(move |ctx| native.invoke(ctx.native, evaluate_all(&compiled, ctx)?))
	}
}

fn evaluate_all(args: &[CompiledExpr], ctx: &ExecContext) -> Result<Vec<Operand>> {
	args.iter().map(|arg| arg.execute(ctx)).collect()
}

/// Parses a literal unit name. Anything else is left to run time, so failures
/// surface in the same order as in the interpreter.
fn constant_unit(arg: Option<&Expression>) -> Option<DurationUnit> {
	match arg {
		Some(Expression::Constant(Value::Utf8(text))) => text.parse().ok(),
		_ => None,
	}
}

impl Default for Compiler {
	fn default() -> Self {
		Self::new(Arc::new(Natives::standard()), &CoreConfig::default())
	}
}

impl Backend for Compiler {
	fn name(&self) -> &'static str {
		"compiled"
	}

	fn execute(&self, expression: &Expression, variables: &Variables) -> Result<Operand> {
		let compiled = self.compile(expression);
		self.run(&compiled, variables)
	}
}

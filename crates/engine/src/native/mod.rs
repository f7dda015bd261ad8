// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bindings from operator names to the canonical operators in `relwin-core`.
//!
//! A native only marshals [`Operand`]s into core types and wraps the result.
//! The interpreter and the compiler share one registry, so every operator is
//! implemented exactly once.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use relwin_core::{CoreConfig, FilterOptions, Interrupt, Row, RowPredicate};
use relwin_type::{Error, Result, Type, Value};
use tracing::debug;

pub use self::{
	frame::{CurrentRow, FrameBounds, Range, Rows, Unbounded},
	having::Having,
	marshal::{
		boolean, bounds_record, datetime, frame_bound, frame_spec, function, int8, relation, row_count, row_index,
		unit, utf8,
	},
	timeslice::TimeSlice,
};
use crate::Operand;

mod frame;
mod having;
mod marshal;
mod timeslice;

/// Everything a native needs from the enclosing evaluation.
#[derive(Debug, Clone)]
pub struct NativeContext {
	pub filter: FilterOptions,
}

impl NativeContext {
	pub fn from_config(config: &CoreConfig) -> Self {
		Self {
			filter: FilterOptions::from_config(config),
		}
	}

	pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
		self.filter = self.filter.with_interrupt(interrupt);
		self
	}
}

impl Default for NativeContext {
	fn default() -> Self {
		Self::from_config(&CoreConfig::default())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
	pub min: usize,
	pub max: usize,
}

impl Arity {
	pub const fn exactly(n: usize) -> Self {
		Self {
			min: n,
			max: n,
		}
	}

	pub const fn between(min: usize, max: usize) -> Self {
		Self {
			min,
			max,
		}
	}

	pub fn check(&self, name: &str, actual: usize) -> Result<()> {
		if actual < self.min || actual > self.max {
			return Err(Error::ArityMismatch {
				name: name.to_string(),
				expected: self.to_string(),
				actual,
			});
		}
		Ok(())
	}
}

impl Display for Arity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.min == self.max {
			write!(f, "{}", self.min)
		} else {
			write!(f, "{} to {}", self.min, self.max)
		}
	}
}

/// An argument as rendered by the code generator. `source` is a Rust
/// expression of type [`Operand`]; `constant` is set when the argument is a
/// literal, so natives can emit typed paths instead of converting at run time.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
	pub source: String,
	pub constant: Option<Value>,
}

pub trait Native: Send + Sync {
	fn name(&self) -> &'static str;

	fn arity(&self) -> Arity;

	/// Invokes the operator. `args` has already been checked against
	/// [`Native::arity`].
	fn invoke(&self, ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand>;

	/// Rust source of an [`Operand`] expression that invokes the operator
	/// from generated code. The source may use `?` and refers to the
	/// enclosing function's `ctx: &NativeContext`.
	fn emit(&self, args: &[Emitted]) -> String;
}

pub struct Natives {
	natives: HashMap<&'static str, Arc<dyn Native>>,
}

impl Natives {
	pub fn new() -> Self {
		Self {
			natives: HashMap::new(),
		}
	}

	/// A registry with every built-in operator.
	pub fn standard() -> Self {
		let mut result = Self::new();
		result.register(Having);
		result.register(TimeSlice);
		result.register(FrameBounds);
		result.register(Rows);
		result.register(Range);
		result.register(Unbounded);
		result.register(CurrentRow);
		result
	}

	pub fn register<N: Native + 'static>(&mut self, native: N) {
		debug!(name = native.name(), "registering native");
		self.natives.insert(native.name(), Arc::new(native));
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn Native>> {
		self.natives.get(name).cloned()
	}

	/// Looks up `name` and checks the argument count.
	pub fn resolve(&self, name: &str, arg_count: usize) -> Result<Arc<dyn Native>> {
		let native = self.get(name).ok_or_else(|| Error::UnknownFunction {
			name: name.to_string(),
		})?;
		native.arity().check(name, arg_count)?;
		Ok(native)
	}
}

impl Default for Natives {
	fn default() -> Self {
		Self::standard()
	}
}

/// Wraps a closure as a lambda operand, for hosts and generated code.
pub fn lambda<F>(returns: Type, function: F) -> Operand
where
	F: Fn(&Row) -> Result<Value> + Send + Sync + 'static,
{
	Operand::Function(Arc::new(Lambda {
		returns,
		function,
	}))
}

struct Lambda<F> {
	returns: Type,
	function: F,
}

impl<F> RowPredicate for Lambda<F>
where
	F: Fn(&Row) -> Result<Value> + Send + Sync,
{
	fn return_type(&self) -> Type {
		self.returns
	}

	fn evaluate(&self, row: &Row) -> Result<Value> {
		(self.function)(row)
	}
}

/// Binds every computed argument, in order, before `body` runs. Constant
/// arguments stay inline.
fn block(args: &[Emitted], body: String) -> String {
	let bindings: Vec<String> = args
		.iter()
		.enumerate()
		.filter(|(_, arg)| arg.constant.is_none())
		.map(|(idx, arg)| format!("let arg{} = {};", idx, arg.source))
		.collect();
	if bindings.is_empty() {
		return body;
	}
	format!("{{ {} {} }}", bindings.join(" "), body)
}

/// The operand passed for argument `idx` inside a [`block`].
fn operand(args: &[Emitted], idx: usize) -> String {
	match args.get(idx) {
		Some(arg) if arg.constant.is_some() => arg.source.clone(),
		Some(_) => format!("arg{}", idx),
		None => "::relwin_engine::Operand::undefined()".to_string(),
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::{Row, RowPredicate};
use relwin_type::{Result, Type, Value};

use super::Interpreter;
use crate::{Variables, expression::Expression};

/// A lambda whose body is walked again for every row.
pub(super) struct InterpretedLambda {
	pub(super) interpreter: Interpreter,
	pub(super) returns: Type,
	pub(super) body: Expression,
	pub(super) variables: Variables,
}

impl RowPredicate for InterpretedLambda {
	fn return_type(&self) -> Type {
		self.returns
	}

	fn evaluate(&self, row: &Row) -> Result<Value> {
		self.interpreter.apply(&self.body, &self.variables, row)?.into_value("lambda")
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_type::{Error, Result};

use super::context::ExecContext;
use crate::Operand;

/// An expression lowered into a closure tree.
pub struct CompiledExpr {
	inner: Box<dyn Fn(&ExecContext) -> Result<Operand> + Send + Sync>,
}

impl CompiledExpr {
	pub fn new(f: impl Fn(&ExecContext) -> Result<Operand> + Send + Sync + 'static) -> Self {
		Self {
			inner: Box::new(f),
		}
	}

	/// An expression that fails with `err` when executed. Resolution errors
	/// are reported at the point evaluation reaches them.
	pub fn failing(err: Error) -> Self {
		Self::new(move |_| Err(err.clone()))
	}

	pub fn execute(&self, ctx: &ExecContext) -> Result<Operand> {
		(self.inner)(ctx)
	}
}

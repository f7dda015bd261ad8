// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::Row;

use crate::{Variables, native::NativeContext};

/// Runtime context passed to `CompiledExpr::execute()`.
pub struct ExecContext<'a> {
	pub variables: &'a Variables,
	/// The row a lambda body is being applied to.
	pub row: Option<&'a Row>,
	pub native: &'a NativeContext,
}

impl<'a> ExecContext<'a> {
	pub fn new(variables: &'a Variables, native: &'a NativeContext) -> Self {
		Self {
			variables,
			row: None,
			native,
		}
	}

	pub fn with_row(&self, row: &'a Row) -> Self {
		Self {
			variables: self.variables,
			row: Some(row),
			native: self.native,
		}
	}
}

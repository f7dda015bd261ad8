// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_type::Result;

use crate::{Operand, Variables, expression::Expression};

/// An execution strategy for expressions.
///
/// Implementations differ only in how they evaluate the tree; every operator
/// call ends in the same native, so for the same input all backends produce
/// the same operand or the same error.
pub trait Backend {
	fn name(&self) -> &'static str;

	fn execute(&self, expression: &Expression, variables: &Variables) -> Result<Operand>;
}

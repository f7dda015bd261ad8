// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::having;
use relwin_type::Result;

use super::{Arity, Emitted, Native, NativeContext, block, function, operand, relation};
use crate::Operand;

/// `having(relation, row -> predicate)`
pub struct Having;

impl Native for Having {
	fn name(&self) -> &'static str {
		"having"
	}

	fn arity(&self) -> Arity {
		Arity::exactly(2)
	}

	fn invoke(&self, ctx: &NativeContext, args: Vec<Operand>) -> Result<Operand> {
		let mut args = args.into_iter();
		let relation = relation(self.name(), args.next().unwrap_or_else(Operand::undefined))?;
		let predicate = function(self.name(), args.next().unwrap_or_else(Operand::undefined))?;

		having::filter_with(&relation, predicate.as_ref(), &ctx.filter).map(Operand::Relation)
	}

	fn emit(&self, args: &[Emitted]) -> String {
		let body = format!(
			"::relwin_engine::Operand::Relation(::relwin_core::having::filter_with(\
			 &::relwin_engine::native::relation({name:?}, {relation})?, \
			 &*::relwin_engine::native::function({name:?}, {predicate})?, &ctx.filter)?)",
			name = self.name(),
			relation = operand(args, 0),
			predicate = operand(args, 1),
		);
		block(args, body)
	}
}

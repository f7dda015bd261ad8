// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use relwin_type::{Error, Result};

use crate::Operand;

/// Named operands bound for one evaluation. Cloning shares the bindings.
#[derive(Debug, Clone, Default)]
pub struct Variables(Arc<HashMap<String, Operand>>);

impl Variables {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, operand: impl Into<Operand>) -> Self {
		self.set(name, operand);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, operand: impl Into<Operand>) {
		Arc::make_mut(&mut self.0).insert(name.into(), operand.into());
	}

	pub fn get(&self, name: &str) -> Result<&Operand> {
		self.0.get(name).ok_or_else(|| Error::UnboundVariable {
			name: name.to_string(),
		})
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use relwin_type::Value;

	use super::*;

	#[test]
	fn test_clone_shares_until_written() {
		let base = Variables::new().with("a", Value::Int8(1));
		let mut other = base.clone();
		other.set("b", Value::Int8(2));

		assert_eq!(base.len(), 1);
		assert_eq!(other.len(), 2);
		assert!(base.get("b").is_err());
	}

	#[test]
	fn test_unbound() {
		let err = Variables::new().get("ts").unwrap_err();
		assert_eq!(err.to_string(), "variable 'ts' is not bound");
	}
}

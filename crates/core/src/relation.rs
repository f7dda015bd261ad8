// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeSet,
	fmt::{self, Display, Formatter},
};

use relwin_type::{Error, Result, Value};

use crate::row::{Row, RowLayout};

/// Read access to an ordered relation.
///
/// Row order is part of the contract: window functions depend on it, and
/// every derived view preserves the relative order of the rows it keeps.
pub trait RelationView {
	fn row_count(&self) -> usize;

	/// Fails with [`Error::Index`] if `index >= row_count()`.
	fn row_at(&self, index: usize) -> Result<Row>;

	/// Returns a new view without the rows at `indices`, leaving `self`
	/// untouched. Fails if any index is out of range.
	fn without_rows(&self, indices: &BTreeSet<usize>) -> Result<Self>
	where
		Self: Sized;
}

/// The in-memory relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
	layout: RowLayout,
	rows: Vec<Row>,
}

impl Relation {
	pub fn new(layout: RowLayout, rows: Vec<Vec<Value>>) -> Result<Self> {
		let rows = rows.into_iter().map(|values| Row::new(layout.clone(), values)).collect::<Result<Vec<_>>>()?;
		Ok(Self {
			layout,
			rows,
		})
	}

	pub fn empty(layout: RowLayout) -> Self {
		Self {
			layout,
			rows: Vec::new(),
		}
	}

	pub fn layout(&self) -> &RowLayout {
		&self.layout
	}

	pub fn rows(&self) -> impl Iterator<Item = &Row> {
		self.rows.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl RelationView for Relation {
	fn row_count(&self) -> usize {
		self.rows.len()
	}

	fn row_at(&self, index: usize) -> Result<Row> {
		self.rows.get(index).cloned().ok_or(Error::Index {
			index,
			row_count: self.rows.len(),
		})
	}

	fn without_rows(&self, indices: &BTreeSet<usize>) -> Result<Self> {
		if let Some(&index) = indices.iter().next_back() {
			if index >= self.rows.len() {
				return Err(Error::Index {
					index,
					row_count: self.rows.len(),
				});
			}
		}

		let rows = self
			.rows
			.iter()
			.enumerate()
			.filter(|(idx, _)| !indices.contains(idx))
			.map(|(_, row)| row.clone())
			.collect();

		Ok(Self {
			layout: self.layout.clone(),
			rows,
		})
	}
}

impl Display for Relation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.layout.names().join(", "))?;
		for row in &self.rows {
			write!(f, "\n{}", row)?;
		}
		Ok(())
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

/// Ordered field names shared by every row of a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout(Arc<RowLayoutInner>);

impl Deref for RowLayout {
	type Target = RowLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl RowLayout {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(Arc::new(RowLayoutInner {
			names: names.into_iter().map(Into::into).collect(),
		}))
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct RowLayoutInner {
	names: Vec<String>,
}

impl RowLayoutInner {
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}
}

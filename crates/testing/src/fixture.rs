// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_core::{Relation, RowLayout};
use relwin_type::{Timestamp, Value};

pub fn relation(columns: &[&str], rows: Vec<Vec<Value>>) -> Relation {
	Relation::new(RowLayout::new(columns.iter().copied()), rows).expect("rows must match the columns")
}

/// A single-column `Int8` relation.
pub fn int8_relation(column: &str, values: &[i64]) -> Relation {
	relation(&[column], values.iter().map(|v| vec![Value::Int8(*v)]).collect())
}

pub fn timestamp(text: &str) -> Timestamp {
	text.parse().expect("invalid timestamp literal")
}

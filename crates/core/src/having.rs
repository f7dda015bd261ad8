// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeSet,
	ops::Range,
	sync::atomic::{AtomicUsize, Ordering},
};

use rayon::prelude::*;
use relwin_type::{Error, Result, Type, Value};
use tracing::{debug, instrument, trace, warn};

use crate::{
	config::CoreConfig,
	interrupt::Interrupt,
	relation::RelationView,
	row::Row,
};

/// A unary row function evaluated by the filter.
///
/// Implemented by each backend's lambda representation. `return_type` is the
/// declared type, checked once before any row is evaluated.
pub trait RowPredicate: Send + Sync {
	fn return_type(&self) -> Type;

	fn evaluate(&self, row: &Row) -> Result<Value>;
}

/// A predicate backed by a plain Rust closure.
pub struct FnPredicate<F> {
	function: F,
}

impl<F> RowPredicate for FnPredicate<F>
where
	F: Fn(&Row) -> Result<bool> + Send + Sync,
{
	fn return_type(&self) -> Type {
		Type::Boolean
	}

	fn evaluate(&self, row: &Row) -> Result<Value> {
		(self.function)(row).map(Value::Boolean)
	}
}

pub fn predicate<F>(function: F) -> FnPredicate<F>
where
	F: Fn(&Row) -> Result<bool> + Send + Sync,
{
	FnPredicate {
		function,
	}
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
	pub interrupt: Option<Interrupt>,
	/// Minimum row count for parallel evaluation; `None` disables it.
	pub parallel_threshold: Option<usize>,
	pub chunk_size: usize,
}

impl Default for FilterOptions {
	fn default() -> Self {
		Self::from_config(&CoreConfig::default())
	}
}

impl FilterOptions {
	pub fn from_config(config: &CoreConfig) -> Self {
		Self {
			interrupt: None,
			parallel_threshold: config.having.parallel_threshold,
			chunk_size: config.having.chunk_size.max(1),
		}
	}

	pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
		self.interrupt = Some(interrupt);
		self
	}

	pub fn sequential(mut self) -> Self {
		self.parallel_threshold = None;
		self
	}

	fn is_parallel(&self, row_count: usize) -> bool {
		matches!(self.parallel_threshold, Some(threshold) if row_count >= threshold && row_count > self.chunk_size)
	}
}

/// Keeps the rows of `relation` for which `predicate` yields `true`.
pub fn filter<R>(relation: &R, predicate: &dyn RowPredicate) -> Result<R>
where
	R: RelationView + Sync,
{
	filter_with(relation, predicate, &FilterOptions::default())
}

/// Keeps the rows of `relation` for which `predicate` yields `true`.
///
/// `false` and `Undefined` exclude a row; any other result aborts the call.
/// Survivors keep their original relative order.
#[instrument(name = "having::filter", level = "debug", skip_all, fields(rows = relation.row_count()))]
pub fn filter_with<R>(relation: &R, predicate: &dyn RowPredicate, options: &FilterOptions) -> Result<R>
where
	R: RelationView + Sync,
{
	let return_type = predicate.return_type();
	if return_type != Type::Boolean {
		return Err(Error::type_mismatch("having", "a function that returns Boolean", return_type));
	}

	let row_count = relation.row_count();
	let excluded = if options.is_parallel(row_count) {
		let chunks = partition(row_count, options.chunk_size);
		debug!(partitions = chunks.len(), chunk_size = options.chunk_size, "evaluating predicate in parallel");

		let failure = FirstFailure::new();
		let partials: Vec<Result<Vec<usize>>> = chunks
			.into_par_iter()
			.map(|range| evaluate_range(relation, predicate, range, options, Some(&failure)))
			.collect();

		let mut excluded = BTreeSet::new();
		for partial in partials {
			excluded.extend(partial?);
		}
		excluded
	} else {
		evaluate_range(relation, predicate, 0..row_count, options, None)?.into_iter().collect()
	};

	debug!(excluded = excluded.len(), kept = row_count - excluded.len(), "predicate evaluated");
	relation.without_rows(&excluded)
}

fn partition(row_count: usize, chunk_size: usize) -> Vec<Range<usize>> {
	(0..row_count).step_by(chunk_size).map(|start| start..(start + chunk_size).min(row_count)).collect()
}

/// Lowest row index at which a parallel partition failed.
///
/// Partitions stop once they pass that row, so the error reported after the
/// merge is still the first one in row order.
struct FirstFailure(AtomicUsize);

impl FirstFailure {
	fn new() -> Self {
		Self(AtomicUsize::new(usize::MAX))
	}

	fn record(&self, row: usize) {
		self.0.fetch_min(row, Ordering::AcqRel);
	}

	fn is_before(&self, row: usize) -> bool {
		self.0.load(Ordering::Acquire) < row
	}
}

fn evaluate_range<R>(
	relation: &R,
	predicate: &dyn RowPredicate,
	range: Range<usize>,
	options: &FilterOptions,
	failure: Option<&FirstFailure>,
) -> Result<Vec<usize>>
where
	R: RelationView,
{
	let mut excluded = Vec::new();
	for idx in range {
		if let Some(failure) = failure {
			if failure.is_before(idx) {
				trace!(row = idx, "partition stopped after an earlier failure");
				break;
			}
		}

		if let Err(err) = evaluate_row(relation, predicate, idx, options, &mut excluded) {
			if let Some(failure) = failure {
				failure.record(idx);
			}
			return Err(err);
		}
	}
	Ok(excluded)
}

fn evaluate_row<R>(
	relation: &R,
	predicate: &dyn RowPredicate,
	idx: usize,
	options: &FilterOptions,
	excluded: &mut Vec<usize>,
) -> Result<()>
where
	R: RelationView,
{
	if let Some(interrupt) = &options.interrupt {
		if let Err(err) = interrupt.check(idx) {
			warn!(row = idx, "having cancelled");
			return Err(err);
		}
	}

	let row = relation.row_at(idx)?;
	if !keep(predicate.evaluate(&row)?)? {
		excluded.push(idx);
	}
	Ok(())
}

fn keep(result: Value) -> Result<bool> {
	match result {
		Value::Boolean(value) => Ok(value),
		Value::Undefined => Ok(false),
		other => Err(Error::type_mismatch("having", Type::Boolean, other.get_type())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{relation::Relation, row::RowLayout};

	fn relation(values: &[i64]) -> Relation {
		Relation::new(RowLayout::new(["value"]), values.iter().map(|v| vec![Value::Int8(*v)]).collect()).unwrap()
	}

	fn values(relation: &Relation) -> Vec<i64> {
		relation.rows().map(|row| row.int8("value").unwrap()).collect()
	}

	struct Returning(Type, Value);

	impl RowPredicate for Returning {
		fn return_type(&self) -> Type {
			self.0
		}

		fn evaluate(&self, _row: &Row) -> Result<Value> {
			Ok(self.1.clone())
		}
	}

	#[test]
	fn test_filter_greater_than() {
		let input = relation(&[1, 5, 2, 8, 4]);
		let result = filter(&input, &predicate(|row| Ok(row.int8("value")? > 3))).unwrap();
		assert_eq!(values(&result), vec![5, 8, 4]);
		assert_eq!(values(&input), vec![1, 5, 2, 8, 4]);
	}

	#[test]
	fn test_always_true_keeps_everything() {
		let input = relation(&[3, 1, 2]);
		let result = filter(&input, &predicate(|_| Ok(true))).unwrap();
		assert_eq!(result, input);
	}

	#[test]
	fn test_always_false_keeps_nothing() {
		let result = filter(&relation(&[3, 1, 2]), &predicate(|_| Ok(false))).unwrap();
		assert_eq!(result.row_count(), 0);
	}

	#[test]
	fn test_empty_relation() {
		let result = filter(&relation(&[]), &predicate(|_| Ok(true))).unwrap();
		assert_eq!(result.row_count(), 0);
	}

	#[test]
	fn test_undefined_result_excludes() {
		let result = filter(&relation(&[1, 2]), &Returning(Type::Boolean, Value::Undefined)).unwrap();
		assert_eq!(result.row_count(), 0);
	}

	#[test]
	fn test_declared_return_type_checked_first() {
		let calls = AtomicUsize::new(0);

		struct Counting<'a>(&'a AtomicUsize);
		impl RowPredicate for Counting<'_> {
			fn return_type(&self) -> Type {
				Type::Int8
			}

			fn evaluate(&self, _row: &Row) -> Result<Value> {
				self.0.fetch_add(1, Ordering::SeqCst);
				Ok(Value::Boolean(true))
			}
		}

		let err = filter(&relation(&[1, 2, 3]), &Counting(&calls)).unwrap_err();
		assert_eq!(err.to_string(), "Expected a function that returns Boolean, found: Int8");
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn test_non_boolean_result_aborts() {
		let err = filter(&relation(&[1]), &Returning(Type::Boolean, Value::utf8("true"))).unwrap_err();
		assert_eq!(err.to_string(), "Expected Boolean, found: Utf8");
	}

	#[test]
	fn test_predicate_error_propagates() {
		let err = filter(&relation(&[1, 2]), &predicate(|row| Ok(row.int8("missing")? > 0))).unwrap_err();
		assert_eq!(err.code(), "QUERY_001");
	}

	#[test]
	fn test_cancelled_between_rows() {
		let interrupt = Interrupt::new();
		let seen = AtomicUsize::new(0);
		let cancel = interrupt.clone();
		let pred = predicate(|_| {
			if seen.fetch_add(1, Ordering::SeqCst) == 1 {
				cancel.cancel();
			}
			Ok(true)
		});

		let options = FilterOptions::default().sequential().with_interrupt(interrupt);
		let err = filter_with(&relation(&[1, 2, 3, 4]), &pred, &options).unwrap_err();
		assert_eq!(
			err,
			Error::Cancelled {
				row: 2
			}
		);
	}

	#[test]
	fn test_parallel_matches_sequential() {
		let data: Vec<i64> = (0..1000).map(|v| (v * 7919) % 1000).collect();
		let input = relation(&data);
		let pred = predicate(|row| Ok(row.int8("value")? % 3 == 0));

		let sequential = filter_with(&input, &pred, &FilterOptions::default().sequential()).unwrap();
		let parallel = filter_with(
			&input,
			&pred,
			&FilterOptions {
				interrupt: None,
				parallel_threshold: Some(10),
				chunk_size: 64,
			},
		)
		.unwrap();

		assert_eq!(parallel, sequential);
	}

	#[test]
	fn test_parallel_reports_first_error_in_row_order() {
		let input = relation(&(0..100).collect::<Vec<_>>());
		let pred = predicate(|row| {
			let value = row.int8("value")?;
			if value == 30 || value == 90 {
				return Err(Error::invalid_argument("test", format!("row {}", value)));
			}
			Ok(true)
		});

		let options = FilterOptions {
			interrupt: None,
			parallel_threshold: Some(1),
			chunk_size: 10,
		};
		let err = filter_with(&input, &pred, &options).unwrap_err();
		assert_eq!(err, Error::invalid_argument("test", "row 30"));
	}

	#[test]
	fn test_parallel_failure_stops_later_partitions() {
		let input = relation(&(0..100).collect::<Vec<_>>());
		let late_rows = AtomicUsize::new(0);
		let pred = predicate(|row| {
			let value = row.int8("value")?;
			if value == 5 {
				return Err(Error::invalid_argument("test", "row 5"));
			}
			if value >= 10 {
				late_rows.fetch_add(1, Ordering::SeqCst);
				std::thread::sleep(std::time::Duration::from_millis(10));
			}
			Ok(true)
		});

		let options = FilterOptions {
			interrupt: None,
			parallel_threshold: Some(1),
			chunk_size: 10,
		};
		let err = filter_with(&input, &pred, &options).unwrap_err();
		assert_eq!(err, Error::invalid_argument("test", "row 5"));
		// each later partition sees the failure after at most a couple of rows
		assert!(late_rows.load(Ordering::SeqCst) < 45);
	}

	#[test]
	fn test_slow_earlier_error_still_wins() {
		let input = relation(&(0..100).collect::<Vec<_>>());
		let pred = predicate(|row| {
			let value = row.int8("value")?;
			if value == 30 {
				std::thread::sleep(std::time::Duration::from_millis(20));
				return Err(Error::invalid_argument("test", "row 30"));
			}
			if value == 90 {
				return Err(Error::invalid_argument("test", "row 90"));
			}
			Ok(true)
		});

		let options = FilterOptions {
			interrupt: None,
			parallel_threshold: Some(1),
			chunk_size: 10,
		};
		let err = filter_with(&input, &pred, &options).unwrap_err();
		assert_eq!(err, Error::invalid_argument("test", "row 30"));
	}

	#[test]
	fn test_partition() {
		assert_eq!(partition(10, 4), vec![0..4, 4..8, 8..10]);
		assert!(partition(0, 4).is_empty());
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Range,
};

use relwin_type::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How the frame's extent is measured. Both modes resolve against row
/// indices; ordering-value semantics for `Range` belong to the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameMode {
	Rows,
	Range,
}

/// One side of a window frame. `Offset(n)` counts rows before the current
/// row for the lower side and after it for the upper side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameBound {
	Unbounded,
	CurrentRow,
	Offset(usize),
}

impl FrameBound {
	/// Converts a host integer into an offset bound, rejecting negatives.
	pub fn offset(n: i64) -> Result<Self> {
		usize::try_from(n)
			.map(FrameBound::Offset)
			.map_err(|_| Error::invalid_frame(format!("offset must not be negative, got {}", n)))
	}

	fn lower(&self, current_row: usize) -> usize {
		match self {
			FrameBound::Unbounded => 0,
			FrameBound::CurrentRow => current_row,
			FrameBound::Offset(n) => current_row.saturating_sub(*n),
		}
	}

	fn upper(&self, current_row: usize, last_row: usize) -> usize {
		match self {
			FrameBound::Unbounded => last_row,
			FrameBound::CurrentRow => current_row,
			FrameBound::Offset(n) => current_row.saturating_add(*n).min(last_row),
		}
	}

	fn fmt_side(&self, f: &mut Formatter<'_>, direction: &str) -> fmt::Result {
		match self {
			FrameBound::Unbounded => write!(f, "unbounded {}", direction),
			FrameBound::CurrentRow => f.write_str("current row"),
			FrameBound::Offset(n) => write!(f, "{} {}", n, direction),
		}
	}
}

impl Display for FrameBound {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FrameBound::Unbounded => f.write_str("unbounded"),
			FrameBound::CurrentRow => f.write_str("current row"),
			FrameBound::Offset(n) => write!(f, "{}", n),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSpec {
	pub mode: FrameMode,
	pub lower: FrameBound,
	pub upper: FrameBound,
}

impl FrameSpec {
	pub fn new(mode: FrameMode, lower: FrameBound, upper: FrameBound) -> Self {
		Self {
			mode,
			lower,
			upper,
		}
	}

	pub fn rows(lower: FrameBound, upper: FrameBound) -> Self {
		Self::new(FrameMode::Rows, lower, upper)
	}

	pub fn range(lower: FrameBound, upper: FrameBound) -> Self {
		Self::new(FrameMode::Range, lower, upper)
	}

	pub fn bounds(&self, current_row: usize, row_count: usize) -> Result<FrameBounds> {
		bounds(self, current_row, row_count)
	}

	/// Bounds for every row of a partition of `row_count` rows.
	pub fn bounds_all(&self, row_count: usize) -> Result<Vec<FrameBounds>> {
		(0..row_count).map(|row| bounds(self, row, row_count)).collect()
	}
}

impl Display for FrameSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.mode {
			FrameMode::Rows => f.write_str("rows(")?,
			FrameMode::Range => f.write_str("range(")?,
		}
		self.lower.fmt_side(f, "preceding")?;
		f.write_str(", ")?;
		self.upper.fmt_side(f, "following")?;
		f.write_str(")")
	}
}

/// Inclusive row-index bounds of a frame. `low > high` denotes an empty frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameBounds {
	pub low: usize,
	pub high: usize,
}

impl FrameBounds {
	pub fn new(low: usize, high: usize) -> Self {
		Self {
			low,
			high,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.low > self.high
	}

	pub fn len(&self) -> usize {
		if self.is_empty() {
			0
		} else {
			self.high - self.low + 1
		}
	}

	/// The half-open index range covered by the frame.
	pub fn as_range(&self) -> Range<usize> {
		if self.is_empty() {
			self.low..self.low
		} else {
			self.low..self.high + 1
		}
	}
}

impl Display for FrameBounds {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.low, self.high)
	}
}

/// Computes the inclusive bounds of `frame` for `current_row` within a
/// partition of `row_count` rows.
#[instrument(name = "frame::bounds", level = "trace")]
pub fn bounds(frame: &FrameSpec, current_row: usize, row_count: usize) -> Result<FrameBounds> {
	if row_count == 0 {
		return Err(Error::invalid_frame("frame over an empty relation"));
	}
	if current_row >= row_count {
		return Err(Error::Index {
			index: current_row,
			row_count,
		});
	}

	let last_row = row_count - 1;
	Ok(FrameBounds::new(frame.lower.lower(current_row), frame.upper.upper(current_row, last_row)))
}

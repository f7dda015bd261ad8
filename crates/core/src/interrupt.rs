// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

use relwin_type::{Error, Result};

/// Cancellation flag injected by the enclosing query executor.
///
/// Clones share the same flag. Operators poll it between rows and abort with
/// [`Error::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
	cancelled: Arc<AtomicBool>,
}

impl Interrupt {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Release);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Acquire)
	}

	pub fn check(&self, row: usize) -> Result<()> {
		if self.is_cancelled() {
			return Err(Error::Cancelled {
				row,
			});
		}
		Ok(())
	}
}

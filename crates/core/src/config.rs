// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relwin_type::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs shared by both execution backends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
	pub having: HavingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HavingConfig {
	/// Minimum row count for parallel predicate evaluation. `None` keeps the
	/// filter sequential.
	pub parallel_threshold: Option<usize>,
	/// Rows per parallel partition.
	pub chunk_size: usize,
}

impl Default for HavingConfig {
	fn default() -> Self {
		Self {
			parallel_threshold: Some(4096),
			chunk_size: 1024,
		}
	}
}

impl CoreConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		let config: CoreConfig = serde_json::from_str(json).map_err(|err| Error::Config {
			reason: err.to_string(),
		})?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.having.chunk_size == 0 {
			return Err(Error::Config {
				reason: "having.chunk_size must be at least 1".to_string(),
			});
		}
		Ok(())
	}
}

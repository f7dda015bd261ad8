// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value model shared by the relwin evaluation core and its execution
//! backends: scalar [`Value`]s, their [`Type`]s, zoned [`Timestamp`]s,
//! [`DurationUnit`]s and the unified [`Error`].

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic, Result};
pub use value::{
	Value,
	temporal::{DurationUnit, Timestamp, Zone},
	r#type::Type,
};

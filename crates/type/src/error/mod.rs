// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

mod diagnostic;

pub type Result<T> = std::result::Result<T, Error>;

/// Rendered error information handed to the enclosing query engine.
///
/// The `message` is what a host reports verbatim as the query failure; the
/// remaining fields are advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("Expected {expected}, found: {actual}")]
	TypeMismatch {
		context: String,
		expected: String,
		actual: String,
	},

	#[error("row index {index} out of range for relation with {row_count} rows")]
	Index {
		index: usize,
		row_count: usize,
	},

	#[error("invalid window frame: {reason}")]
	InvalidFrame {
		reason: String,
	},

	#[error("invalid argument for {function}: {reason}")]
	InvalidArgument {
		function: String,
		reason: String,
	},

	#[error("unsupported duration unit '{unit}'")]
	UnsupportedUnit {
		unit: String,
	},

	#[error("column '{name}' not found")]
	ColumnNotFound {
		name: String,
	},

	#[error("unknown function: {name}")]
	UnknownFunction {
		name: String,
	},

	#[error("function {name} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		name: String,
		expected: String,
		actual: usize,
	},

	#[error("variable '{name}' is not bound")]
	UnboundVariable {
		name: String,
	},

	#[error("evaluation cancelled at row {row}")]
	Cancelled {
		row: usize,
	},

	#[error("invalid timestamp '{text}': {reason}")]
	InvalidTimestamp {
		text: String,
		reason: String,
	},

	#[error("invalid configuration: {reason}")]
	Config {
		reason: String,
	},
}

impl Error {
	pub fn type_mismatch(context: impl Into<String>, expected: impl Display, actual: impl Display) -> Self {
		Error::TypeMismatch {
			context: context.into(),
			expected: expected.to_string(),
			actual: actual.to_string(),
		}
	}

	pub fn invalid_frame(reason: impl Into<String>) -> Self {
		Error::InvalidFrame {
			reason: reason.into(),
		}
	}

	pub fn invalid_argument(function: impl Into<String>, reason: impl Into<String>) -> Self {
		Error::InvalidArgument {
			function: function.into(),
			reason: reason.into(),
		}
	}

	/// Stable diagnostic code for this error.
	pub fn code(&self) -> &'static str {
		match self {
			Error::TypeMismatch {
				..
			} => "TYPE_001",
			Error::Index {
				..
			} => "INDEX_001",
			Error::InvalidFrame {
				..
			} => "FRAME_001",
			Error::InvalidArgument {
				..
			} => "ARGUMENT_001",
			Error::UnsupportedUnit {
				..
			} => "UNIT_001",
			Error::ColumnNotFound {
				..
			} => "QUERY_001",
			Error::UnboundVariable {
				..
			} => "QUERY_002",
			Error::Cancelled {
				..
			} => "QUERY_003",
			Error::UnknownFunction {
				..
			} => "FUNCTION_001",
			Error::ArityMismatch {
				..
			} => "FUNCTION_002",
			Error::InvalidTimestamp {
				..
			} => "TEMPORAL_001",
			Error::Config {
				..
			} => "CONFIG_001",
		}
	}

	pub fn diagnostic(&self) -> Diagnostic {
		self.clone().into_diagnostic()
	}
}

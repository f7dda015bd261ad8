// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Error, IntoDiagnostic};

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		let code = self.code().to_string();
		let message = self.to_string();
		match self {
			Error::TypeMismatch {
				context,
				expected,
				..
			} => Diagnostic {
				code,
				message,
				label: Some(format!("{} received a value of the wrong kind", context)),
				help: Some(format!("Provide {} to {}", expected, context)),
				notes: vec![],
				cause: None,
			},
			Error::Index {
				row_count,
				..
			} => Diagnostic {
				code,
				message,
				label: Some("row index out of range".to_string()),
				help: None,
				notes: vec![format!(
					"valid row indices are 0..{} (this indicates a bug in the caller)",
					row_count
				)],
				cause: None,
			},
			Error::InvalidFrame {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("window frame cannot be evaluated".to_string()),
				help: Some(
					"A frame needs a non-empty partition and non-negative offsets, e.g. rows(2, 1)"
						.to_string(),
				),
				notes: vec![
					"lower offsets count rows before the current row".to_string(),
					"upper offsets count rows after the current row".to_string(),
				],
				cause: None,
			},
			Error::InvalidArgument {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("invalid argument".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			Error::UnsupportedUnit {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("unknown duration unit".to_string()),
				help: Some(
					"Use one of SECONDS, MINUTES, HOURS, DAYS, WEEKS, MONTHS, QUARTERS, YEARS"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
			Error::ColumnNotFound {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("this column does not exist in the current row".to_string()),
				help: Some("check for typos or ensure the column is defined in the input".to_string()),
				notes: vec![],
				cause: None,
			},
			Error::UnboundVariable {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("unbound variable".to_string()),
				help: Some("bind the variable before evaluating the expression".to_string()),
				notes: vec![],
				cause: None,
			},
			Error::Cancelled {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("query was cancelled by the executor".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			Error::UnknownFunction {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("unknown function".to_string()),
				help: Some("Check the function name and available functions".to_string()),
				notes: vec![],
				cause: None,
			},
			Error::ArityMismatch {
				name,
				expected,
				..
			} => Diagnostic {
				code,
				message,
				label: Some("wrong number of arguments".to_string()),
				help: Some(format!("Provide {} arguments to function {}", expected, name)),
				notes: vec![],
				cause: None,
			},
			Error::InvalidTimestamp {
				..
			} => Diagnostic {
				code,
				message,
				label: Some("timestamp could not be parsed".to_string()),
				help: Some("Use RFC 3339, e.g. 2024-03-15T10:47:33Z or 2024-03-15T10:47:33+01:00[Europe/Paris]"
					.to_string()),
				notes: vec![],
				cause: None,
			},
			Error::Config {
				..
			} => Diagnostic {
				code,
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

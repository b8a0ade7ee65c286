// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn order_by_not_scalar(expression: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		message: "ORDER BY column/expression must be a scalar".to_string(),
		label: Some(format!("'{}' yields an array per row", expression)),
		help: Some("sort on a scalar column or reduce the array to a scalar first".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unsupported_sort_kind(expression: &str, kind: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		message: format!("cannot sort on '{}' of data kind {}", expression, kind.into()),
		label: Some("this data kind has no defined ordering".to_string()),
		help: None,
		notes: vec![
			"sortable kinds are Bool, UChar, Short, UShort, Int, UInt, Int64, Float, Double, Complex, DComplex and String"
				.to_string(),
		],
		cause: None,
	}
}

pub fn invalid_fetch(expression: &str, requested: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_003".to_string(),
		message: format!("cannot get {} values from '{}' of data kind {}", requested, expression, actual),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn row_out_of_range(expression: &str, row: u64, len: usize) -> Diagnostic {
	Diagnostic {
		code: "QUERY_004".to_string(),
		message: format!("row {} is out of range for '{}' with {} rows", row, expression, len),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn sort_key_length_mismatch(expected: usize, found: usize) -> Diagnostic {
	Diagnostic {
		code: "QUERY_005".to_string(),
		message: format!("sort key holds {} values but {} rows are sorted", found, expected),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

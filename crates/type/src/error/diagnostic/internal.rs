// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Creates an internal error diagnostic with source location and context.
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).replace(".rs", ""), line);

	let help = format!(
		"This is an internal error that should never occur in normal operation.\n\
		 Error ID: {}\n\
		 Location: {}:{}:{}\n\
		 Module: {}\n\
		 Version: {}",
		error_id,
		file,
		line,
		column,
		module_path,
		env!("CARGO_PKG_VERSION"),
	);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(help),
		notes: vec![
			format!("Error occurred in function: {}", function),
			"This error indicates a critical internal inconsistency.".to_string(),
		],
		cause: None,
	}
}

/// Internal error without source location.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown", "unknown")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal_error_literal_string() {
		let diagnostic = crate::internal_error!("simple error message");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("simple error message"));
		assert!(diagnostic.label.as_ref().unwrap().contains("Internal invariant violated"));
	}

	#[test]
	fn test_internal_function() {
		let diagnostic = internal("basic internal error");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.label.as_ref().unwrap().contains("unknown:0:0"));
	}

	#[test]
	fn test_internal_with_context_function() {
		let diagnostic =
			internal_with_context("context error", "src/test.rs", 100, 20, "test_function", "test::module");

		assert!(diagnostic.message.contains("[ERR-test:100]"));
		assert!(diagnostic.notes.iter().any(|n| n.contains("test_function")));
		let help = diagnostic.help.as_ref().unwrap();
		assert!(help.contains("src/test.rs:100:20"));
		assert!(help.contains("test::module"));
	}
}

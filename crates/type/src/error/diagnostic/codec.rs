// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn unsupported_version(version: u32) -> Diagnostic {
	Diagnostic {
		code: "CODEC_001".to_string(),
		message: format!("unsupported column descriptor format version {}", version),
		label: None,
		help: Some("only format version 1 can be read".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unexpected_end(needed: usize, remaining: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_002".to_string(),
		message: format!("unexpected end of input: needed {} bytes, {} remaining", needed, remaining),
		label: Some("the descriptor stream is truncated".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_utf8(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CODEC_003".to_string(),
		message: format!("invalid UTF-8 in descriptor string: {}", reason.into()),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_marker(what: &str, marker: u8) -> Diagnostic {
	Diagnostic {
		code: "CODEC_004".to_string(),
		message: format!("invalid {} marker {:#04x}", what, marker),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn length_overflow(len: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_005".to_string(),
		message: format!("length {} does not fit the descriptor format", len),
		label: None,
		help: None,
		notes: vec!["lengths are written as 32-bit unsigned integers".to_string()],
		cause: None,
	}
}

pub fn nesting_too_deep(limit: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_006".to_string(),
		message: format!("descriptor nesting exceeds {} levels", limit),
		label: Some("keyword records and sub-tables nest too deeply".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

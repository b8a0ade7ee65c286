// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{DataKind, error::diagnostic::Diagnostic};

pub fn unknown_descriptor_kind(tag: &str) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		message: format!("unknown column descriptor kind '{}'", tag),
		label: Some("no constructor is registered for this type tag".to_string()),
		help: Some("register the descriptor kind before reading descriptors that use it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn kind_mismatch(tag: &str, expected: DataKind, found: DataKind) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_002".to_string(),
		message: format!("column descriptor '{}' holds data kind {} but {} was stored", tag, expected, found),
		label: Some("stored data kind does not match the descriptor kind".to_string()),
		help: None,
		notes: vec!["the descriptor was probably written by a different registration of this tag".to_string()],
		cause: None,
	}
}

pub fn empty_descriptor() -> Diagnostic {
	Diagnostic {
		code: "COLUMN_003".to_string(),
		message: "column descriptor is empty".to_string(),
		label: Some("a previous read of this descriptor failed".to_string()),
		help: Some("assign or read a descriptor before using it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unknown_kind_code(code: u8) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_004".to_string(),
		message: format!("unknown data kind code {:#04x}", code),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn descriptor_decode_failed(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_005".to_string(),
		message: format!("failed to read column descriptor '{}'", name),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

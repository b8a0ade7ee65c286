// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Binary form of column descriptors.
//!
//! A descriptor is written as a little-endian `u32` format version, the
//! registry tag of its variant as a length-prefixed UTF-8 string, and the
//! variant payload. Reading looks the tag up in the
//! [`ColumnRegistry`](crate::ColumnRegistry), constructs an empty variant and
//! lets it read its own payload.

use std::string::FromUtf8Error;

use tabula_type::diagnostic::{codec, column};
use tracing::instrument;

use crate::{ColumnDesc, ColumnRegistry, TableAttr};

mod io;
mod keyword;
mod value;

pub use io::{Reader, Writer};
pub use keyword::{decode_keywords, encode_keywords};
pub use value::ValueCodec;

pub const FORMAT_VERSION: u32 = 1;

/// Deepest nesting of keyword records and sub-table columns a reader accepts.
pub const MAX_NESTING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
	#[error("unsupported format version {0}")]
	UnsupportedVersion(u32),
	#[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
	UnexpectedEnd {
		needed: usize,
		remaining: usize,
	},
	#[error("invalid UTF-8: {0}")]
	InvalidUtf8(#[from] FromUtf8Error),
	#[error("invalid {what} marker {marker:#04x}")]
	InvalidMarker {
		what: &'static str,
		marker: u8,
	},
	#[error("length {0} does not fit in 32 bits")]
	LengthOverflow(usize),
	#[error("nesting deeper than {0} levels")]
	NestingTooDeep(usize),
}

impl From<CodecError> for tabula_type::Error {
	fn from(err: CodecError) -> Self {
		let diagnostic = match err {
			CodecError::UnsupportedVersion(version) => codec::unsupported_version(version),
			CodecError::UnexpectedEnd {
				needed,
				remaining,
			} => codec::unexpected_end(needed, remaining),
			CodecError::InvalidUtf8(err) => codec::invalid_utf8(err.to_string()),
			CodecError::InvalidMarker {
				what,
				marker,
			} => codec::invalid_marker(what, marker),
			CodecError::LengthOverflow(len) => codec::length_overflow(len),
			CodecError::NestingTooDeep(limit) => codec::nesting_too_deep(limit),
		};
		tabula_type::Error(diagnostic)
	}
}

impl ColumnDesc {
	/// Writes version, tag and payload.
	#[instrument(name = "column::desc::encode", level = "trace", skip_all, fields(parent = parent.name()))]
	pub fn encode(&self, writer: &mut Writer, parent: &TableAttr) -> crate::Result<()> {
		let variant = self.try_column()?;
		writer.put_u32(FORMAT_VERSION);
		writer.put_str(&variant.class_name())?;
		variant.encode(writer, parent)
	}

	pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
		let mut writer = Writer::new();
		self.encode(&mut writer, &TableAttr::default())?;
		Ok(writer.into_bytes())
	}

	/// Replaces the variant of this envelope with one read from `reader`.
	///
	/// The current variant is dropped first. If reading fails the envelope
	/// is left empty.
	#[instrument(name = "column::desc::decode", level = "trace", skip_all, fields(parent = parent.name()))]
	pub fn decode_into(&mut self, reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<()> {
		self.column = None;

		let version = reader.get_u32()?;
		if version != FORMAT_VERSION {
			return Err(CodecError::UnsupportedVersion(version).into());
		}

		let tag = reader.get_string()?;
		let ctor = ColumnRegistry::lookup(&tag);
		let mut variant = ctor(&tag)?;
		variant.decode(reader, parent).map_err(|err| err.with_context(column::descriptor_decode_failed(&tag)))?;

		self.column = Some(variant);
		Ok(())
	}

	pub fn decode(reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<ColumnDesc> {
		let mut desc = ColumnDesc {
			column: None,
		};
		desc.decode_into(reader, parent)?;
		Ok(desc)
	}

	pub fn from_bytes(bytes: &[u8]) -> crate::Result<ColumnDesc> {
		Self::decode(&mut Reader::new(bytes), &TableAttr::default())
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Keyword, Keywords};

use super::{CodecError, Reader, Writer};
use crate::TableAttr;

const BOOL: u8 = 1;
const INT: u8 = 2;
const INT64: u8 = 3;
const DOUBLE: u8 = 4;
const STRING: u8 = 5;
const TABLE: u8 = 6;
const RECORD: u8 = 7;

const ABSOLUTE: u8 = 0;
const RELATIVE: u8 = 1;

/// Writes a keyword set. Table references below `parent` are stored
/// relative to it so the owning table can be moved.
pub fn encode_keywords(writer: &mut Writer, keywords: &Keywords, parent: &TableAttr) -> Result<(), CodecError> {
	writer.put_len(keywords.len())?;
	for (name, value) in keywords.iter() {
		writer.put_str(name)?;
		encode_keyword(writer, value, parent)?;
	}
	Ok(())
}

fn encode_keyword(writer: &mut Writer, keyword: &Keyword, parent: &TableAttr) -> Result<(), CodecError> {
	match keyword {
		Keyword::Bool(value) => {
			writer.put_u8(BOOL);
			writer.put_bool(*value);
		}
		Keyword::Int(value) => {
			writer.put_u8(INT);
			writer.put_i32(*value);
		}
		Keyword::Int64(value) => {
			writer.put_u8(INT64);
			writer.put_i64(*value);
		}
		Keyword::Double(value) => {
			writer.put_u8(DOUBLE);
			writer.put_f64(*value);
		}
		Keyword::String(value) => {
			writer.put_u8(STRING);
			writer.put_str(value)?;
		}
		Keyword::Table(path) => {
			writer.put_u8(TABLE);
			match parent.relative_path(path) {
				Some(relative) => {
					writer.put_u8(RELATIVE);
					writer.put_str(relative)?;
				}
				None => {
					writer.put_u8(ABSOLUTE);
					writer.put_str(path)?;
				}
			}
		}
		Keyword::Record(record) => {
			writer.put_u8(RECORD);
			encode_keywords(writer, record, parent)?;
		}
	}
	Ok(())
}

pub fn decode_keywords(reader: &mut Reader<'_>, parent: &TableAttr) -> Result<Keywords, CodecError> {
	let len = reader.get_len()?;
	let mut keywords = Keywords::new();
	for _ in 0..len {
		let name = reader.get_string()?;
		let value = decode_keyword(reader, parent)?;
		keywords.define(name, value);
	}
	Ok(keywords)
}

fn decode_keyword(reader: &mut Reader<'_>, parent: &TableAttr) -> Result<Keyword, CodecError> {
	let keyword = match reader.get_u8()? {
		BOOL => Keyword::Bool(reader.get_bool()?),
		INT => Keyword::Int(reader.get_i32()?),
		INT64 => Keyword::Int64(reader.get_i64()?),
		DOUBLE => Keyword::Double(reader.get_f64()?),
		STRING => Keyword::String(reader.get_string()?),
		TABLE => match reader.get_u8()? {
			RELATIVE => Keyword::Table(parent.absolute_path(&reader.get_string()?)),
			ABSOLUTE => Keyword::Table(reader.get_string()?),
			marker => {
				return Err(CodecError::InvalidMarker {
					what: "table path",
					marker,
				});
			}
		},
		RECORD => Keyword::Record(reader.nested(|reader| decode_keywords(reader, parent))?),
		marker => {
			return Err(CodecError::InvalidMarker {
				what: "keyword",
				marker,
			});
		}
	};
	Ok(keyword)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::codec::MAX_NESTING;

	fn round_trip(keywords: &Keywords, write: &TableAttr, read: &TableAttr) -> Keywords {
		let mut writer = Writer::new();
		encode_keywords(&mut writer, keywords, write).unwrap();
		let bytes = writer.into_bytes();
		let mut reader = Reader::new(&bytes);
		let result = decode_keywords(&mut reader, read).unwrap();
		assert!(reader.is_empty());
		result
	}

	#[test]
	fn test_all_kinds() {
		let keywords = Keywords::new()
			.with("flag", Keyword::Bool(true))
			.with("count", Keyword::Int(-3))
			.with("epoch", Keyword::Int64(1 << 40))
			.with("scale", Keyword::Double(0.001))
			.with("unit", Keyword::String("Hz".to_string()))
			.with("frame", Keyword::Record(Keywords::new().with("ref", Keyword::String("LSRK".to_string()))));

		let attr = TableAttr::new("/data/obs.tab", false);
		assert_eq!(round_trip(&keywords, &attr, &attr), keywords);
	}

	#[test]
	fn test_table_paths_follow_parent() {
		let keywords = Keywords::new()
			.with("inner", Keyword::Table("/data/obs.tab/SOURCE".to_string()))
			.with("outer", Keyword::Table("/elsewhere/cal.tab".to_string()))
			.with(
				"nested",
				Keyword::Record(Keywords::new().with("t", Keyword::Table("/data/obs.tab/SPW".to_string()))),
			);

		let moved = round_trip(&keywords, &TableAttr::new("/data/obs.tab", false), &TableAttr::new("/copy.tab", false));

		assert_eq!(moved.get("inner"), Some(&Keyword::Table("/copy.tab/SOURCE".to_string())));
		assert_eq!(moved.get("outer"), Some(&Keyword::Table("/elsewhere/cal.tab".to_string())));
		let Some(Keyword::Record(nested)) = moved.get("nested") else {
			panic!("expected a record");
		};
		assert_eq!(nested.get("t"), Some(&Keyword::Table("/copy.tab/SPW".to_string())));
	}

	#[test]
	fn test_deep_records_are_rejected() {
		let mut bytes = Vec::new();
		for _ in 0..10_000 {
			bytes.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0, RECORD]);
		}
		let mut reader = Reader::new(&bytes);
		assert_eq!(
			decode_keywords(&mut reader, &TableAttr::default()),
			Err(CodecError::NestingTooDeep(MAX_NESTING))
		);
	}

	#[test]
	fn test_records_at_the_limit() {
		let mut record = Keywords::new().with("leaf", Keyword::Int(1));
		for _ in 0..MAX_NESTING {
			record = Keywords::new().with("r", Keyword::Record(record));
		}
		let attr = TableAttr::default();
		assert_eq!(round_trip(&record, &attr, &attr), record);
	}

	#[test]
	fn test_unknown_marker() {
		let bytes = [1, 0, 0, 0, 1, 0, 0, 0, b'k', 99];
		let mut reader = Reader::new(&bytes);
		assert_eq!(
			decode_keywords(&mut reader, &TableAttr::default()),
			Err(CodecError::InvalidMarker {
				what: "keyword",
				marker: 99
			})
		);
	}
}

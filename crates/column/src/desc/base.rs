// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Formatter};

use tabula_type::{DataKind, Keywords};

use crate::{
	ColumnOptions, TableAttr,
	codec::{Reader, Writer, decode_keywords, encode_keywords},
};

pub const DEFAULT_DATA_MANAGER: &str = "StandardStorage";

/// Attributes shared by every column descriptor variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColumn {
	pub name: String,
	pub comment: String,
	pub data_manager_type: String,
	pub data_manager_group: String,
	pub data_kind: DataKind,
	pub options: ColumnOptions,
	/// 0 for scalars, -1 for arrays of any dimensionality.
	pub ndim: i32,
	pub shape: Vec<u64>,
	/// Maximum string length, 0 meaning unbounded.
	pub max_length: u32,
	pub keywords: Keywords,
}

impl BaseColumn {
	pub fn new(name: impl Into<String>, data_kind: DataKind, ndim: i32) -> Self {
		Self {
			name: name.into(),
			comment: String::new(),
			data_manager_type: DEFAULT_DATA_MANAGER.to_string(),
			data_manager_group: String::new(),
			data_kind,
			options: ColumnOptions::NONE,
			ndim,
			shape: Vec::new(),
			max_length: 0,
			keywords: Keywords::new(),
		}
	}

	pub(crate) fn encode(&self, writer: &mut Writer, parent: &TableAttr) -> crate::Result<()> {
		writer.put_str(&self.name)?;
		writer.put_str(&self.comment)?;
		writer.put_str(&self.data_manager_type)?;
		writer.put_str(&self.data_manager_group)?;
		writer.put_u8(self.data_kind.to_u8());
		writer.put_u32(*self.options);
		writer.put_i32(self.ndim);
		writer.put_len(self.shape.len())?;
		for extent in &self.shape {
			writer.put_u64(*extent);
		}
		writer.put_u32(self.max_length);
		encode_keywords(writer, &self.keywords, parent)?;
		Ok(())
	}

	pub(crate) fn decode(reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<Self> {
		let name = reader.get_string()?;
		let comment = reader.get_string()?;
		let data_manager_type = reader.get_string()?;
		let data_manager_group = reader.get_string()?;
		let data_kind = DataKind::from_u8(reader.get_u8()?)?;
		let options = ColumnOptions(reader.get_u32()?);
		let ndim = reader.get_i32()?;

		let len = reader.get_len()?;
		let mut shape = Vec::with_capacity(len.min(reader.remaining() / 8));
		for _ in 0..len {
			shape.push(reader.get_u64()?);
		}

		let max_length = reader.get_u32()?;
		let keywords = decode_keywords(reader, parent)?;

		Ok(Self {
			name,
			comment,
			data_manager_type,
			data_manager_group,
			data_kind,
			options,
			ndim,
			shape,
			max_length,
			keywords,
		})
	}

	pub(crate) fn show(&self, f: &mut Formatter<'_>, class_name: &str) -> fmt::Result {
		writeln!(f, "{} {}", class_name, self.name)?;
		if !self.comment.is_empty() {
			writeln!(f, "   comment={}", self.comment)?;
		}
		write!(f, "   kind={} ndim={} options={}", self.data_kind, self.ndim, self.options)?;
		if !self.shape.is_empty() {
			let shape: Vec<String> = self.shape.iter().map(u64::to_string).collect();
			write!(f, " shape=[{}]", shape.join(","))?;
		}
		if self.max_length > 0 {
			write!(f, " max_length={}", self.max_length)?;
		}
		writeln!(f)?;
		writeln!(f, "   data manager={} group={}", self.data_manager_type, self.data_manager_group)
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Keyword;

	use super::*;

	#[test]
	fn test_round_trip() {
		let mut base = BaseColumn::new("DATA", DataKind::Complex, 2);
		base.comment = "visibilities".to_string();
		base.data_manager_group = "main".to_string();
		base.options = ColumnOptions::FIXED_SHAPE;
		base.shape = vec![4, 64];
		base.keywords.define("unit", Keyword::String("Jy".to_string()));

		let mut writer = Writer::new();
		base.encode(&mut writer, &TableAttr::default()).unwrap();
		let bytes = writer.into_bytes();
		let mut reader = Reader::new(&bytes);
		assert_eq!(BaseColumn::decode(&mut reader, &TableAttr::default()).unwrap(), base);
		assert!(reader.is_empty());
	}

	#[test]
	fn test_unknown_kind_code() {
		let mut base = BaseColumn::new("X", DataKind::Int, 0);
		base.name.clear();
		let mut writer = Writer::new();
		base.encode(&mut writer, &TableAttr::default()).unwrap();
		let mut bytes = writer.into_bytes();
		// kind code follows the four strings
		bytes[16 + DEFAULT_DATA_MANAGER.len()] = 0x7F;

		let err = BaseColumn::decode(&mut Reader::new(&bytes), &TableAttr::default()).unwrap_err();
		assert_eq!(err.code, "COLUMN_004");
	}
}

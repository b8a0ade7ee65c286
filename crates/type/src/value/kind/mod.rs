// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{diagnostic::column, error};

mod dispatch;

/// All data kinds a column description can carry.
///
/// The twelve primitive kinds each have exactly one array counterpart.
/// `Record` and `Table` only appear on scalar-record and sub-table columns.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataKind {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte unsigned integer
	UChar,
	/// A 2-byte signed integer
	Short,
	/// A 2-byte unsigned integer
	UShort,
	/// A 4-byte signed integer
	Int,
	/// A 4-byte unsigned integer
	UInt,
	/// An 8-byte signed integer
	Int64,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// A complex number made of two 4-byte floats
	Complex,
	/// A complex number made of two 8-byte floats
	DComplex,
	/// A UTF-8 encoded text.
	String,
	/// A nested record
	Record,
	/// A table
	Table,
	ArrayBool,
	ArrayUChar,
	ArrayShort,
	ArrayUShort,
	ArrayInt,
	ArrayUInt,
	ArrayInt64,
	ArrayFloat,
	ArrayDouble,
	ArrayComplex,
	ArrayDComplex,
	ArrayString,
}

/// The closed set of kinds that have an element type, an array kind and an
/// ordering.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveKind {
	Bool,
	UChar,
	Short,
	UShort,
	Int,
	UInt,
	Int64,
	Float,
	Double,
	Complex,
	DComplex,
	String,
}

impl PrimitiveKind {
	pub const ALL: [PrimitiveKind; 12] = [
		PrimitiveKind::Bool,
		PrimitiveKind::UChar,
		PrimitiveKind::Short,
		PrimitiveKind::UShort,
		PrimitiveKind::Int,
		PrimitiveKind::UInt,
		PrimitiveKind::Int64,
		PrimitiveKind::Float,
		PrimitiveKind::Double,
		PrimitiveKind::Complex,
		PrimitiveKind::DComplex,
		PrimitiveKind::String,
	];

	/// Scalar and array kind of every primitive. This is the only place the
	/// pairing is spelled out.
	const fn kinds(self) -> (DataKind, DataKind) {
		match self {
			PrimitiveKind::Bool => (DataKind::Bool, DataKind::ArrayBool),
			PrimitiveKind::UChar => (DataKind::UChar, DataKind::ArrayUChar),
			PrimitiveKind::Short => (DataKind::Short, DataKind::ArrayShort),
			PrimitiveKind::UShort => (DataKind::UShort, DataKind::ArrayUShort),
			PrimitiveKind::Int => (DataKind::Int, DataKind::ArrayInt),
			PrimitiveKind::UInt => (DataKind::UInt, DataKind::ArrayUInt),
			PrimitiveKind::Int64 => (DataKind::Int64, DataKind::ArrayInt64),
			PrimitiveKind::Float => (DataKind::Float, DataKind::ArrayFloat),
			PrimitiveKind::Double => (DataKind::Double, DataKind::ArrayDouble),
			PrimitiveKind::Complex => (DataKind::Complex, DataKind::ArrayComplex),
			PrimitiveKind::DComplex => (DataKind::DComplex, DataKind::ArrayDComplex),
			PrimitiveKind::String => (DataKind::String, DataKind::ArrayString),
		}
	}

	pub const fn data_kind(self) -> DataKind {
		self.kinds().0
	}

	pub const fn array_kind(self) -> DataKind {
		self.kinds().1
	}

	pub fn name(self) -> &'static str {
		self.data_kind().name()
	}
}

impl Display for PrimitiveKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl From<PrimitiveKind> for DataKind {
	fn from(value: PrimitiveKind) -> Self {
		value.data_kind()
	}
}

impl DataKind {
	/// The primitive kind of a scalar kind, `None` for arrays, records and
	/// tables.
	pub fn primitive(&self) -> Option<PrimitiveKind> {
		PrimitiveKind::ALL.into_iter().find(|p| p.data_kind() == *self)
	}

	/// The element kind of an array kind.
	pub fn element(&self) -> Option<PrimitiveKind> {
		PrimitiveKind::ALL.into_iter().find(|p| p.array_kind() == *self)
	}

	/// The array kind holding elements of this kind.
	pub fn array_of(&self) -> Option<DataKind> {
		self.primitive().map(PrimitiveKind::array_kind)
	}

	pub fn is_primitive(&self) -> bool {
		self.primitive().is_some()
	}

	pub fn is_array(&self) -> bool {
		self.element().is_some()
	}

	pub fn is_record(&self) -> bool {
		matches!(self, DataKind::Record)
	}

	pub fn is_table(&self) -> bool {
		matches!(self, DataKind::Table)
	}
}

impl DataKind {
	pub fn to_u8(&self) -> u8 {
		match self {
			DataKind::Bool => 0x01,
			DataKind::UChar => 0x02,
			DataKind::Short => 0x03,
			DataKind::UShort => 0x04,
			DataKind::Int => 0x05,
			DataKind::UInt => 0x06,
			DataKind::Int64 => 0x07,
			DataKind::Float => 0x08,
			DataKind::Double => 0x09,
			DataKind::Complex => 0x0A,
			DataKind::DComplex => 0x0B,
			DataKind::String => 0x0C,
			DataKind::Record => 0x0D,
			DataKind::Table => 0x0E,
			// array kinds carry the element code in the low bits
			_ => match self.element() {
				Some(element) => 0x20 | element.data_kind().to_u8(),
				None => unreachable!(),
			},
		}
	}

	pub fn from_u8(value: u8) -> crate::Result<Self> {
		let scalar = match value & 0x1F {
			0x01 => DataKind::Bool,
			0x02 => DataKind::UChar,
			0x03 => DataKind::Short,
			0x04 => DataKind::UShort,
			0x05 => DataKind::Int,
			0x06 => DataKind::UInt,
			0x07 => DataKind::Int64,
			0x08 => DataKind::Float,
			0x09 => DataKind::Double,
			0x0A => DataKind::Complex,
			0x0B => DataKind::DComplex,
			0x0C => DataKind::String,
			0x0D => DataKind::Record,
			0x0E => DataKind::Table,
			_ => return Err(error!(column::unknown_kind_code(value))),
		};

		match value & 0xE0 {
			0x00 => Ok(scalar),
			0x20 => scalar.array_of().ok_or_else(|| error!(column::unknown_kind_code(value))),
			_ => Err(error!(column::unknown_kind_code(value))),
		}
	}
}

impl DataKind {
	pub fn name(&self) -> &'static str {
		match self {
			DataKind::Bool => "Bool",
			DataKind::UChar => "UChar",
			DataKind::Short => "Short",
			DataKind::UShort => "UShort",
			DataKind::Int => "Int",
			DataKind::UInt => "UInt",
			DataKind::Int64 => "Int64",
			DataKind::Float => "Float",
			DataKind::Double => "Double",
			DataKind::Complex => "Complex",
			DataKind::DComplex => "DComplex",
			DataKind::String => "String",
			DataKind::Record => "Record",
			DataKind::Table => "Table",
			DataKind::ArrayBool => "ArrayBool",
			DataKind::ArrayUChar => "ArrayUChar",
			DataKind::ArrayShort => "ArrayShort",
			DataKind::ArrayUShort => "ArrayUShort",
			DataKind::ArrayInt => "ArrayInt",
			DataKind::ArrayUInt => "ArrayUInt",
			DataKind::ArrayInt64 => "ArrayInt64",
			DataKind::ArrayFloat => "ArrayFloat",
			DataKind::ArrayDouble => "ArrayDouble",
			DataKind::ArrayComplex => "ArrayComplex",
			DataKind::ArrayDComplex => "ArrayDComplex",
			DataKind::ArrayString => "ArrayString",
		}
	}
}

impl Display for DataKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DataKind {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let upper = s.to_uppercase();
		if let Some(element) = upper.strip_prefix("ARRAY") {
			return element.parse::<DataKind>()?.array_of().ok_or(());
		}
		match upper.as_str() {
			"BOOL" => Ok(DataKind::Bool),
			"UCHAR" => Ok(DataKind::UChar),
			"SHORT" => Ok(DataKind::Short),
			"USHORT" => Ok(DataKind::UShort),
			"INT" => Ok(DataKind::Int),
			"UINT" => Ok(DataKind::UInt),
			"INT64" => Ok(DataKind::Int64),
			"FLOAT" => Ok(DataKind::Float),
			"DOUBLE" => Ok(DataKind::Double),
			"COMPLEX" => Ok(DataKind::Complex),
			"DCOMPLEX" => Ok(DataKind::DComplex),
			"STRING" => Ok(DataKind::String),
			"RECORD" => Ok(DataKind::Record),
			"TABLE" => Ok(DataKind::Table),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_primitive_has_one_array_kind() {
		let mut seen = Vec::new();
		for primitive in PrimitiveKind::ALL {
			let array = primitive.array_kind();
			assert!(array.is_array());
			assert_eq!(array.element(), Some(primitive));
			assert_eq!(primitive.data_kind().array_of(), Some(array));
			assert!(!seen.contains(&array));
			seen.push(array);
		}
		assert_eq!(seen.len(), 12);
	}

	#[test]
	fn test_record_and_table_have_no_array_kind() {
		assert_eq!(DataKind::Record.array_of(), None);
		assert_eq!(DataKind::Table.array_of(), None);
		assert_eq!(DataKind::ArrayInt.array_of(), None);
	}

	#[test]
	fn test_code_round_trip() {
		for primitive in PrimitiveKind::ALL {
			for kind in [primitive.data_kind(), primitive.array_kind()] {
				assert_eq!(DataKind::from_u8(kind.to_u8()).unwrap(), kind);
			}
		}
		assert_eq!(DataKind::from_u8(DataKind::Table.to_u8()).unwrap(), DataKind::Table);
		assert_eq!(DataKind::ArrayInt.to_u8(), 0x25);
	}

	#[test]
	fn test_unknown_codes() {
		let err = DataKind::from_u8(0x00).unwrap_err();
		assert_eq!(err.code, "COLUMN_004");
		// there is no array of records
		assert!(DataKind::from_u8(0x2D).is_err());
		assert!(DataKind::from_u8(0x41).is_err());
	}

	#[test]
	fn test_from_str() {
		assert_eq!("int".parse::<DataKind>(), Ok(DataKind::Int));
		assert_eq!("ArrayDComplex".parse::<DataKind>(), Ok(DataKind::ArrayDComplex));
		assert_eq!("arrayrecord".parse::<DataKind>(), Err(()));
		assert_eq!("date".parse::<DataKind>(), Err(()));
	}

	#[test]
	fn test_display_matches_from_str() {
		for primitive in PrimitiveKind::ALL {
			for kind in [primitive.data_kind(), primitive.array_kind()] {
				assert_eq!(kind.to_string().parse::<DataKind>(), Ok(kind));
			}
		}
	}

	#[test]
	fn test_serde_uses_variant_names() {
		let json = serde_json::to_string(&DataKind::ArrayInt64).unwrap();
		assert_eq!(json, "\"ArrayInt64\"");
		let kind: DataKind = serde_json::from_str(&json).unwrap();
		assert_eq!(kind, DataKind::ArrayInt64);
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Complex32, Complex64};

use super::{CodecError, Reader, Writer};

/// Binary form of a single primitive value.
pub trait ValueCodec: Sized {
	fn encode(&self, writer: &mut Writer) -> Result<(), CodecError>;

	fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError>;
}

macro_rules! impl_value_codec {
	($($t:ty => $put:ident, $get:ident);* $(;)?) => {
		$(
			impl ValueCodec for $t {
				fn encode(&self, writer: &mut Writer) -> Result<(), CodecError> {
					writer.$put(*self);
					Ok(())
				}

				fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
					reader.$get()
				}
			}
		)*
	};
}

impl_value_codec! {
	bool => put_bool, get_bool;
	u8 => put_u8, get_u8;
	i16 => put_i16, get_i16;
	u16 => put_u16, get_u16;
	i32 => put_i32, get_i32;
	u32 => put_u32, get_u32;
	i64 => put_i64, get_i64;
	f32 => put_f32, get_f32;
	f64 => put_f64, get_f64;
}

impl ValueCodec for Complex32 {
	fn encode(&self, writer: &mut Writer) -> Result<(), CodecError> {
		writer.put_f32(self.re);
		writer.put_f32(self.im);
		Ok(())
	}

	fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
		Ok(Complex32::new(reader.get_f32()?, reader.get_f32()?))
	}
}

impl ValueCodec for Complex64 {
	fn encode(&self, writer: &mut Writer) -> Result<(), CodecError> {
		writer.put_f64(self.re);
		writer.put_f64(self.im);
		Ok(())
	}

	fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
		Ok(Complex64::new(reader.get_f64()?, reader.get_f64()?))
	}
}

impl ValueCodec for String {
	fn encode(&self, writer: &mut Writer) -> Result<(), CodecError> {
		writer.put_str(self)
	}

	fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
		reader.get_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn round_trip<T: ValueCodec + PartialEq + std::fmt::Debug>(value: T) {
		let mut writer = Writer::new();
		value.encode(&mut writer).unwrap();
		let bytes = writer.into_bytes();
		let mut reader = Reader::new(&bytes);
		assert_eq!(T::decode(&mut reader).unwrap(), value);
		assert!(reader.is_empty());
	}

	#[test]
	fn test_complex() {
		round_trip(Complex32::new(1.5, -2.0));
		round_trip(Complex64::new(f64::MAX, f64::MIN_POSITIVE));
	}

	#[test]
	fn test_string() {
		round_trip(String::new());
		round_trip(String::from("degrees"));
	}

	#[test]
	fn test_complex_layout() {
		let mut writer = Writer::new();
		Complex32::new(1.0, 2.0).encode(&mut writer).unwrap();
		let bytes = writer.into_bytes();
		assert_eq!(&bytes[..4], &1.0f32.to_le_bytes());
		assert_eq!(&bytes[4..], &2.0f32.to_le_bytes());
	}
}

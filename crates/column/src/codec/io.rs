// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{CodecError, MAX_NESTING};

/// Appends little-endian encoded values to a byte buffer.
#[derive(Debug, Default, Clone)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn put_u8(&mut self, value: u8) {
		self.buf.push(value);
	}

	pub fn put_bool(&mut self, value: bool) {
		self.put_u8(value as u8);
	}

	pub fn put_i16(&mut self, value: i16) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_u16(&mut self, value: u16) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_i32(&mut self, value: i32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_u32(&mut self, value: u32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_i64(&mut self, value: i64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_u64(&mut self, value: u64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_f32(&mut self, value: f32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn put_f64(&mut self, value: f64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Writes a `u32` element count.
	pub fn put_len(&mut self, len: usize) -> Result<(), CodecError> {
		let len = u32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))?;
		self.put_u32(len);
		Ok(())
	}

	/// Writes a `u32` byte length followed by the UTF-8 bytes.
	pub fn put_str(&mut self, value: &str) -> Result<(), CodecError> {
		self.put_len(value.len())?;
		self.buf.extend_from_slice(value.as_bytes());
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.buf.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}
}

/// Reads little-endian encoded values from a byte slice.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	input: &'a [u8],
	position: usize,
	depth: usize,
}

macro_rules! get_le {
	($($name:ident => $t:ty),* $(,)?) => {
		$(
			pub fn $name(&mut self) -> Result<$t, CodecError> {
				let bytes = self.take(size_of::<$t>())?;
				let mut raw = [0u8; size_of::<$t>()];
				raw.copy_from_slice(bytes);
				Ok(<$t>::from_le_bytes(raw))
			}
		)*
	};
}

impl<'a> Reader<'a> {
	pub fn new(input: &'a [u8]) -> Self {
		Self {
			input,
			position: 0,
			depth: 0,
		}
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn remaining(&self) -> usize {
		self.input.len() - self.position
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Number of nested records or sub-tables currently being read.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Runs `read` one nesting level deeper. Fails without calling `read`
	/// once [`MAX_NESTING`] levels are open.
	pub fn nested<T, E>(&mut self, read: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E>
	where
		E: From<CodecError>,
	{
		if self.depth >= MAX_NESTING {
			return Err(CodecError::NestingTooDeep(MAX_NESTING).into());
		}
		self.depth += 1;
		let result = read(self);
		self.depth -= 1;
		result
	}

	fn take(&mut self, needed: usize) -> Result<&'a [u8], CodecError> {
		let remaining = self.remaining();
		if needed > remaining {
			return Err(CodecError::UnexpectedEnd {
				needed,
				remaining,
			});
		}
		let bytes = &self.input[self.position..self.position + needed];
		self.position += needed;
		Ok(bytes)
	}

	get_le! {
		get_u8 => u8,
		get_i16 => i16,
		get_u16 => u16,
		get_i32 => i32,
		get_u32 => u32,
		get_i64 => i64,
		get_u64 => u64,
		get_f32 => f32,
		get_f64 => f64,
	}

	pub fn get_bool(&mut self) -> Result<bool, CodecError> {
		match self.get_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			marker => Err(CodecError::InvalidMarker {
				what: "bool",
				marker,
			}),
		}
	}

	pub fn get_len(&mut self) -> Result<usize, CodecError> {
		Ok(self.get_u32()? as usize)
	}

	pub fn get_string(&mut self) -> Result<String, CodecError> {
		let len = self.get_len()?;
		let bytes = self.take(len)?;
		Ok(String::from_utf8(bytes.to_vec())?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_little_endian_layout() {
		let mut writer = Writer::new();
		writer.put_u32(1);
		writer.put_i16(-2);
		writer.put_str("ID").unwrap();
		assert_eq!(writer.as_slice(), &[1, 0, 0, 0, 0xFE, 0xFF, 2, 0, 0, 0, b'I', b'D']);
	}

	#[test]
	fn test_read_back() {
		let mut writer = Writer::new();
		writer.put_bool(true);
		writer.put_i64(-42);
		writer.put_f64(0.25);
		writer.put_str("räumlich").unwrap();

		let bytes = writer.into_bytes();
		let mut reader = Reader::new(&bytes);
		assert!(reader.get_bool().unwrap());
		assert_eq!(reader.get_i64().unwrap(), -42);
		assert_eq!(reader.get_f64().unwrap(), 0.25);
		assert_eq!(reader.get_string().unwrap(), "räumlich");
		assert!(reader.is_empty());
	}

	#[test]
	fn test_truncated_input() {
		let mut reader = Reader::new(&[1, 0]);
		assert_eq!(
			reader.get_u32(),
			Err(CodecError::UnexpectedEnd {
				needed: 4,
				remaining: 2
			})
		);
		// failed reads do not advance
		assert_eq!(reader.position(), 0);
	}

	#[test]
	fn test_string_length_past_end() {
		let mut reader = Reader::new(&[9, 0, 0, 0, b'a']);
		assert!(matches!(reader.get_string(), Err(CodecError::UnexpectedEnd { needed: 9, remaining: 1 })));
	}

	#[test]
	fn test_invalid_utf8() {
		let mut reader = Reader::new(&[2, 0, 0, 0, 0xC3, 0x28]);
		assert!(matches!(reader.get_string(), Err(CodecError::InvalidUtf8(_))));
	}

	#[test]
	fn test_nesting_limit() {
		fn descend(reader: &mut Reader<'_>) -> Result<usize, CodecError> {
			reader.nested(|reader| if reader.depth() == MAX_NESTING { Ok(reader.depth()) } else { descend(reader) })
		}

		let mut reader = Reader::new(&[]);
		assert_eq!(descend(&mut reader), Ok(MAX_NESTING));
		assert_eq!(reader.depth(), 0);

		fn unbounded(reader: &mut Reader<'_>) -> Result<(), CodecError> {
			reader.nested(unbounded)
		}
		assert_eq!(unbounded(&mut reader), Err(CodecError::NestingTooDeep(MAX_NESTING)));
		assert_eq!(reader.depth(), 0);
	}

	#[test]
	fn test_invalid_bool() {
		let mut reader = Reader::new(&[7]);
		assert_eq!(
			reader.get_bool(),
			Err(CodecError::InvalidMarker {
				what: "bool",
				marker: 7
			})
		);
	}
}

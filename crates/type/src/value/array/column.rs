// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::{Array, ColumnValue, Complex32, Complex64, DataKind, PrimitiveKind};

/// The values of one column, typed by primitive kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnArray {
	Bool(Array<bool>),
	UChar(Array<u8>),
	Short(Array<i16>),
	UShort(Array<u16>),
	Int(Array<i32>),
	UInt(Array<u32>),
	Int64(Array<i64>),
	Float(Array<f32>),
	Double(Array<f64>),
	Complex(Array<Complex32>),
	DComplex(Array<Complex64>),
	String(Array<String>),
}

macro_rules! with_array {
	($column:expr, $array:ident => $body:expr) => {
		match $column {
			ColumnArray::Bool($array) => $body,
			ColumnArray::UChar($array) => $body,
			ColumnArray::Short($array) => $body,
			ColumnArray::UShort($array) => $body,
			ColumnArray::Int($array) => $body,
			ColumnArray::UInt($array) => $body,
			ColumnArray::Int64($array) => $body,
			ColumnArray::Float($array) => $body,
			ColumnArray::Double($array) => $body,
			ColumnArray::Complex($array) => $body,
			ColumnArray::DComplex($array) => $body,
			ColumnArray::String($array) => $body,
		}
	};
}

impl ColumnArray {
	pub fn new<T: ColumnValue>(values: Vec<T>) -> Self {
		T::into_column(Array::new(values))
	}

	pub fn kind(&self) -> PrimitiveKind {
		match self {
			ColumnArray::Bool(_) => PrimitiveKind::Bool,
			ColumnArray::UChar(_) => PrimitiveKind::UChar,
			ColumnArray::Short(_) => PrimitiveKind::Short,
			ColumnArray::UShort(_) => PrimitiveKind::UShort,
			ColumnArray::Int(_) => PrimitiveKind::Int,
			ColumnArray::UInt(_) => PrimitiveKind::UInt,
			ColumnArray::Int64(_) => PrimitiveKind::Int64,
			ColumnArray::Float(_) => PrimitiveKind::Float,
			ColumnArray::Double(_) => PrimitiveKind::Double,
			ColumnArray::Complex(_) => PrimitiveKind::Complex,
			ColumnArray::DComplex(_) => PrimitiveKind::DComplex,
			ColumnArray::String(_) => PrimitiveKind::String,
		}
	}

	pub fn data_kind(&self) -> DataKind {
		self.kind().data_kind()
	}

	pub fn len(&self) -> usize {
		with_array!(self, array => array.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_contiguous(&self) -> bool {
		with_array!(self, array => array.is_contiguous())
	}

	/// Compares the values at `l` and `r`, both of which must be in range.
	pub fn compare(&self, l: usize, r: usize) -> Ordering {
		with_array!(self, array => match (array.get(l), array.get(r)) {
			(Some(l), Some(r)) => l.compare(r),
			_ => Ordering::Equal,
		})
	}

	/// A read-only array over the same backing buffer.
	pub fn share_storage(&self) -> Option<ColumnArray> {
		with_array!(self, array => array.share_storage().map(|data| ColumnValue::into_column(Array::from_handle(data))))
	}

	pub fn as_ptr(&self) -> *const () {
		with_array!(self, array => array.handle().as_ptr().cast::<()>())
	}
}

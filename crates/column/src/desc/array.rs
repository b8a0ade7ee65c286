// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, marker::PhantomData};

use tabula_type::ColumnValue;

use super::{BaseColumn, ColumnDescriptor, ShapeClass};
use crate::{
	ColumnOptions,
	codec::{CodecError, ValueCodec},
};

/// A column holding an array of `T` per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayColumn<T> {
	base: BaseColumn,
	_marker: PhantomData<fn() -> T>,
}

impl<T: ColumnValue + ValueCodec> ArrayColumn<T> {
	/// Arrays of `ndim` dimensions, or of any dimensionality when `ndim` is -1.
	pub fn new(name: impl Into<String>, ndim: i32) -> Self {
		Self {
			base: BaseColumn::new(name, T::KIND.data_kind(), ndim),
			_marker: PhantomData,
		}
	}

	/// Arrays of the same `shape` in every row. Fails when the shape has
	/// more dimensions than an `i32` ndim can count.
	pub fn fixed(name: impl Into<String>, shape: Vec<u64>) -> crate::Result<Self> {
		let mut column = Self::new(name, shape_ndim(shape.len())?);
		column.base.options = ColumnOptions::FIXED_SHAPE;
		column.base.shape = shape;
		Ok(column)
	}

	pub fn tag() -> String {
		format!("ArrayColumn<{}>", T::KIND)
	}
}

fn shape_ndim(len: usize) -> crate::Result<i32> {
	Ok(i32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))?)
}

impl<T: ColumnValue + ValueCodec> ColumnDescriptor for ArrayColumn<T> {
	fn class_name(&self) -> String {
		Self::tag()
	}

	fn shape_class(&self) -> ShapeClass {
		ShapeClass::Array
	}

	fn base(&self) -> &BaseColumn {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseColumn {
		&mut self.base
	}

	fn clone_box(&self) -> Box<dyn ColumnDescriptor> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Complex64;

	use super::*;

	#[test]
	fn test_variable_shape() {
		let column = ArrayColumn::<Complex64>::new("DATA", -1);
		assert_eq!(column.class_name(), "ArrayColumn<DComplex>");
		assert_eq!(column.base().ndim, -1);
		assert!(!column.base().options.is_fixed_shape());
		assert!(column.base().shape.is_empty());
	}

	#[test]
	fn test_fixed_shape() {
		let column = ArrayColumn::<bool>::fixed("FLAG", vec![2, 3, 4]).unwrap();
		assert_eq!(column.base().ndim, 3);
		assert_eq!(column.base().options, ColumnOptions::FIXED_SHAPE);
		assert_eq!(column.base().shape, vec![2, 3, 4]);
	}

	#[test]
	fn test_shape_rank_must_fit_ndim() {
		assert_eq!(shape_ndim(i32::MAX as usize).unwrap(), i32::MAX);
		assert_eq!(shape_ndim(i32::MAX as usize + 1).unwrap_err().code, "CODEC_005");
	}
}

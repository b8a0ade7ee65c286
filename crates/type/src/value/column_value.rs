// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{cmp::Ordering, fmt::Debug};

use crate::{Array, ColumnArray, Complex32, Complex64, PrimitiveKind};

/// Element type of a primitive column.
pub trait ColumnValue: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
	const KIND: PrimitiveKind;

	/// Total order used when sorting on this kind.
	fn compare(&self, other: &Self) -> Ordering;

	fn into_column(array: Array<Self>) -> ColumnArray;

	fn from_column(column: &ColumnArray) -> Option<&Array<Self>>;
}

macro_rules! impl_column_value {
	($t:ty, $kind:ident, |$l:ident, $r:ident| $compare:expr) => {
		impl ColumnValue for $t {
			const KIND: PrimitiveKind = PrimitiveKind::$kind;

			fn compare(&self, other: &Self) -> Ordering {
				let ($l, $r) = (self, other);
				$compare
			}

			fn into_column(array: Array<Self>) -> ColumnArray {
				ColumnArray::$kind(array)
			}

			fn from_column(column: &ColumnArray) -> Option<&Array<Self>> {
				match column {
					ColumnArray::$kind(array) => Some(array),
					_ => None,
				}
			}
		}
	};
}

impl_column_value!(bool, Bool, |l, r| l.cmp(r));
impl_column_value!(u8, UChar, |l, r| l.cmp(r));
impl_column_value!(i16, Short, |l, r| l.cmp(r));
impl_column_value!(u16, UShort, |l, r| l.cmp(r));
impl_column_value!(i32, Int, |l, r| l.cmp(r));
impl_column_value!(u32, UInt, |l, r| l.cmp(r));
impl_column_value!(i64, Int64, |l, r| l.cmp(r));
impl_column_value!(f32, Float, |l, r| l.total_cmp(r));
impl_column_value!(f64, Double, |l, r| l.total_cmp(r));
impl_column_value!(Complex32, Complex, |l, r| l.total_cmp(r));
impl_column_value!(Complex64, DComplex, |l, r| l.total_cmp(r));
impl_column_value!(String, String, |l, r| l.cmp(r));

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_floats_have_total_order() {
		assert_eq!(f64::NAN.compare(&1.0), Ordering::Greater);
		assert_eq!((-0.0f32).compare(&0.0), Ordering::Less);
	}

	#[test]
	fn test_column_round_trip() {
		let column = i32::into_column(Array::new(vec![3, 1, 2]));
		assert_eq!(column.kind(), PrimitiveKind::Int);
		assert_eq!(i32::from_column(&column).unwrap().to_vec(), vec![3, 1, 2]);
		assert!(i64::from_column(&column).is_none());
	}
}

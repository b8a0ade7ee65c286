// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use tabula_column::ColumnDesc;
use tabula_type::{
	Array, ColumnArray, ColumnValue, Complex32, Complex64, DataKind, RowNumber,
	diagnostic::{column, query},
	error, return_error,
};

use super::{ScalarExpr, invalid_fetch};

/// Reference to a column whose values are held in memory.
#[derive(Debug, Clone)]
pub struct ColumnExpr {
	desc: ColumnDesc,
	values: ColumnArray,
}

impl ColumnExpr {
	/// Fails when a scalar column is given values of another kind.
	pub fn new(desc: ColumnDesc, values: ColumnArray) -> crate::Result<Self> {
		desc.try_column()?;
		let kind = desc.data_kind();
		if desc.is_scalar() && kind.is_primitive() && kind != values.data_kind() {
			return_error!(column::kind_mismatch(&desc.class_name(), kind, values.data_kind()));
		}
		Ok(Self {
			desc,
			values,
		})
	}

	pub fn desc(&self) -> &ColumnDesc {
		&self.desc
	}

	pub fn values(&self) -> &ColumnArray {
		&self.values
	}

	fn fetch<T: ColumnValue>(&self, rows: &[RowNumber]) -> crate::Result<Array<T>> {
		let Some(values) = T::from_column(&self.values) else {
			return invalid_fetch(self.name(), self.data_kind(), T::KIND.data_kind());
		};

		let fetched = rows
			.iter()
			.map(|row| {
				values.get(row.index())
					.cloned()
					.ok_or_else(|| error!(query::row_out_of_range(self.name(), row.0, values.len())))
			})
			.collect::<crate::Result<Vec<T>>>()?;

		Ok(Array::new(fetched))
	}
}

macro_rules! fetch_methods {
	($($method:ident => $t:ty),* $(,)?) => {
		$(
			fn $method(&self, rows: &[RowNumber]) -> crate::Result<Array<$t>> {
				self.fetch(rows)
			}
		)*
	};
}

impl ScalarExpr for ColumnExpr {
	fn name(&self) -> &str {
		self.desc.name()
	}

	fn is_scalar(&self) -> bool {
		self.desc.is_scalar()
	}

	fn data_kind(&self) -> crate::Result<DataKind> {
		self.desc.true_data_kind()
	}

	fetch_methods! {
		get_column_bool => bool,
		get_column_uchar => u8,
		get_column_short => i16,
		get_column_ushort => u16,
		get_column_int => i32,
		get_column_uint => u32,
		get_column_int64 => i64,
		get_column_float => f32,
		get_column_double => f64,
		get_column_complex => Complex32,
		get_column_dcomplex => Complex64,
		get_column_string => String,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn id_column() -> ColumnExpr {
		ColumnExpr::new(ColumnDesc::scalar::<i32>("ID"), ColumnArray::new(vec![30, 10, 20])).unwrap()
	}

	#[test]
	fn test_fetches_requested_rows_in_order() {
		let expr = id_column();
		let rows = [RowNumber(2), RowNumber(0), RowNumber(2)];
		assert_eq!(expr.get_column_int(&rows).unwrap().to_vec(), vec![20, 30, 20]);
	}

	#[test]
	fn test_row_out_of_range() {
		let err = id_column().get_column_int(&[RowNumber(3)]).unwrap_err();
		assert_eq!(err.code, "QUERY_004");
	}

	#[test]
	fn test_wrong_kind() {
		let err = id_column().get_column_string(&[RowNumber(0)]).unwrap_err();
		assert_eq!(err.code, "QUERY_003");
	}

	#[test]
	fn test_kind_must_match_values() {
		let err = ColumnExpr::new(ColumnDesc::scalar::<i64>("ID"), ColumnArray::new(vec![1i32])).unwrap_err();
		assert_eq!(err.code, "COLUMN_002");
	}

	#[test]
	fn test_array_column_is_not_scalar() {
		let expr = ColumnExpr::new(ColumnDesc::array::<f64>("DATA", 1), ColumnArray::new(vec![1.0f64])).unwrap();
		assert!(!expr.is_scalar());
		assert_eq!(expr.data_kind().unwrap(), DataKind::ArrayDouble);
	}
}

// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::Debug;

use tabula_type::{
	Array, ColumnValue, Complex32, Complex64, DataKind, RowNumber, diagnostic::query, return_error,
};

mod column;

pub use column::ColumnExpr;

/// An expression evaluated once per row, as the query layer hands it to
/// ORDER BY.
///
/// Implementations override the `get_column_*` method of the kind they
/// produce; the others fail with an invalid fetch error.
pub trait ScalarExpr: Debug + Send + Sync {
	fn name(&self) -> &str;

	/// True when the expression yields a single value per row.
	fn is_scalar(&self) -> bool;

	fn data_kind(&self) -> crate::Result<DataKind>;

	fn get_column_bool(&self, _rows: &[RowNumber]) -> crate::Result<Array<bool>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Bool)
	}

	fn get_column_uchar(&self, _rows: &[RowNumber]) -> crate::Result<Array<u8>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::UChar)
	}

	fn get_column_short(&self, _rows: &[RowNumber]) -> crate::Result<Array<i16>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Short)
	}

	fn get_column_ushort(&self, _rows: &[RowNumber]) -> crate::Result<Array<u16>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::UShort)
	}

	fn get_column_int(&self, _rows: &[RowNumber]) -> crate::Result<Array<i32>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Int)
	}

	fn get_column_uint(&self, _rows: &[RowNumber]) -> crate::Result<Array<u32>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::UInt)
	}

	fn get_column_int64(&self, _rows: &[RowNumber]) -> crate::Result<Array<i64>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Int64)
	}

	fn get_column_float(&self, _rows: &[RowNumber]) -> crate::Result<Array<f32>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Float)
	}

	fn get_column_double(&self, _rows: &[RowNumber]) -> crate::Result<Array<f64>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Double)
	}

	fn get_column_complex(&self, _rows: &[RowNumber]) -> crate::Result<Array<Complex32>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::Complex)
	}

	fn get_column_dcomplex(&self, _rows: &[RowNumber]) -> crate::Result<Array<Complex64>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::DComplex)
	}

	fn get_column_string(&self, _rows: &[RowNumber]) -> crate::Result<Array<String>> {
		invalid_fetch(self.name(), self.data_kind(), DataKind::String)
	}
}

pub(crate) fn invalid_fetch<T>(
	name: &str,
	actual: crate::Result<DataKind>,
	requested: DataKind,
) -> crate::Result<Array<T>> {
	let actual = match actual {
		Ok(kind) => kind.to_string(),
		Err(err) => err.code.clone(),
	};
	return_error!(query::invalid_fetch(name, requested.name(), &actual))
}

/// Fetches the values of one primitive kind from an expression.
pub trait ColumnFetch: ColumnValue {
	fn fetch(expr: &dyn ScalarExpr, rows: &[RowNumber]) -> crate::Result<Array<Self>>;
}

macro_rules! impl_column_fetch {
	($($t:ty => $method:ident),* $(,)?) => {
		$(
			impl ColumnFetch for $t {
				fn fetch(expr: &dyn ScalarExpr, rows: &[RowNumber]) -> crate::Result<Array<Self>> {
					expr.$method(rows)
				}
			}
		)*
	};
}

impl_column_fetch! {
	bool => get_column_bool,
	u8 => get_column_uchar,
	i16 => get_column_short,
	u16 => get_column_ushort,
	i32 => get_column_int,
	u32 => get_column_uint,
	i64 => get_column_int64,
	f32 => get_column_float,
	f64 => get_column_double,
	Complex32 => get_column_complex,
	Complex64 => get_column_dcomplex,
	String => get_column_string,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Constant;

	impl ScalarExpr for Constant {
		fn name(&self) -> &str {
			"1.5"
		}

		fn is_scalar(&self) -> bool {
			true
		}

		fn data_kind(&self) -> crate::Result<DataKind> {
			Ok(DataKind::Double)
		}

		fn get_column_double(&self, rows: &[RowNumber]) -> crate::Result<Array<f64>> {
			Ok(Array::new(vec![1.5; rows.len()]))
		}
	}

	#[test]
	fn test_fetch_dispatches_on_kind() {
		let rows = [RowNumber(0), RowNumber(4)];
		assert_eq!(f64::fetch(&Constant, &rows).unwrap().to_vec(), vec![1.5, 1.5]);
	}

	#[test]
	fn test_other_kinds_are_invalid_fetches() {
		let err = i32::fetch(&Constant, &[RowNumber(0)]).unwrap_err();
		assert_eq!(err.code, "QUERY_003");
		assert!(err.message.contains("Int"));
		assert!(err.message.contains("Double"));
	}
}

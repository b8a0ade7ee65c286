// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{borrow::Cow, sync::Arc};

use tabula_type::{
	Array, ColumnArray, RowNumber, SortDirection, diagnostic::query, dispatch_primitive, return_error,
	return_internal_error,
};
use tracing::instrument;

use super::Sort;
use crate::{ColumnFetch, ScalarExpr};

/// One ORDER BY term.
#[derive(Debug, Clone)]
pub struct SortKey {
	expr: Arc<dyn ScalarExpr>,
	direction: SortDirection,
	given: bool,
}

impl SortKey {
	/// A key that sorts in the direction of the enclosing ORDER BY.
	pub fn new(expr: Arc<dyn ScalarExpr>) -> crate::Result<Self> {
		Self::build(expr, SortDirection::default(), false)
	}

	/// A key with its own direction, taking precedence over the ORDER BY
	/// direction.
	pub fn with_direction(expr: Arc<dyn ScalarExpr>, direction: SortDirection) -> crate::Result<Self> {
		Self::build(expr, direction, true)
	}

	fn build(expr: Arc<dyn ScalarExpr>, direction: SortDirection, given: bool) -> crate::Result<Self> {
		if !expr.is_scalar() {
			return_error!(query::order_by_not_scalar(expr.name()));
		}
		Ok(Self {
			expr,
			direction,
			given,
		})
	}

	pub fn expr(&self) -> &Arc<dyn ScalarExpr> {
		&self.expr
	}

	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	pub fn is_given(&self) -> bool {
		self.given
	}

	pub fn effective_direction(&self, main: SortDirection) -> SortDirection {
		if self.given { self.direction } else { main }
	}

	/// Fetches the key values for `rows` and registers them with `sort`.
	///
	/// The returned array owns the buffer `sort` reads from and has to be
	/// kept alive until sorting is done.
	#[instrument(name = "engine::sort::add_sort_values", level = "trace", skip_all, fields(expr = self.expr.name(), rows = rows.len()))]
	pub fn add_sort_values(
		&self,
		sort: &mut Sort,
		main: SortDirection,
		rows: &[RowNumber],
	) -> crate::Result<ColumnArray> {
		let direction = self.effective_direction(main);
		let kind = self.expr.data_kind()?;
		let Some(primitive) = kind.primitive() else {
			return_internal_error!("ORDER BY expression '{}' has unsortable data kind {}", self.expr.name(), kind);
		};

		dispatch_primitive!(primitive, T => self.materialize::<T>(sort, direction, rows))
	}

	fn materialize<T: ColumnFetch>(
		&self,
		sort: &mut Sort,
		direction: SortDirection,
		rows: &[RowNumber],
	) -> crate::Result<ColumnArray> {
		let mut array = T::fetch(self.expr.as_ref(), rows)?;

		let copied = match array.storage() {
			Cow::Borrowed(_) => None,
			Cow::Owned(copy) => Some(copy),
		};
		if let Some(copy) = copied {
			array = Array::new(copy);
		}

		let Some(storage) = array.share_storage() else {
			return_internal_error!("sort values of '{}' are not contiguous", self.expr.name());
		};
		sort.add_key(T::into_column(Array::from_handle(storage)), T::KIND.data_kind(), 0, direction)?;

		Ok(T::into_column(array))
	}
}

#[cfg(test)]
mod tests {
	use tabula_column::ColumnDesc;
	use tabula_type::{DataKind, SortDirection::*};

	use super::*;
	use crate::ColumnExpr;

	fn id_expr() -> Arc<dyn ScalarExpr> {
		Arc::new(ColumnExpr::new(ColumnDesc::scalar::<i32>("ID"), ColumnArray::new(vec![30, 10, 20])).unwrap())
	}

	#[test]
	fn test_non_scalar_expression_is_rejected() {
		let expr = ColumnExpr::new(ColumnDesc::array::<i32>("DATA", 1), ColumnArray::new(vec![1])).unwrap();
		let err = SortKey::with_direction(Arc::new(expr), Asc).unwrap_err();
		assert_eq!(err.code, "QUERY_001");
	}

	#[test]
	fn test_effective_direction() {
		let default = SortKey::new(id_expr()).unwrap();
		assert!(!default.is_given());
		assert_eq!(default.effective_direction(Desc), Desc);
		assert_eq!(default.effective_direction(Asc), Asc);

		let explicit = SortKey::with_direction(id_expr(), Asc).unwrap();
		assert!(explicit.is_given());
		assert_eq!(explicit.effective_direction(Desc), Asc);
	}

	#[test]
	fn test_add_sort_values() {
		let key = SortKey::with_direction(id_expr(), Asc).unwrap();
		let mut sort = Sort::default();
		let rows = [RowNumber(0), RowNumber(1), RowNumber(2)];

		let values = key.add_sort_values(&mut sort, Desc, &rows).unwrap();
		assert_eq!(values, ColumnArray::new(vec![30, 10, 20]));
		assert_eq!(values.data_kind(), DataKind::Int);
		assert_eq!(sort.key_count(), 1);
		assert_eq!(sort.sort(&rows).unwrap(), vec![RowNumber(1), RowNumber(2), RowNumber(0)]);
	}

	#[test]
	fn test_unsortable_kind() {
		let expr = ColumnExpr::new(ColumnDesc::scalar_record("META"), ColumnArray::new(vec![0u8])).unwrap();
		let key = SortKey::new(Arc::new(expr)).unwrap();
		let err = key.add_sort_values(&mut Sort::default(), Asc, &[RowNumber(0)]).unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");
	}
}

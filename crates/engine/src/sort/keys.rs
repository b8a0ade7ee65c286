// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use tabula_type::{ColumnArray, RowNumber, SortDirection};
use tracing::{debug, instrument};

use super::{Sort, SortConfig, SortKey};
use crate::ScalarExpr;

/// The terms of an ORDER BY clause.
#[derive(Debug, Clone, Default)]
pub struct SortKeys {
	keys: Vec<SortKey>,
}

impl SortKeys {
	/// Builds all keys or none; a term without a direction follows the
	/// ORDER BY direction.
	pub fn new<I>(terms: I) -> crate::Result<Self>
	where
		I: IntoIterator<Item = (Arc<dyn ScalarExpr>, Option<SortDirection>)>,
	{
		let keys = terms
			.into_iter()
			.map(|(expr, direction)| match direction {
				Some(direction) => SortKey::with_direction(expr, direction),
				None => SortKey::new(expr),
			})
			.collect::<crate::Result<Vec<_>>>()?;

		Ok(Self {
			keys,
		})
	}

	pub fn keys(&self) -> &[SortKey] {
		&self.keys
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Materializes every key for `rows` into a new [`Sort`].
	///
	/// The returned arrays back the sort keys and must outlive the sort.
	#[instrument(name = "engine::sort::prepare", level = "trace", skip_all, fields(keys = self.keys.len(), rows = rows.len()))]
	pub fn prepare(
		&self,
		main: SortDirection,
		rows: &[RowNumber],
		config: SortConfig,
	) -> crate::Result<(Sort, Vec<ColumnArray>)> {
		let mut sort = Sort::new(config);
		let values = self
			.keys
			.iter()
			.map(|key| key.add_sort_values(&mut sort, main, rows))
			.collect::<crate::Result<Vec<_>>>()?;

		debug!(keys = values.len(), rows = rows.len(), "materialized sort keys");
		Ok((sort, values))
	}

	/// `rows` in ORDER BY order.
	pub fn order(&self, main: SortDirection, rows: &[RowNumber], config: SortConfig) -> crate::Result<Vec<RowNumber>> {
		let (sort, _values) = self.prepare(main, rows, config)?;
		sort.sort(rows)
	}
}

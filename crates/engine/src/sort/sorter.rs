// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering::{self, Equal};

use tabula_type::{
	ColumnArray, DataKind, RowNumber, SortDirection, diagnostic::query, return_error, return_internal_error,
};
use tracing::instrument;

use super::SortConfig;

#[derive(Debug)]
struct SortColumn {
	values: ColumnArray,
	offset: usize,
	direction: SortDirection,
}

/// Multi-key sort over columns of comparison values.
///
/// Keys are compared in the order they were added, the first key being the
/// most significant.
#[derive(Debug, Default)]
pub struct Sort {
	config: SortConfig,
	keys: Vec<SortColumn>,
}

impl Sort {
	pub fn new(config: SortConfig) -> Self {
		Self {
			config,
			keys: Vec::new(),
		}
	}

	pub fn config(&self) -> &SortConfig {
		&self.config
	}

	/// Registers a column of comparison values. Row `i` compares by the
	/// element at `offset + i`.
	pub fn add_key(
		&mut self,
		values: ColumnArray,
		kind: DataKind,
		offset: usize,
		direction: SortDirection,
	) -> crate::Result<()> {
		if !kind.is_primitive() {
			return_error!(query::unsupported_sort_kind("sort key", kind.to_string()));
		}
		if values.data_kind() != kind {
			return_internal_error!("sort key declared as {} but holds {} values", kind, values.data_kind());
		}
		if offset > values.len() {
			return_internal_error!("sort key offset {} past {} values", offset, values.len());
		}

		self.keys.push(SortColumn {
			values,
			offset,
			direction,
		});
		Ok(())
	}

	pub fn key_count(&self) -> usize {
		self.keys.len()
	}

	/// Positions `0..n` in sorted order.
	#[instrument(name = "engine::sort::indices", level = "trace", skip(self))]
	pub fn sort_indices(&self, n: usize) -> crate::Result<Vec<usize>> {
		for key in &self.keys {
			let available = key.values.len() - key.offset;
			if available < n {
				return_error!(query::sort_key_length_mismatch(n, available));
			}
		}

		let mut indices: Vec<usize> = (0..n).collect();
		let compare = |l: &usize, r: &usize| self.compare(*l, *r);
		if self.config.stable {
			indices.sort_by(compare);
		} else {
			indices.sort_unstable_by(compare);
		}
		Ok(indices)
	}

	/// `rows` reordered by the registered keys, which hold one value per
	/// row in the same order as `rows`.
	pub fn sort(&self, rows: &[RowNumber]) -> crate::Result<Vec<RowNumber>> {
		Ok(self.sort_indices(rows.len())?.into_iter().map(|idx| rows[idx]).collect())
	}

	fn compare(&self, l: usize, r: usize) -> Ordering {
		for key in &self.keys {
			let ord = key.direction.apply(key.values.compare(key.offset + l, key.offset + r));
			if ord != Equal {
				return ord;
			}
		}
		Equal
	}
}

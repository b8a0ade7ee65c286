// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

mod key;
mod keys;
mod sorter;

pub use key::SortKey;
pub use keys::SortKeys;
pub use sorter::Sort;

/// Configuration for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Keep rows with equal keys in their input order.
	///
	/// Default: true
	pub stable: bool,
}

impl Default for SortConfig {
	fn default() -> Self {
		Self {
			stable: true,
		}
	}
}

impl SortConfig {
	/// Create a new config with default values.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stable(mut self, stable: bool) -> Self {
		self.stable = stable;
		self
	}
}

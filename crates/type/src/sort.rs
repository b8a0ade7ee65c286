// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	/// Orients an ascending comparison result.
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	}
}

impl Display for SortDirection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SortDirection::Asc => f.write_str("ASC"),
			SortDirection::Desc => f.write_str("DESC"),
		}
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// Position of a row within a table.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct RowNumber(pub u64);

impl RowNumber {
	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

impl Deref for RowNumber {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for RowNumber {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<u64> for RowNumber {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl From<RowNumber> for u64 {
	fn from(value: RowNumber) -> Self {
		value.0
	}
}

impl Display for RowNumber {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

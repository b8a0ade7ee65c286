// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{BitOr, BitOrAssign, Deref},
};

use serde::{Deserialize, Serialize};

/// Option bits of a column description.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnOptions(pub u32);

impl ColumnOptions {
	pub const NONE: ColumnOptions = ColumnOptions(0);
	/// Values are stored directly in the row instead of indirectly.
	pub const DIRECT: ColumnOptions = ColumnOptions(1);
	/// Values may be left undefined.
	pub const UNDEFINED: ColumnOptions = ColumnOptions(2);
	/// Every row holds an array of the same shape.
	pub const FIXED_SHAPE: ColumnOptions = ColumnOptions(4);

	pub fn contains(&self, other: ColumnOptions) -> bool {
		self.0 & other.0 == other.0
	}

	pub fn insert(&mut self, other: ColumnOptions) {
		self.0 |= other.0;
	}

	pub fn remove(&mut self, other: ColumnOptions) {
		self.0 &= !other.0;
	}

	pub fn is_fixed_shape(&self) -> bool {
		self.contains(Self::FIXED_SHAPE)
	}
}

impl BitOr for ColumnOptions {
	type Output = ColumnOptions;

	fn bitor(self, rhs: Self) -> Self::Output {
		ColumnOptions(self.0 | rhs.0)
	}
}

impl BitOrAssign for ColumnOptions {
	fn bitor_assign(&mut self, rhs: Self) {
		self.insert(rhs);
	}
}

impl Deref for ColumnOptions {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for ColumnOptions {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let names: Vec<&str> = [(Self::DIRECT, "Direct"), (Self::UNDEFINED, "Undefined"), (Self::FIXED_SHAPE, "FixedShape")]
			.into_iter()
			.filter(|(option, _)| self.contains(*option))
			.map(|(_, name)| name)
			.collect();

		if names.is_empty() {
			f.write_str("None")
		} else {
			f.write_str(&names.join("|"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_contains() {
		let options = ColumnOptions::DIRECT | ColumnOptions::FIXED_SHAPE;
		assert!(options.contains(ColumnOptions::FIXED_SHAPE));
		assert!(options.is_fixed_shape());
		assert!(!options.contains(ColumnOptions::UNDEFINED));
		assert!(options.contains(ColumnOptions::NONE));
	}

	#[test]
	fn test_insert_remove() {
		let mut options = ColumnOptions::NONE;
		options |= ColumnOptions::UNDEFINED;
		options.insert(ColumnOptions::FIXED_SHAPE);
		assert_eq!(*options, 6);
		options.remove(ColumnOptions::FIXED_SHAPE);
		assert_eq!(options, ColumnOptions::UNDEFINED);
	}

	#[test]
	fn test_display() {
		assert_eq!(ColumnOptions::NONE.to_string(), "None");
		assert_eq!((ColumnOptions::DIRECT | ColumnOptions::FIXED_SHAPE).to_string(), "Direct|FixedShape");
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

macro_rules! impl_complex {
	($name:ident, $float:ty) => {
		/// A complex number stored as real and imaginary part.
		#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
		pub struct $name {
			pub re: $float,
			pub im: $float,
		}

		impl $name {
			pub const fn new(re: $float, im: $float) -> Self {
				Self {
					re,
					im,
				}
			}

			/// Squared magnitude.
			pub fn norm(&self) -> $float {
				self.re * self.re + self.im * self.im
			}

			/// Total order by magnitude, ties broken by real then
			/// imaginary part.
			pub fn total_cmp(&self, other: &Self) -> Ordering {
				self.norm()
					.total_cmp(&other.norm())
					.then_with(|| self.re.total_cmp(&other.re))
					.then_with(|| self.im.total_cmp(&other.im))
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				write!(f, "({},{})", self.re, self.im)
			}
		}

		impl From<($float, $float)> for $name {
			fn from(value: ($float, $float)) -> Self {
				Self::new(value.0, value.1)
			}
		}
	};
}

impl_complex!(Complex32, f32);
impl_complex!(Complex64, f64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_order_by_magnitude_first() {
		let small = Complex32::new(0.0, 1.0);
		let large = Complex32::new(-3.0, 0.0);
		assert_eq!(small.total_cmp(&large), Ordering::Less);
		assert_eq!(large.total_cmp(&small), Ordering::Greater);
	}

	#[test]
	fn test_equal_magnitude_uses_parts() {
		let a = Complex64::new(0.0, 2.0);
		let b = Complex64::new(2.0, 0.0);
		assert_eq!(a.total_cmp(&b), Ordering::Less);
		assert_eq!(a.total_cmp(&a), Ordering::Equal);
	}

	#[test]
	fn test_display() {
		assert_eq!(Complex64::new(1.5, -2.0).to_string(), "(1.5,-2)");
	}
}

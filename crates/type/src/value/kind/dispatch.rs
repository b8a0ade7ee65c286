// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Expands `$body` once per primitive kind with `$t` bound to the Rust element
/// type of that kind.
///
/// Every piece of code that has to go from a runtime [`PrimitiveKind`] to a
/// concrete type goes through here, so adding a kind fails to compile until it
/// is handled.
///
/// ```
/// use tabula_type::{ColumnValue, PrimitiveKind, dispatch_primitive};
///
/// let kind = PrimitiveKind::Int;
/// let array_kind = dispatch_primitive!(kind, T => <T as ColumnValue>::KIND.array_kind());
/// assert_eq!(array_kind.to_string(), "ArrayInt");
/// ```
///
/// [`PrimitiveKind`]: crate::PrimitiveKind
#[macro_export]
macro_rules! dispatch_primitive {
	($kind:expr, $t:ident => $body:expr) => {
		match $kind {
			$crate::PrimitiveKind::Bool => {
				type $t = bool;
				$body
			}
			$crate::PrimitiveKind::UChar => {
				type $t = u8;
				$body
			}
			$crate::PrimitiveKind::Short => {
				type $t = i16;
				$body
			}
			$crate::PrimitiveKind::UShort => {
				type $t = u16;
				$body
			}
			$crate::PrimitiveKind::Int => {
				type $t = i32;
				$body
			}
			$crate::PrimitiveKind::UInt => {
				type $t = u32;
				$body
			}
			$crate::PrimitiveKind::Int64 => {
				type $t = i64;
				$body
			}
			$crate::PrimitiveKind::Float => {
				type $t = f32;
				$body
			}
			$crate::PrimitiveKind::Double => {
				type $t = f64;
				$body
			}
			$crate::PrimitiveKind::Complex => {
				type $t = $crate::Complex32;
				$body
			}
			$crate::PrimitiveKind::DComplex => {
				type $t = $crate::Complex64;
				$body
			}
			$crate::PrimitiveKind::String => {
				type $t = ::std::string::String;
				$body
			}
		}
	};
}

#[cfg(test)]
mod tests {
	use crate::{ColumnValue, PrimitiveKind};

	#[test]
	fn test_dispatch_binds_matching_type() {
		for kind in PrimitiveKind::ALL {
			let resolved = dispatch_primitive!(kind, T => <T as ColumnValue>::KIND);
			assert_eq!(resolved, kind);
		}
	}
}

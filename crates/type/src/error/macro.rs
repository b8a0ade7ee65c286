// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}

/// Creates an internal error diagnostic capturing the source location.
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::diagnostic::internal::internal_with_context(
			$reason,
			file!(),
			line!(),
			column!(),
			{
				fn f() {}
				fn type_name_of<T>(_: T) -> &'static str {
					std::any::type_name::<T>()
				}
				let name = type_name_of(f);
				&name[..name.len() - 3]
			},
			module_path!(),
		)
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::internal_error!(format!($fmt, $($arg)*))
	};
}

#[macro_export]
macro_rules! internal_err {
	($($arg:tt)*) => {
		Err($crate::Error($crate::internal_error!($($arg)*)))
	};
}

#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)*) => {
		return $crate::internal_err!($($arg)*)
	};
}

#[cfg(test)]
mod tests {
	use crate::diagnostic::query;

	fn fails() -> crate::Result<()> {
		return_error!(query::row_out_of_range("ID", 7, 3));
	}

	fn fails_internally(kind: &str) -> crate::Result<()> {
		return_internal_error!("no ordering for {}", kind);
	}

	#[test]
	fn test_return_error() {
		let err = fails().unwrap_err();
		assert_eq!(err.code, "QUERY_004");
	}

	#[test]
	fn test_return_internal_error_formats() {
		let err = fails_internally("Record").unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");
		assert!(err.message.contains("no ordering for Record"));
		assert!(err.notes.iter().any(|n| n.contains("fails_internally")));
	}
}

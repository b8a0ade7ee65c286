// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Attributes of the table enclosing a column description.
///
/// Used while reading and writing descriptors to resolve references that
/// are relative to the enclosing table, such as table keywords pointing
/// into a sub-table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAttr {
	name: String,
	writable: bool,
}

impl TableAttr {
	pub fn new(name: impl Into<String>, writable: bool) -> Self {
		Self {
			name: name.into(),
			writable,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_writable(&self) -> bool {
		self.writable
	}

	/// Attributes of a table nested below this one.
	pub fn child(&self, name: &str) -> TableAttr {
		let name = if self.name.is_empty() {
			name.to_string()
		} else {
			format!("{}/{}", self.name, name)
		};
		TableAttr {
			name,
			writable: self.writable,
		}
	}

	/// The part of `path` below this table, if it is below this table.
	pub fn relative_path<'a>(&self, path: &'a str) -> Option<&'a str> {
		if self.name.is_empty() {
			return None;
		}
		path.strip_prefix(self.name.as_str())?.strip_prefix('/').filter(|rest| !rest.is_empty())
	}

	pub fn absolute_path(&self, relative: &str) -> String {
		self.child(relative).name
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_child() {
		let root = TableAttr::new("/data/obs.tab", true);
		let child = root.child("ANTENNA");
		assert_eq!(child.name(), "/data/obs.tab/ANTENNA");
		assert!(child.is_writable());
		assert_eq!(TableAttr::default().child("T").name(), "T");
	}

	#[test]
	fn test_relative_path() {
		let attr = TableAttr::new("/data/obs.tab", false);
		assert_eq!(attr.relative_path("/data/obs.tab/ANTENNA"), Some("ANTENNA"));
		assert_eq!(attr.relative_path("/data/obs.tab2/ANTENNA"), None);
		assert_eq!(attr.relative_path("/data/obs.tab/"), None);
		assert_eq!(attr.relative_path("/other"), None);
		assert_eq!(TableAttr::default().relative_path("x"), None);
	}

	#[test]
	fn test_absolute_path_inverts_relative() {
		let attr = TableAttr::new("/data/obs.tab", false);
		let relative = attr.relative_path("/data/obs.tab/SPW/POL").unwrap();
		assert_eq!(attr.absolute_path(relative), "/data/obs.tab/SPW/POL");
	}
}

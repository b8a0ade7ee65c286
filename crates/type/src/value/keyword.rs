// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Write};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::DataKind;

/// A keyword value attached to a column or table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Keyword {
	Bool(bool),
	Int(i32),
	Int64(i64),
	Double(f64),
	String(String),
	/// Path of a referenced table.
	Table(String),
	Record(Keywords),
}

impl Keyword {
	pub fn kind(&self) -> DataKind {
		match self {
			Keyword::Bool(_) => DataKind::Bool,
			Keyword::Int(_) => DataKind::Int,
			Keyword::Int64(_) => DataKind::Int64,
			Keyword::Double(_) => DataKind::Double,
			Keyword::String(_) => DataKind::String,
			Keyword::Table(_) => DataKind::Table,
			Keyword::Record(_) => DataKind::Record,
		}
	}
}

impl Display for Keyword {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Keyword::Bool(value) => Display::fmt(value, f),
			Keyword::Int(value) => Display::fmt(value, f),
			Keyword::Int64(value) => Display::fmt(value, f),
			Keyword::Double(value) => Display::fmt(value, f),
			Keyword::String(value) => write!(f, "\"{}\"", value),
			Keyword::Table(path) => write!(f, "Table: {}", path),
			Keyword::Record(record) => write!(f, "{{{} fields}}", record.len()),
		}
	}
}

/// An ordered, nestable set of named keywords.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
	fields: IndexMap<String, Keyword>,
}

impl Keywords {
	pub fn new() -> Self {
		Self::default()
	}

	/// Defines `name`, replacing an existing field of that name in place.
	pub fn define(&mut self, name: impl Into<String>, value: Keyword) -> Option<Keyword> {
		self.fields.insert(name.into(), value)
	}

	pub fn with(mut self, name: impl Into<String>, value: Keyword) -> Self {
		self.define(name, value);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Keyword> {
		self.fields.get(name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Keyword> {
		self.fields.get_mut(name)
	}

	pub fn remove(&mut self, name: &str) -> Option<Keyword> {
		self.fields.shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Number of fields at this level.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Keyword)> {
		self.fields.iter()
	}

	/// One line per field with its name and kind, nested records indented.
	pub fn description(&self) -> String {
		let mut out = String::new();
		self.describe(&mut out, 0);
		out
	}

	fn describe(&self, out: &mut String, depth: usize) {
		for (name, value) in &self.fields {
			let _ = writeln!(out, "{:indent$}{}: {}", "", name, value.kind(), indent = depth * 2);
			if let Keyword::Record(record) = value {
				record.describe(out, depth + 1);
			}
		}
	}
}

impl FromIterator<(String, Keyword)> for Keywords {
	fn from_iter<I: IntoIterator<Item = (String, Keyword)>>(iter: I) -> Self {
		Self {
			fields: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_define_keeps_insertion_order() {
		let mut keywords = Keywords::new();
		keywords.define("unit", Keyword::String("m".to_string()));
		keywords.define("scale", Keyword::Double(0.5));
		keywords.define("unit", Keyword::String("km".to_string()));

		let names: Vec<_> = keywords.iter().map(|(name, _)| name.as_str()).collect();
		assert_eq!(names, vec!["unit", "scale"]);
		assert_eq!(keywords.get("unit"), Some(&Keyword::String("km".to_string())));
	}

	#[test]
	fn test_remove() {
		let mut keywords = Keywords::new().with("a", Keyword::Int(1)).with("b", Keyword::Int(2));
		assert_eq!(keywords.remove("a"), Some(Keyword::Int(1)));
		assert!(!keywords.contains("a"));
		assert_eq!(keywords.len(), 1);
	}

	#[test]
	fn test_description_nests_records() {
		let inner = Keywords::new().with("epoch", Keyword::Int64(5));
		let keywords = Keywords::new().with("frame", Keyword::Record(inner)).with("flag", Keyword::Bool(true));

		assert_eq!(keywords.description(), "frame: Record\n  epoch: Int64\nflag: Bool\n");
	}
}

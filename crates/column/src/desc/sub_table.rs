// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{self, Formatter},
};

use tabula_type::DataKind;

use super::{BaseColumn, ColumnDesc, ColumnDescriptor, ShapeClass, expect_kind};
use crate::{
	TableAttr,
	codec::{Reader, Writer},
};

pub const SUB_TABLE_TAG: &str = "SubTableColumn";

/// A column whose rows are tables described by a nested table description.
#[derive(Debug, Clone)]
pub struct SubTableColumn {
	base: BaseColumn,
	table_desc_name: String,
	columns: Vec<ColumnDesc>,
}

impl SubTableColumn {
	pub fn new(name: impl Into<String>, table_desc_name: impl Into<String>, columns: Vec<ColumnDesc>) -> Self {
		Self {
			base: BaseColumn::new(name, DataKind::Table, 0),
			table_desc_name: table_desc_name.into(),
			columns,
		}
	}

	pub fn table_desc_name(&self) -> &str {
		&self.table_desc_name
	}

	pub fn columns(&self) -> &[ColumnDesc] {
		&self.columns
	}

	pub fn columns_mut(&mut self) -> &mut Vec<ColumnDesc> {
		&mut self.columns
	}

	pub fn column(&self, name: &str) -> Option<&ColumnDesc> {
		self.columns.iter().find(|column| !column.is_empty() && column.name() == name)
	}
}

impl ColumnDescriptor for SubTableColumn {
	fn class_name(&self) -> String {
		SUB_TABLE_TAG.to_string()
	}

	fn shape_class(&self) -> ShapeClass {
		ShapeClass::Table
	}

	fn base(&self) -> &BaseColumn {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseColumn {
		&mut self.base
	}

	fn clone_box(&self) -> Box<dyn ColumnDescriptor> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn encode(&self, writer: &mut Writer, parent: &TableAttr) -> crate::Result<()> {
		self.base.encode(writer, parent)?;
		writer.put_str(&self.table_desc_name)?;

		let child = parent.child(&self.base.name);
		writer.put_len(self.columns.len())?;
		for column in &self.columns {
			column.encode(writer, &child)?;
		}
		Ok(())
	}

	fn decode(&mut self, reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<()> {
		let base = BaseColumn::decode(reader, parent)?;
		expect_kind(SUB_TABLE_TAG, self.base.data_kind, base.data_kind)?;
		let table_desc_name = reader.get_string()?;

		let child = parent.child(&base.name);
		let len = reader.get_len()?;
		let mut columns = Vec::new();
		for _ in 0..len {
			columns.push(reader.nested(|reader| ColumnDesc::decode(reader, &child))?);
		}

		self.base = base;
		self.table_desc_name = table_desc_name;
		self.columns = columns;
		Ok(())
	}

	fn show(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.base.show(f, SUB_TABLE_TAG)?;
		writeln!(f, "   table description={} #columns={}", self.table_desc_name, self.columns.len())?;
		for column in self.columns.iter().filter(|column| !column.is_empty()) {
			writeln!(f, "      {} {}", column.class_name(), column.name())?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_column_lookup() {
		let column = SubTableColumn::new(
			"SPW",
			"SPW_DESC",
			vec![ColumnDesc::scalar::<String>("NAME"), ColumnDesc::array::<f64>("CHAN_FREQ", 1)],
		);
		assert_eq!(column.column("CHAN_FREQ").map(ColumnDesc::ndim), Some(1));
		assert!(column.column("MISSING").is_none());
	}

	#[test]
	fn test_show_lists_nested_columns() {
		let column = SubTableColumn::new("SPW", "SPW_DESC", vec![ColumnDesc::scalar::<String>("NAME")]);
		let shown = ColumnDesc::from_desc(&column).to_string();
		assert!(shown.starts_with("SubTableColumn SPW\n"));
		assert!(shown.contains("   table description=SPW_DESC #columns=1\n"));
		assert!(shown.contains("      ScalarColumn<String> NAME\n"));
	}
}

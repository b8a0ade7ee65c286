// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::any::Any;

use tabula_type::DataKind;

use super::{BaseColumn, ColumnDescriptor, ShapeClass};

pub const SCALAR_RECORD_TAG: &str = "ScalarRecordColumn";

/// A column holding one keyword record per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarRecordColumn {
	base: BaseColumn,
}

impl ScalarRecordColumn {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseColumn::new(name, DataKind::Record, 0),
		}
	}
}

impl ColumnDescriptor for ScalarRecordColumn {
	fn class_name(&self) -> String {
		SCALAR_RECORD_TAG.to_string()
	}

	fn shape_class(&self) -> ShapeClass {
		ShapeClass::Scalar
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
}

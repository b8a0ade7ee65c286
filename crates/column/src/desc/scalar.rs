// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{self, Formatter},
};

use tabula_type::ColumnValue;

use super::{BaseColumn, ColumnDescriptor, ShapeClass, expect_kind};
use crate::{
	TableAttr,
	codec::{Reader, ValueCodec, Writer},
};

/// A column holding one value of `T` per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarColumn<T> {
	base: BaseColumn,
	default: Option<T>,
}

impl<T: ColumnValue + ValueCodec> ScalarColumn<T> {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseColumn::new(name, T::KIND.data_kind(), 0),
			default: None,
		}
	}

	pub fn tag() -> String {
		format!("ScalarColumn<{}>", T::KIND)
	}

	pub fn with_default(mut self, value: T) -> Self {
		self.default = Some(value);
		self
	}

	/// Value used for rows that were never written.
	pub fn default_value(&self) -> Option<&T> {
		self.default.as_ref()
	}

	pub fn set_default_value(&mut self, value: Option<T>) {
		self.default = value;
	}
}

impl<T: ColumnValue + ValueCodec> ColumnDescriptor for ScalarColumn<T> {
	fn class_name(&self) -> String {
		Self::tag()
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

	fn encode(&self, writer: &mut Writer, parent: &TableAttr) -> crate::Result<()> {
		self.base.encode(writer, parent)?;
		match &self.default {
			Some(value) => {
				writer.put_bool(true);
				value.encode(writer)?;
			}
			None => writer.put_bool(false),
		}
		Ok(())
	}

	fn decode(&mut self, reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<()> {
		let base = BaseColumn::decode(reader, parent)?;
		expect_kind(&Self::tag(), self.base.data_kind, base.data_kind)?;
		let default = match reader.get_bool()? {
			true => Some(T::decode(reader)?),
			false => None,
		};
		self.base = base;
		self.default = default;
		Ok(())
	}

	fn show(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.base.show(f, &Self::tag())?;
		if let Some(value) = &self.default {
			writeln!(f, "   default={:?}", value)?;
		}
		Ok(())
	}
}

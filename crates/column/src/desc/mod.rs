// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{self, Debug, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tabula_type::{ColumnValue, DataKind, Keywords, diagnostic::column, error, return_error, return_internal_error};

use crate::{
	ColumnOptions, TableAttr,
	codec::{Reader, ValueCodec, Writer},
};

mod array;
mod base;
mod record;
mod scalar;
mod sub_table;

pub use array::ArrayColumn;
pub use base::{BaseColumn, DEFAULT_DATA_MANAGER};
pub use record::{SCALAR_RECORD_TAG, ScalarRecordColumn};
pub use scalar::ScalarColumn;
pub use sub_table::{SUB_TABLE_TAG, SubTableColumn};

/// Coarse shape of a column, one of the properties descriptor equality
/// looks at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeClass {
	Scalar,
	Array,
	Table,
}

/// A concrete kind of column description.
///
/// Implementations are registered under their [`class_name`] in the
/// [`ColumnRegistry`](crate::ColumnRegistry) so the codec can rebuild them
/// from their serialized tag.
///
/// [`class_name`]: ColumnDescriptor::class_name
pub trait ColumnDescriptor: Debug + Send + Sync + 'static {
	/// Tag under which this variant is registered and serialized.
	fn class_name(&self) -> String;

	fn shape_class(&self) -> ShapeClass;

	fn base(&self) -> &BaseColumn;

	fn base_mut(&mut self) -> &mut BaseColumn;

	fn clone_box(&self) -> Box<dyn ColumnDescriptor>;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// Writes the variant payload, without version or tag.
	fn encode(&self, writer: &mut Writer, parent: &TableAttr) -> crate::Result<()> {
		self.base().encode(writer, parent)
	}

	/// Reads the variant payload into this freshly constructed variant.
	fn decode(&mut self, reader: &mut Reader<'_>, parent: &TableAttr) -> crate::Result<()> {
		let base = BaseColumn::decode(reader, parent)?;
		expect_kind(&self.class_name(), self.base().data_kind, base.data_kind)?;
		*self.base_mut() = base;
		Ok(())
	}

	fn show(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.base().show(f, &self.class_name())
	}
}

pub(crate) fn expect_kind(tag: &str, expected: DataKind, found: DataKind) -> crate::Result<()> {
	if expected != found {
		return_error!(column::kind_mismatch(tag, expected, found));
	}
	Ok(())
}

/// Envelope around a column descriptor variant.
///
/// The envelope owns its variant exclusively and cloning it deep-clones the
/// variant. It is only ever empty after a failed [`ColumnDesc::decode_into`];
/// an empty envelope may be dropped, assigned to, compared, displayed or
/// decoded into again. Every other accessor panics on an empty envelope.
#[derive(Debug)]
pub struct ColumnDesc {
	pub(crate) column: Option<Box<dyn ColumnDescriptor>>,
}

impl ColumnDesc {
	/// Adopts an already constructed variant.
	pub fn new(column: Box<dyn ColumnDescriptor>) -> Self {
		Self {
			column: Some(column),
		}
	}

	/// Copies `column` into a new envelope.
	pub fn from_desc(column: &dyn ColumnDescriptor) -> Self {
		Self::new(column.clone_box())
	}

	pub fn scalar<T: ColumnValue + ValueCodec>(name: impl Into<String>) -> Self {
		Self::new(Box::new(ScalarColumn::<T>::new(name)))
	}

	pub fn array<T: ColumnValue + ValueCodec>(name: impl Into<String>, ndim: i32) -> Self {
		Self::new(Box::new(ArrayColumn::<T>::new(name, ndim)))
	}

	pub fn fixed_array<T: ColumnValue + ValueCodec>(name: impl Into<String>, shape: Vec<u64>) -> crate::Result<Self> {
		Ok(Self::new(Box::new(ArrayColumn::<T>::fixed(name, shape)?)))
	}

	pub fn sub_table(name: impl Into<String>, table_desc_name: impl Into<String>, columns: Vec<ColumnDesc>) -> Self {
		Self::new(Box::new(SubTableColumn::new(name, table_desc_name, columns)))
	}

	pub fn scalar_record(name: impl Into<String>) -> Self {
		Self::new(Box::new(ScalarRecordColumn::new(name)))
	}

	pub fn is_empty(&self) -> bool {
		self.column.is_none()
	}

	pub fn try_column(&self) -> crate::Result<&dyn ColumnDescriptor> {
		self.column.as_deref().ok_or_else(|| error!(column::empty_descriptor()))
	}

	/// # Panics
	///
	/// Panics if the envelope is empty.
	pub fn column(&self) -> &dyn ColumnDescriptor {
		match self.column.as_deref() {
			Some(column) => column,
			None => panic!("column descriptor is empty"),
		}
	}

	/// # Panics
	///
	/// Panics if the envelope is empty.
	pub fn column_mut(&mut self) -> &mut dyn ColumnDescriptor {
		match self.column.as_deref_mut() {
			Some(column) => column,
			None => panic!("column descriptor is empty"),
		}
	}

	/// The variant as its concrete type.
	pub fn downcast_ref<D: ColumnDescriptor>(&self) -> Option<&D> {
		self.column.as_deref()?.as_any().downcast_ref::<D>()
	}

	pub fn downcast_mut<D: ColumnDescriptor>(&mut self) -> Option<&mut D> {
		self.column.as_deref_mut()?.as_any_mut().downcast_mut::<D>()
	}

	pub fn class_name(&self) -> String {
		self.column().class_name()
	}

	pub fn shape_class(&self) -> ShapeClass {
		self.column().shape_class()
	}

	pub fn name(&self) -> &str {
		&self.column().base().name
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		self.column_mut().base_mut().name = name.into();
	}

	pub fn comment(&self) -> &str {
		&self.column().base().comment
	}

	pub fn data_manager_type(&self) -> &str {
		&self.column().base().data_manager_type
	}

	pub fn data_manager_group(&self) -> &str {
		&self.column().base().data_manager_group
	}

	/// Element kind of the column. For array columns this is the kind of a
	/// single element, see [`ColumnDesc::true_data_kind`].
	pub fn data_kind(&self) -> DataKind {
		self.column().base().data_kind
	}

	pub fn options(&self) -> ColumnOptions {
		self.column().base().options
	}

	pub fn ndim(&self) -> i32 {
		self.column().base().ndim
	}

	pub fn shape(&self) -> &[u64] {
		&self.column().base().shape
	}

	pub fn max_length(&self) -> u32 {
		self.column().base().max_length
	}

	pub fn keywords(&self) -> &Keywords {
		&self.column().base().keywords
	}

	pub fn keywords_mut(&mut self) -> &mut Keywords {
		&mut self.column_mut().base_mut().keywords
	}

	pub fn is_scalar(&self) -> bool {
		self.shape_class() == ShapeClass::Scalar
	}

	pub fn is_array(&self) -> bool {
		self.shape_class() == ShapeClass::Array
	}

	pub fn is_table(&self) -> bool {
		self.shape_class() == ShapeClass::Table
	}

	/// Scalars always have a fixed shape, arrays only with
	/// [`ColumnOptions::FIXED_SHAPE`].
	pub fn is_fixed_shape(&self) -> bool {
		self.is_scalar() || self.options().is_fixed_shape()
	}

	/// The data kind including the array dimension: `ArrayInt` for an
	/// array column of `Int`, the plain kind for everything else.
	pub fn true_data_kind(&self) -> crate::Result<DataKind> {
		let kind = self.data_kind();
		if !self.is_array() {
			return Ok(kind);
		}
		match kind.array_of() {
			Some(array) => Ok(array),
			None => return_internal_error!("array column '{}' has non-primitive element kind {}", self.name(), kind),
		}
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.column_mut().base_mut().comment = comment.into();
		self
	}

	pub fn with_options(mut self, options: ColumnOptions) -> Self {
		self.column_mut().base_mut().options = options;
		self
	}

	pub fn with_keywords(mut self, keywords: Keywords) -> Self {
		self.column_mut().base_mut().keywords = keywords;
		self
	}

	pub fn with_max_length(mut self, max_length: u32) -> Self {
		self.column_mut().base_mut().max_length = max_length;
		self
	}

	pub fn with_data_manager(mut self, data_manager_type: impl Into<String>, group: impl Into<String>) -> Self {
		let base = self.column_mut().base_mut();
		base.data_manager_type = data_manager_type.into();
		base.data_manager_group = group.into();
		self
	}
}

impl Clone for ColumnDesc {
	fn clone(&self) -> Self {
		Self {
			column: self.column.as_ref().map(|column| column.clone_box()),
		}
	}
}

impl PartialEq for ColumnDesc {
	fn eq(&self, other: &Self) -> bool {
		match (self.column.as_deref(), other.column.as_deref()) {
			(None, None) => true,
			(Some(l), Some(r)) => {
				let (lb, rb) = (l.base(), r.base());
				lb.data_kind == rb.data_kind
					&& lb.options == rb.options
					&& lb.ndim == rb.ndim
					&& l.shape_class() == r.shape_class()
			}
			_ => false,
		}
	}
}

impl Display for ColumnDesc {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Some(column) = self.column.as_deref() else {
			return writeln!(f, "ColumnDesc is empty");
		};
		column.show(f)?;
		let keywords = &column.base().keywords;
		writeln!(f, "   #keywords={}", keywords.len())?;
		f.write_str(&keywords.description())
	}
}

impl From<Box<dyn ColumnDescriptor>> for ColumnDesc {
	fn from(column: Box<dyn ColumnDescriptor>) -> Self {
		Self::new(column)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use attr::TableAttr;
pub use codec::{CodecError, FORMAT_VERSION, MAX_NESTING, Reader, ValueCodec, Writer};
pub use desc::{
	ArrayColumn, BaseColumn, ColumnDesc, ColumnDescriptor, DEFAULT_DATA_MANAGER, SCALAR_RECORD_TAG, SUB_TABLE_TAG,
	ScalarColumn, ScalarRecordColumn, ShapeClass, SubTableColumn,
};
pub use options::ColumnOptions;
pub use registry::{ColumnDescCtor, ColumnRegistry};

mod attr;
pub mod codec;
mod desc;
mod options;
mod registry;

pub type Result<T> = std::result::Result<T, tabula_type::Error>;

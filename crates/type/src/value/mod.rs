// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod array;
mod column_value;
mod complex;
mod keyword;
mod kind;
mod row_number;

pub use array::{Array, ColumnArray};
pub use column_value::ColumnValue;
pub use complex::{Complex32, Complex64};
pub use keyword::{Keyword, Keywords};
pub use kind::{DataKind, PrimitiveKind};
pub use row_number::RowNumber;

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod sort;
pub mod util;
pub mod value;

pub use error::{Error, diagnostic};
pub use sort::SortDirection;
pub use util::CowHandle;
pub use value::{
	Array, ColumnArray, ColumnValue, Complex32, Complex64, DataKind, Keyword, Keywords, PrimitiveKind, RowNumber,
};

pub type Result<T> = std::result::Result<T, Error>;

// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use expression::{ColumnExpr, ColumnFetch, ScalarExpr};
pub use sort::{Sort, SortConfig, SortKey, SortKeys};

mod expression;
mod sort;

pub type Result<T> = std::result::Result<T, tabula_type::Error>;

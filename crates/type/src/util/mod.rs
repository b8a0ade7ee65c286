// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod cow;

pub use cow::CowHandle;

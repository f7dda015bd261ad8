// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use layout::RowLayout;
pub use row::Row;

mod layout;
mod row;

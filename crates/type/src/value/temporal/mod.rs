// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod parse;
mod timestamp;
mod unit;

pub use parse::parse_timestamp;
pub use timestamp::{Timestamp, Zone};
pub use unit::DurationUnit;

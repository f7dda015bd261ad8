// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod timestamp;

pub use timestamp::parse_timestamp;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Canonical implementations of the relational window and temporal
//! bucketing operators.
//!
//! Every execution backend calls into this crate; no operator semantics live
//! anywhere else.
//!
//! - [`frame`]: inclusive window frame bounds for a row
//! - [`having`]: row filtering by a boolean predicate
//! - [`timeslice`]: calendar-aware timestamp bucketing

pub mod config;
pub mod frame;
pub mod having;
pub mod interrupt;
pub mod relation;
pub mod row;
pub mod timeslice;

pub use config::{CoreConfig, HavingConfig};
pub use frame::{FrameBound, FrameBounds, FrameMode, FrameSpec};
pub use having::{FilterOptions, RowPredicate};
pub use interrupt::Interrupt;
pub use relation::{Relation, RelationView};
pub use relwin_type::{Error, Result};
pub use row::{Row, RowLayout};

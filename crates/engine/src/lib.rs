// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Execution backends for the relwin operators.
//!
//! [`Interpreter`] walks an [`Expression`] tree on every evaluation;
//! [`Compiler`] lowers it once into closures and can render the Rust source
//! generated code uses to call each operator. Both dispatch operator calls
//! through the same [`native`] registry into `relwin-core`.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use backend::Backend;
pub use compile::{CompiledExpr, Compiler};
pub use expression::Expression;
pub use interpret::Interpreter;
pub use operand::Operand;
pub use relwin_type::{Error, Result};
pub use variables::Variables;

mod backend;
pub mod compile;
pub mod expression;
pub mod interpret;
pub mod native;
mod operand;
pub mod ops;
mod variables;

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! # Aasm-Typeck
//!
//! Types the statements of an aasm action. Each statement is an [Opcode] and its operand expressions, as
//! handed over by the parser. The opcode selects the operator context that validates the operands,
//! see [aasm_types::Operator].
//!
//! Single statements are checked with [check_instruction]. Whole actions go through an [ActionChecker], which
//! also tracks the locals declared along the way and collects errors until the action is done.

mod check;
pub mod config;
mod error;
mod instruction;
mod opcode;

pub use check::{check_instruction, ActionChecker};
pub use config::Config;
pub use error::TypeckError;
pub use instruction::Instruction;
pub use opcode::Opcode;

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use aasm_common::thiserror::{self, Error};
use aasm_scope::ScopeError;
use aasm_types::{Arity, TypeError};

use crate::Opcode;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeckError {
    #[error("unknown opcode \"{0}\"")]
    UnknownOpcode(String),
    #[error("{opcode} expects {expected} operand(s), but got {found}")]
    OperandCount {
        opcode: Opcode,
        expected: Arity,
        found: usize,
    },
    #[error("no valid operand types for {opcode}: {}", operands.join("; "))]
    NoMatchingType {
        opcode: Opcode,
        ///`explain` line of each operand.
        operands: Vec<String>,
    },
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error("{0} error(s) occurred while typing")]
    ErrorsOccurred(usize),
}

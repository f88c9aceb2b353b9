/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use std::{fmt::Display, ops::Range};

use aasm_scope::Scope;
use aasm_types::Argument;

use crate::Opcode;

///One statement of an action. Operands are classified when the instruction is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Argument>,
}

impl Instruction {
    pub fn new<S: AsRef<str>>(scope: &Scope, opcode: Opcode, exprs: &[S]) -> Self {
        Instruction {
            opcode,
            operands: exprs
                .iter()
                .map(|expr| Argument::new(scope, expr.as_ref()))
                .collect(),
        }
    }

    ///Uses already classified `operands`.
    pub fn from_arguments(opcode: Opcode, operands: Vec<Argument>) -> Self {
        Instruction { opcode, operands }
    }

    ///True if every operand was committed to a type.
    pub fn is_typed(&self) -> bool {
        self.operands.iter().all(|op| op.type_in_op().is_some())
    }

    ///Byte range of each operand in the [Display] form of this instruction.
    pub fn operand_spans(&self) -> Vec<Range<usize>> {
        let mut start = self.opcode.mnemonic().len() + 1;
        self.operands
            .iter()
            .map(|op| {
                let span = start..start + op.expr().len();
                start = span.end + 2;
                span
            })
            .collect()
    }

    ///`explain` line of each operand.
    pub fn explain_operands(&self) -> Vec<String> {
        self.operands.iter().map(|op| op.explain()).collect()
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        for (i, op) in self.operands.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", op.expr())?;
            } else {
                write!(f, ", {}", op.expr())?;
            }
        }
        Ok(())
    }
}

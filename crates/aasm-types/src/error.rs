/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use aasm_common::thiserror::{self, Error};

use crate::context::{Arity, Operator};

///Misuse of the typing API. Type mismatches are not errors, validators report those by returning
/// `false` / `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("{operator} takes {expected} operand(s), but {found} were given")]
    Arity {
        operator: Operator,
        expected: Arity,
        found: usize,
    },
    #[error("resolution of {resolved} operand(s) applied to {found} operand(s)")]
    ResolutionMismatch { resolved: usize, found: usize },
}

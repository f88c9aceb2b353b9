/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use aasm_common::thiserror::{self, Error};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("{owner} has no module variable named \"{name}\"")]
    UnknownModuleVariable { owner: String, name: String },

    #[error("\"{name}\" is already declared in action {action}")]
    AlreadyDeclared { action: String, name: String },
}

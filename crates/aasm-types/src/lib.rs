/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! # Aasm-Types
//!
//! Argument typing for aasm. Every expression of a statement becomes an [Argument] that knows
//! all readings ([CompositeType]s) the expression could have in its [Scope](aasm_scope::Scope).
//!
//! An operator then _validates_ its operands. Either through the in-place `*_context` methods on
//! [Argument], or through [Operator::resolve], which only computes the [Resolution] without committing it.
//!
//! ### Lattice
//!
//! Types are sets of [Tag]s, optionally carrying attributes (the enum an enum value belongs to, the module
//! type of a module variable). See [lattice].
//!
//! ### Classification
//!
//! Done once when an argument is created. Rules for agent parameters, action locals, received and sent message
//! fields, and literals all add their readings independently.

mod argument;
mod classify;
pub mod context;
mod error;
pub mod lattice;
mod validate;

pub use argument::{Argument, UNKNOWN_TYPE};
pub use classify::{RECEIVED_MESSAGE, SEND_MESSAGE};
pub use context::{find_module_variable_type, Arity, Operator, Resolution};
pub use error::TypeError;
pub use lattice::{AttrKey, CompositeType, Tag, TypeQuery};

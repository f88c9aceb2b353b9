/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use std::fmt::Display;

use aasm_scope::Scope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lattice::{CompositeType, TypeQuery};

///Printed in place of the operation type, as long as no validator committed one.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

///One occurrence of an expression in some operation, together with all readings it could have.
///
/// The readings ([Argument::types]) are found once, when the argument is created. An operator-context
/// validator then picks one of them for the operation being validated ([Argument::type_in_op]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    expr: String,
    pub(crate) types: Vec<CompositeType>,
    type_in_op: Option<CompositeType>,
}

impl Argument {
    ///Classifies `expr` in `scope`.
    pub fn new(scope: &Scope, expr: impl Into<String>) -> Self {
        let mut arg = Self::unclassified(expr);
        arg.set_types(scope);
        arg
    }

    ///Argument without any readings.
    pub fn unclassified(expr: impl Into<String>) -> Self {
        Argument {
            expr: expr.into(),
            types: Vec::new(),
            type_in_op: None,
        }
    }

    ///Argument with the given readings, bypassing classification.
    pub fn from_types(expr: impl Into<String>, types: Vec<CompositeType>) -> Self {
        Argument {
            expr: expr.into(),
            types,
            type_in_op: None,
        }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    ///All readings, in the order they were found.
    pub fn types(&self) -> &[CompositeType] {
        &self.types
    }

    ///The reading the last successful validation committed this argument to.
    pub fn type_in_op(&self) -> Option<&CompositeType> {
        self.type_in_op.as_ref()
    }

    pub fn has_type(&self, query: &TypeQuery) -> bool {
        self.select(query).is_some()
    }

    ///The first reading that matches `query`.
    pub fn select(&self, query: &TypeQuery) -> Option<&CompositeType> {
        self.types.iter().find(|ty| ty.matches(query))
    }

    ///Commits to the first reading matching `query`. Returns false, and leaves the
    /// committed type as is, if there is none.
    pub fn set_op_type(&mut self, query: &TypeQuery) -> bool {
        match self.select(query).cloned() {
            Some(ty) => {
                self.type_in_op = Some(ty);
                true
            }
            None => false,
        }
    }

    ///Commits to `ty`. Used when applying a [Resolution](crate::context::Resolution).
    pub fn commit(&mut self, ty: CompositeType) {
        self.type_in_op = Some(ty);
    }

    ///Splits the argument into one argument per reading. Each candidate only knows its own reading, and is
    /// already committed to it.
    pub fn candidates(&self) -> Vec<Argument> {
        self.types
            .iter()
            .map(|ty| Argument {
                expr: self.expr.clone(),
                types: vec![ty.clone()],
                type_in_op: Some(ty.clone()),
            })
            .collect()
    }

    ///One line description of all readings, like `x: [ Float_AgentParam_Mutable, Integer_Immutable_Literal ]`.
    pub fn explain(&self) -> String {
        if self.types.is_empty() {
            return format!("{}: [ ]", self.expr);
        }
        let names = self
            .types
            .iter()
            .map(|ty| ty.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: [ {} ]", self.expr, names)
    }

    pub fn explain_type_in_op(&self) -> String {
        match &self.type_in_op {
            Some(ty) => ty.name(),
            None => UNKNOWN_TYPE.to_owned(),
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (in op: {})", self.explain(), self.explain_type_in_op())
    }
}

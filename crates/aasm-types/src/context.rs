/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! Operator contexts.
//!
//! Each DSL operator family has a type contract its operands have to fulfil. The contract is a list of
//! _alternatives_, each alternative naming one [TypeQuery] per operand. The first alternative all
//! operands satisfy wins, and each operand is resolved to its first reading that matches its query.
//!
//! The functions in here don't touch the operands. They return a [Resolution], the chosen reading per operand,
//! which can be applied later (see [Resolution::apply]), or thrown away if the caller is only speculating.

use std::fmt::Display;

use aasm_scope::Scope;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    classify::{message_field, RECEIVED_MESSAGE, SEND_MESSAGE},
    error::TypeError,
    lattice::{AttrKey, CompositeType, Tag, TypeQuery},
    Argument,
};

///The reading chosen for each operand of one operation. Index `n` belongs to the `n`-th operand.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    types: SmallVec<[CompositeType; 4]>,
}

impl Resolution {
    pub fn new(types: impl IntoIterator<Item = CompositeType>) -> Self {
        Resolution {
            types: types.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    ///The reading chosen for `operand`.
    pub fn operand(&self, operand: usize) -> Option<&CompositeType> {
        self.types.get(operand)
    }

    ///Iterates `(operand index, chosen reading)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CompositeType)> + '_ {
        self.types.iter().enumerate()
    }

    fn check_count(&self, found: usize) -> Result<(), TypeError> {
        if found == self.types.len() {
            Ok(())
        } else {
            Err(TypeError::ResolutionMismatch {
                resolved: self.types.len(),
                found,
            })
        }
    }

    ///Commits every operand to its chosen reading. `operands` must be given in the order they were resolved in.
    /// Nothing is committed if the operand count doesn't match.
    pub fn apply(&self, operands: &mut [&mut Argument]) -> Result<(), TypeError> {
        self.check_count(operands.len())?;
        for (operand, ty) in operands.iter_mut().zip(self.types.iter()) {
            operand.commit(ty.clone());
        }
        Ok(())
    }

    ///Like [Resolution::apply], but returns committed copies of `operands` instead.
    pub fn committed(&self, operands: &[&Argument]) -> Result<Vec<Argument>, TypeError> {
        self.check_count(operands.len())?;
        Ok(operands
            .iter()
            .zip(self.types.iter())
            .map(|(operand, ty)| {
                let mut copy = (*operand).clone();
                copy.commit(ty.clone());
                copy
            })
            .collect())
    }
}

///How many operands an operator takes, including the target.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

///All operator families. The first operand is always the one the validator is invoked on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Declaration,
    UnorderedComparison,
    OrderedComparison,
    Math,
    MathExponentiation,
    MathModulo,
    ListModification,
    ListNRemoval,
    Assignment,
    ListSubset,
    ListInclusion,
    ListClear,
    ListLength,
    Send,
    RandomNumberGeneration,
    RoundNumber,
    ListRead,
    ListWrite,
}

impl Operator {
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Declaration => "declaration",
            Operator::UnorderedComparison => "unordered comparison",
            Operator::OrderedComparison => "ordered comparison",
            Operator::Math => "math",
            Operator::MathExponentiation => "exponentiation",
            Operator::MathModulo => "modulo",
            Operator::ListModification => "list modification",
            Operator::ListNRemoval => "list n-removal",
            Operator::Assignment => "assignment",
            Operator::ListSubset => "list subset",
            Operator::ListInclusion => "list inclusion",
            Operator::ListClear => "list clear",
            Operator::ListLength => "list length",
            Operator::Send => "send",
            Operator::RandomNumberGeneration => "random number generation",
            Operator::RoundNumber => "round",
            Operator::ListRead => "list read",
            Operator::ListWrite => "list write",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::ListClear | Operator::Send | Operator::RoundNumber => Arity::Exact(1),
            Operator::Declaration
            | Operator::UnorderedComparison
            | Operator::OrderedComparison
            | Operator::Math
            | Operator::ListModification
            | Operator::ListNRemoval
            | Operator::Assignment
            | Operator::ListInclusion
            | Operator::ListLength => Arity::Exact(2),
            Operator::MathExponentiation
            | Operator::MathModulo
            | Operator::ListSubset
            | Operator::ListRead
            | Operator::ListWrite => Arity::Exact(3),
            Operator::RandomNumberGeneration => Arity::AtLeast(1),
        }
    }

    ///Resolves `operands` against this operator's contract. Fails only if the operand count is wrong.
    pub fn resolve(
        &self,
        operands: &[&Argument],
        scope: &Scope,
    ) -> Result<Option<Resolution>, TypeError> {
        if !self.arity().accepts(operands.len()) {
            return Err(TypeError::Arity {
                operator: *self,
                expected: self.arity(),
                found: operands.len(),
            });
        }

        let res = match (self, operands) {
            (Operator::Declaration, [target, rhs]) => declaration(target, rhs),
            (Operator::UnorderedComparison, [lhs, rhs]) => unordered_comparison(lhs, rhs),
            (Operator::OrderedComparison, [lhs, rhs]) => ordered_comparison(lhs, rhs),
            (Operator::Math, [target, rhs]) => math(target, rhs),
            (Operator::MathExponentiation, [target, base, arg]) => {
                math_exponentiation(target, base, arg)
            }
            (Operator::MathModulo, [target, dividend, divisor]) => {
                math_modulo(target, dividend, divisor)
            }
            (Operator::ListModification, [target, rhs]) => list_modification(target, rhs),
            (Operator::ListNRemoval, [target, rhs]) => list_n_removal(target, rhs),
            (Operator::Assignment, [target, rhs]) => assignment(target, rhs, scope),
            (Operator::ListSubset, [target, from_list, num]) => {
                list_subset(target, from_list, num)
            }
            (Operator::ListInclusion, [target, rhs]) => list_inclusion(target, rhs),
            (Operator::ListClear, [target]) => list_clear(target),
            (Operator::ListLength, [target, rhs]) => list_length(target, rhs),
            (Operator::Send, [target]) => send(target),
            (Operator::RandomNumberGeneration, [target, args @ ..]) => {
                random_number_generation(target, args)
            }
            (Operator::RoundNumber, [target]) => round_number(target),
            (Operator::ListRead, [target, src, idx]) => list_read(target, src, idx),
            (Operator::ListWrite, [target, idx, value]) => list_write(target, idx, value),
            //arity was checked above
            _ => None,
        };

        Ok(res)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn q(tags: &[Tag]) -> TypeQuery {
    TypeQuery::of(tags)
}

///Tries each alternative in order. An alternative holds one query per operand.
fn resolve_first(operands: &[&Argument], alternatives: &[&[TypeQuery]]) -> Option<Resolution> {
    alternatives.iter().find_map(|queries| {
        debug_assert_eq!(queries.len(), operands.len());
        operands
            .iter()
            .zip(queries.iter())
            .map(|(operand, query)| operand.select(query).cloned())
            .collect::<Option<SmallVec<[CompositeType; 4]>>>()
            .map(|types| Resolution { types })
    })
}

//DECL
///`target` is the name being declared. It has no readings yet, it is declared as whatever `rhs` is.
pub fn declaration(_target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    if let Some(ty) = rhs.select(&q(&[Float])) {
        Some(Resolution::new([
            CompositeType::compose(&[Float, Declared, Mutable]),
            ty.clone(),
        ]))
    } else if let Some(ty) = rhs.select(&q(&[Connection])) {
        Some(Resolution::new([
            CompositeType::compose(&[Connection, Declared, Mutable]),
            ty.clone(),
        ]))
    } else {
        None
    }
}

//IEQ, INEQ, WEQ, WNEQ
pub fn unordered_comparison(lhs: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[lhs, rhs],
        &[
            &[q(&[Float]), q(&[Float])],
            &[
                q(&[Enum]),
                q(&[EnumValue]).with_attribute(AttrKey::FromEnum, lhs.expr()),
            ],
        ],
    )
}

//IGT, IGTEQ, ILT, ILTEQ, WGT, WGTEQ, WLT, WLTEQ
pub fn ordered_comparison(lhs: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[lhs, rhs], &[&[q(&[Float]), q(&[Float])]])
}

//ADD, SUBT, MULT, DIV, SIN, COS
pub fn math(target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target, rhs], &[&[q(&[Float, Mutable]), q(&[Float])]])
}

//POW, LOG
pub fn math_exponentiation(target: &Argument, base: &Argument, arg: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, base, arg],
        &[&[q(&[Float, Mutable]), q(&[Float]), q(&[Float])]],
    )
}

//MOD
pub fn math_modulo(
    target: &Argument,
    dividend: &Argument,
    divisor: &Argument,
) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, dividend, divisor],
        &[&[q(&[Float, Mutable]), q(&[Float]), q(&[Float])]],
    )
}

//ADDE, REME
pub fn list_modification(target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, rhs],
        &[
            &[q(&[ConnectionList, Mutable]), q(&[Connection])],
            &[q(&[MessageList, Mutable]), q(&[Message])],
            &[q(&[FloatList, Mutable]), q(&[Float])],
        ],
    )
}

//REMEN
pub fn list_n_removal(target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target, rhs], &[&[q(&[List, Mutable]), q(&[Float])]])
}

///`(target, value)` pairs an assignment accepts, in the order they are tried.
pub const BASIC_ASSIGNMENTS: [(Tag, Tag); 9] = [
    (Tag::Enum, Tag::EnumValue),
    (Tag::Float, Tag::Float),
    (Tag::Message, Tag::MessageList),
    (Tag::Connection, Tag::Connection),
    (Tag::ConnectionList, Tag::ConnectionList),
    (Tag::MessageList, Tag::MessageList),
    (Tag::FloatList, Tag::FloatList),
    (Tag::SendMessageParam, Tag::Float),
    (Tag::SendMessageParam, Tag::ModuleVariable),
];

//SET
pub fn assignment(target: &Argument, rhs: &Argument, scope: &Scope) -> Option<Resolution> {
    use Tag::*;
    for (target_tag, value_tag) in BASIC_ASSIGNMENTS {
        if let Some(res) = resolve_first(
            &[target, rhs],
            &[&[q(&[target_tag, Mutable]), q(&[value_tag])]],
        ) {
            return Some(res);
        }
    }

    //Module variables can be assigned to each other only if they are of the same module type.
    if target.has_type(&q(&[ModuleVariable, Mutable])) && rhs.has_type(&q(&[ModuleVariable])) {
        let target_subtype = find_module_variable_type(target, scope);
        let rhs_subtype = find_module_variable_type(rhs, scope);
        if target_subtype.is_empty() || target_subtype != rhs_subtype {
            return None;
        }

        return resolve_first(
            &[target, rhs],
            &[&[
                q(&[ModuleVariable, Mutable]).with_attribute(AttrKey::Subtype, target_subtype),
                q(&[ModuleVariable]).with_attribute(AttrKey::Subtype, rhs_subtype),
            ]],
        );
    }

    None
}

///Resolves the module type of a module variable argument by asking, in that order, the agent, the action,
/// the received message and the message being sent. Returns an empty string if none of them knows `arg`.
pub fn find_module_variable_type(arg: &Argument, scope: &Scope) -> String {
    use Tag::*;
    if !arg.has_type(&q(&[ModuleVariable])) {
        return String::new();
    }

    let expr = arg.expr();
    let lookup = if scope.agent.module_variables.contains_key(expr) {
        scope.agent.get_module_variable_type(expr)
    } else if scope.action.is_declared_module_variable(expr) {
        scope.action.get_module_variable_type(expr)
    } else if arg.has_type(&q(&[ReceivedMessageParam])) {
        match (
            scope.received_message(),
            message_field(expr, RECEIVED_MESSAGE),
        ) {
            (Some(message), Some(field)) => message.get_module_variable_type(field),
            _ => return String::new(),
        }
    } else if arg.has_type(&q(&[SendMessageParam])) {
        match (scope.send_message(), message_field(expr, SEND_MESSAGE)) {
            (Some(message), Some(field)) => message.get_module_variable_type(field),
            _ => return String::new(),
        }
    } else {
        return String::new();
    };

    match lookup {
        Ok(subtype) => subtype.to_owned(),
        Err(_e) => {
            #[cfg(feature = "log")]
            log::warn!("could not resolve module type of {}: {}", expr, _e);
            String::new()
        }
    }
}

//SUBS
pub fn list_subset(target: &Argument, from_list: &Argument, num: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, from_list, num],
        &[&[q(&[ConnectionList, Mutable]), q(&[ConnectionList]), q(&[Float])]],
    )
}

//IN, NIN
pub fn list_inclusion(target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, rhs],
        &[
            &[q(&[ConnectionList]), q(&[Connection])],
            &[q(&[MessageList]), q(&[Message])],
            &[q(&[FloatList]), q(&[Float])],
        ],
    )
}

//CLR
pub fn list_clear(target: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target], &[&[q(&[List, Mutable])]])
}

//LEN
pub fn list_length(target: &Argument, rhs: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target, rhs], &[&[q(&[Float, Mutable]), q(&[List])]])
}

//SEND
pub fn send(target: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target], &[&[q(&[ConnectionList])], &[q(&[Connection])]])
}

//RAND
pub fn random_number_generation(target: &Argument, args: &[&Argument]) -> Option<Resolution> {
    use Tag::*;
    let mut operands = Vec::with_capacity(args.len() + 1);
    operands.push(target);
    operands.extend_from_slice(args);

    let mut queries = Vec::with_capacity(operands.len());
    queries.push(q(&[Float, Mutable]));
    queries.extend(args.iter().map(|_| q(&[Float])));

    resolve_first(&operands, &[queries.as_slice()])
}

//ROUND
pub fn round_number(target: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(&[target], &[&[q(&[Float, Mutable])]])
}

//LR
pub fn list_read(target: &Argument, src: &Argument, idx: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, src, idx],
        &[
            &[q(&[Float, Mutable]), q(&[FloatList]), q(&[Float])],
            &[q(&[Connection, Mutable]), q(&[ConnectionList]), q(&[Float])],
        ],
    )
}

//LW
pub fn list_write(target: &Argument, idx: &Argument, value: &Argument) -> Option<Resolution> {
    use Tag::*;
    resolve_first(
        &[target, idx, value],
        &[
            &[q(&[FloatList, Mutable]), q(&[Float]), q(&[Float])],
            &[q(&[ConnectionList, Mutable]), q(&[Float]), q(&[Connection])],
        ],
    )
}

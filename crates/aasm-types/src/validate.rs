/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! In-place operator-context validators.
//!
//! Each validator is invoked on the operation's first operand (the target) and takes the remaining operands.
//! On success every operand is committed to the reading chosen by the matching [context](crate::context)
//! function and `true` is returned. On failure nothing is touched.

use aasm_scope::Scope;

use crate::{context, context::Resolution, Argument};

impl Argument {
    fn apply_resolution(
        operands: &mut [&mut Argument],
        resolution: Option<Resolution>,
        operator: &'static str,
    ) -> bool {
        let applied = match resolution {
            Some(res) => res.apply(operands),
            None => {
                #[cfg(feature = "log")]
                log::debug!("no {} context for {}", operator, operands[0].explain());
                #[cfg(not(feature = "log"))]
                let _ = operator;
                return false;
            }
        };

        match applied {
            Ok(()) => {
                #[cfg(feature = "log")]
                log::debug!(
                    "{} context of {}: [{}]",
                    operator,
                    operands[0].expr(),
                    operands
                        .iter()
                        .map(|op| op.explain_type_in_op())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                true
            }
            Err(_e) => {
                #[cfg(feature = "log")]
                log::warn!("{} context of {}: {}", operator, operands[0].expr(), _e);
                false
            }
        }
    }

    pub fn declaration_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::declaration(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "declaration")
    }

    pub fn unordered_comparison_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::unordered_comparison(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "unordered comparison")
    }

    pub fn ordered_comparison_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::ordered_comparison(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "ordered comparison")
    }

    pub fn math_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::math(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "math")
    }

    pub fn math_exponentiation_context(&mut self, base: &mut Argument, arg: &mut Argument) -> bool {
        let res = context::math_exponentiation(self, base, arg);
        Self::apply_resolution(&mut [self, base, arg], res, "exponentiation")
    }

    pub fn math_modulo_context(&mut self, dividend: &mut Argument, divisor: &mut Argument) -> bool {
        let res = context::math_modulo(self, dividend, divisor);
        Self::apply_resolution(&mut [self, dividend, divisor], res, "modulo")
    }

    ///Adding or removing a single element.
    pub fn list_modification_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::list_modification(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "list modification")
    }

    pub fn list_n_removal_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::list_n_removal(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "list n-removal")
    }

    ///Module variables are resolved against `scope` to compare their module types.
    pub fn assignment_context(&mut self, rhs: &mut Argument, scope: &Scope) -> bool {
        let res = context::assignment(self, rhs, scope);
        Self::apply_resolution(&mut [self, rhs], res, "assignment")
    }

    pub fn list_subset_context(&mut self, from_list: &mut Argument, num: &mut Argument) -> bool {
        let res = context::list_subset(self, from_list, num);
        Self::apply_resolution(&mut [self, from_list, num], res, "list subset")
    }

    pub fn list_inclusion_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::list_inclusion(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "list inclusion")
    }

    pub fn list_clear_context(&mut self) -> bool {
        let res = context::list_clear(self);
        Self::apply_resolution(&mut [self], res, "list clear")
    }

    pub fn list_length_context(&mut self, rhs: &mut Argument) -> bool {
        let res = context::list_length(self, rhs);
        Self::apply_resolution(&mut [self, rhs], res, "list length")
    }

    pub fn send_context(&mut self) -> bool {
        let res = context::send(self);
        Self::apply_resolution(&mut [self], res, "send")
    }

    ///Any number of bounds, including none.
    pub fn random_number_generation_context(&mut self, args: &mut [&mut Argument]) -> bool {
        let res = {
            let shared = args.iter().map(|a| &**a).collect::<Vec<&Argument>>();
            context::random_number_generation(self, &shared)
        };
        let mut operands: Vec<&mut Argument> = Vec::with_capacity(args.len() + 1);
        operands.push(self);
        operands.extend(args.iter_mut().map(|a| &mut **a));
        Self::apply_resolution(&mut operands, res, "random number generation")
    }

    pub fn round_number_context(&mut self) -> bool {
        let res = context::round_number(self);
        Self::apply_resolution(&mut [self], res, "round")
    }

    pub fn list_read_context(&mut self, src: &mut Argument, idx: &mut Argument) -> bool {
        let res = context::list_read(self, src, idx);
        Self::apply_resolution(&mut [self, src, idx], res, "list read")
    }

    pub fn list_write_context(&mut self, idx: &mut Argument, value: &mut Argument) -> bool {
        let res = context::list_write(self, idx, value);
        Self::apply_resolution(&mut [self, idx, value], res, "list write")
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! The typing pass itself.

use aasm_common::{AasmError, ErrorReporter};
use aasm_scope::Scope;
use aasm_types::{Argument, Operator, Resolution, Tag};

use crate::{config::Config, error::TypeckError, Instruction, Opcode};

///Types `instruction` in `scope`. On success every operand is committed to its type in this operation.
pub fn check_instruction(
    scope: &Scope,
    instruction: &mut Instruction,
    config: &Config,
) -> Result<(), TypeckError> {
    let opcode = instruction.opcode;
    let expected = opcode.arity();
    if !expected.accepts(instruction.operands.len()) {
        return Err(TypeckError::OperandCount {
            opcode,
            expected,
            found: instruction.operands.len(),
        });
    }

    let operator = opcode.operator();
    let mut resolution = None;
    if config.try_candidates {
        resolution = resolve_candidates(
            scope,
            operator,
            &instruction.operands,
            config.max_candidate_combinations,
        )?;
    }

    if resolution.is_none() {
        let operands = instruction.operands.iter().collect::<Vec<_>>();
        resolution = operator.resolve(&operands, scope)?;
    }

    match resolution {
        Some(res) => {
            let mut operands = instruction.operands.iter_mut().collect::<Vec<_>>();
            res.apply(&mut operands)?;
            #[cfg(feature = "log")]
            log::debug!("typed {}", instruction);
            Ok(())
        }
        None => Err(TypeckError::NoMatchingType {
            opcode,
            operands: instruction.explain_operands(),
        }),
    }
}

///Walks all combinations of single readings. The last operand changes fastest.
fn resolve_candidates(
    scope: &Scope,
    operator: Operator,
    operands: &[Argument],
    max_combinations: usize,
) -> Result<Option<Resolution>, TypeckError> {
    let candidates = operands
        .iter()
        .map(|op| op.candidates())
        .collect::<Vec<_>>();
    if candidates.iter().any(|c| c.is_empty()) {
        return Ok(None);
    }

    let mut indices = vec![0usize; candidates.len()];
    for _trial in 0..max_combinations {
        let combination = indices
            .iter()
            .zip(candidates.iter())
            .map(|(idx, cand)| &cand[*idx])
            .collect::<Vec<_>>();

        if let Some(res) = operator.resolve(&combination, scope)? {
            #[cfg(feature = "log")]
            log::trace!("{}: candidate combination {} resolved", operator, _trial);
            return Ok(Some(res));
        }

        //advance, carrying into the previous operand
        let mut pos = indices.len();
        loop {
            if pos == 0 {
                return Ok(None);
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < candidates[pos].len() {
                break;
            }
            indices[pos] = 0;
        }
    }

    #[cfg(feature = "log")]
    log::trace!(
        "{}: gave up after {} candidate combinations",
        operator,
        max_combinations
    );
    Ok(None)
}

///Types the statements of a single action in order. Locals declared by a `DECL` are visible to all
/// following statements.
pub struct ActionChecker {
    scope: Scope,
    config: Config,
    instructions: Vec<Instruction>,
    reporter: ErrorReporter<TypeckError>,
}

impl ActionChecker {
    pub fn new(scope: Scope, config: Config) -> Self {
        ActionChecker {
            scope,
            config,
            instructions: Vec::new(),
            reporter: ErrorReporter::new(),
        }
    }

    ///The scope as seen by the next statement.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn reporter(&self) -> &ErrorReporter<TypeckError> {
        &self.reporter
    }

    ///Like [ActionChecker::check_statement], but parses the opcode first.
    pub fn check_mnemonic<S: AsRef<str>>(
        &mut self,
        mnemonic: &str,
        exprs: &[S],
    ) -> Result<(), TypeckError> {
        match mnemonic.parse::<Opcode>() {
            Ok(opcode) => self.check_statement(opcode, exprs),
            Err(e) => {
                let statement = std::iter::once(mnemonic)
                    .chain(exprs.iter().map(|e| e.as_ref()))
                    .collect::<Vec<_>>()
                    .join(" ");
                let report = AasmError::new(e.clone()).with_context(statement);
                self.on_error(e, report)
            }
        }
    }

    ///Classifies `exprs` in the current scope and types the statement. Errors are collected, and only returned
    /// if the pass is configured to abort on the first one.
    pub fn check_statement<S: AsRef<str>>(
        &mut self,
        opcode: Opcode,
        exprs: &[S],
    ) -> Result<(), TypeckError> {
        let mut instruction = Instruction::new(&self.scope, opcode, exprs);
        match self.type_instruction(&mut instruction) {
            Ok(()) => {
                self.instructions.push(instruction);
                Ok(())
            }
            Err(e) => {
                let mut report = AasmError::new(e.clone()).with_context(&instruction);
                for (span, operand) in instruction
                    .operand_spans()
                    .into_iter()
                    .zip(instruction.operands.iter())
                {
                    report = report.with_label(span, operand.explain());
                }
                self.instructions.push(instruction);
                self.on_error(e, report)
            }
        }
    }

    fn type_instruction(&mut self, instruction: &mut Instruction) -> Result<(), TypeckError> {
        check_instruction(&self.scope, instruction, &self.config)?;
        if instruction.opcode == Opcode::Decl {
            self.declare(instruction)?;
        }
        Ok(())
    }

    ///Adds the target of a typed `DECL` to the action.
    fn declare(&mut self, instruction: &Instruction) -> Result<(), TypeckError> {
        let Some(target) = instruction.operands.first() else {
            return Ok(());
        };
        let Some(ty) = target.type_in_op() else {
            return Ok(());
        };

        if ty.has_tag(Tag::Float) {
            self.scope.action.declare_float(target.expr())?;
        } else if ty.has_tag(Tag::Connection) {
            self.scope.action.declare_connection(target.expr())?;
        }

        #[cfg(feature = "log")]
        log::trace!("declared {} as {}", target.expr(), ty);
        Ok(())
    }

    fn on_error(
        &mut self,
        error: TypeckError,
        report: AasmError<TypeckError>,
    ) -> Result<(), TypeckError> {
        #[cfg(feature = "log")]
        log::debug!("statement failed: {}", error);
        self.reporter.push_error(report);
        if self.config.abort_on_error {
            Err(error)
        } else {
            Ok(())
        }
    }

    ///All statements typed so far, including the failed ones.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    ///Returns the typed statements, or reports all collected errors.
    pub fn finish(self) -> Result<Vec<Instruction>, TypeckError> {
        if self.reporter.has_errors() {
            self.reporter.report_all();
            return Err(TypeckError::ErrorsOccurred(self.reporter.error_count()));
        }

        #[cfg(feature = "log")]
        log::info!(
            "typed {} statement(s) of action {}",
            self.instructions.len(),
            self.scope.action.name
        );
        Ok(self.instructions)
    }
}

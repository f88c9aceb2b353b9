/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use std::error::Error;

use smallvec::SmallVec;

use crate::AasmError;

///Helper utility that collects [AasmError]s, and reports them when asked.
pub struct ErrorReporter<E: Error> {
    errors: SmallVec<[AasmError<E>; 4]>,
}

impl<E: Error> Default for ErrorReporter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Error> ErrorReporter<E> {
    pub fn new() -> Self {
        ErrorReporter {
            errors: SmallVec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn push_error(&mut self, error: AasmError<E>) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[AasmError<E>] {
        &self.errors
    }

    ///Prints all errors to stderr
    pub fn report_all(&self) {
        log::info!("reporting {} errors", self.errors.len());
        for error in &self.errors {
            error.report();
        }
    }

    pub fn take_errors(self) -> SmallVec<[AasmError<E>; 4]> {
        self.errors
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! Config options for the typing pass

#[derive(Debug, Clone)]
pub struct Config {
    ///If true, operands are first resolved per combination of their single readings, in reading order. So the first
    /// reading of an operand that takes part in _any_ valid typing wins. Otherwise (and as fallback) the operator's
    /// alternatives are tried in order against all readings at once.
    pub try_candidates: bool,
    ///Upper bound on the combinations tried per statement.
    pub max_candidate_combinations: usize,
    ///Stop at the first statement that fails, instead of collecting all errors.
    pub abort_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            try_candidates: false,
            max_candidate_combinations: 256,
            abort_on_error: false,
        }
    }
}

impl Config {
    pub fn with_try_candidates(mut self, try_candidates: bool) -> Self {
        self.try_candidates = try_candidates;
        self
    }

    pub fn with_max_candidate_combinations(mut self, max: usize) -> Self {
        self.max_candidate_combinations = max;
        self
    }

    pub fn with_abort_on_error(mut self, abort: bool) -> Self {
        self.abort_on_error = abort;
        self
    }
}

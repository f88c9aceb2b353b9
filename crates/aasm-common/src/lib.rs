/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */

//! Common diagnosis helper. Mostly the error wrapper the typing passes report with, and a
//! collector that gathers those errors until a pass is done.

pub use ariadne;
pub use smallvec;
pub use thiserror;

mod error;
mod reporter;

pub use error::{error_reporter, AasmError, Span, BACKTRACE_ENV};
pub use reporter::ErrorReporter;

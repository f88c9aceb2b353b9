/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2024 Tendsin Mende
 */
use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Range,
};

use ariadne::{Label, Report, ReportBuilder, Source};
use backtrace::Backtrace;
use smallvec::SmallVec;

///If set, every [AasmError] captures the backtrace of its creation.
pub const BACKTRACE_ENV: &str = "AASM_BACKTRACE";

///Byte range into the statement text of an [AasmError].
pub type Span = Range<usize>;

pub fn error_reporter<'a>(err: impl ToString, offset: usize) -> ReportBuilder<'a, Span> {
    Report::build(ariadne::ReportKind::Error, (), offset)
        .with_config(ariadne::Config::default().with_index_type(ariadne::IndexType::Byte))
        .with_message(err)
}

///Common error type for the aasm crates. Allows you to build a base error from any
/// type `E: Error`. Once build, the error can be augmented with additional context that will be
/// printed when using [AasmError::report].
///
/// It also allows you to covert any `AasmError<A>` to `AasmError<B>`, if `A` implements `Into<B>`.
/// You are encouraged to use [thiserror] to derive your `E` type, and use [AasmError] only to embedded your error.
pub struct AasmError<E: Error> {
    pub error: E,
    ///The statement the error was found in, if known. Labels point into this text.
    pub context: Option<String>,
    ///All labels that might be attached to the error.
    pub labels: SmallVec<[Label<Span>; 4]>,
    ///Additional lines printed below the error.
    pub notes: SmallVec<[String; 4]>,
    pub backtrace: Option<Backtrace>,
}

impl<E: Error> AasmError<E> {
    pub fn new(error: E) -> Self {
        AasmError {
            error,
            context: None,
            labels: SmallVec::new(),
            notes: SmallVec::new(),
            backtrace: if std::env::var(BACKTRACE_ENV).is_ok() {
                Some(Backtrace::new())
            } else {
                None
            },
        }
    }

    ///Attaches the statement `context` this error occurred in.
    pub fn with_context(mut self, context: impl ToString) -> Self {
        self.context = Some(context.to_string());
        self
    }

    ///Pushes a simple _info_ label at `span` of the context.
    pub fn with_label(mut self, span: Span, message: impl ToString) -> Self {
        self.labels.push(Label::new(span).with_message(message));
        self
    }

    ///Marks the `span` as an additional error message
    pub fn with_error(mut self, span: Span, message: impl ToString) -> Self {
        self.labels.push(
            Label::new(span)
                .with_message(message)
                .with_color(ariadne::Color::Red),
        );
        self
    }

    ///Pushes a simple _note_ to the error
    pub fn with_note(mut self, note: impl ToString) -> Self {
        self.notes.push(note.to_string());
        self
    }

    ///Converts `self` into an `Err(AasmError<Error>)`, where `Err` can be converted from `E`.
    pub fn into_err<T, Err: From<E> + Error>(self) -> Result<T, AasmError<Err>> {
        Err(self.to_error::<Err>())
    }

    ///Converts `AasmError<E>` into `AasmError<Error>`, where `E` can be converted into `Err`.
    pub fn to_error<Err: From<E> + Error>(self) -> AasmError<Err> {
        AasmError {
            error: self.error.into(),
            context: self.context,
            labels: self.labels,
            notes: self.notes,
            backtrace: self.backtrace,
        }
    }

    fn build_report(&self, colored: bool) -> Report<'static, Span> {
        let mut builder = error_reporter(self.error.to_string(), 0).with_config(
            ariadne::Config::default()
                .with_index_type(ariadne::IndexType::Byte)
                .with_color(colored),
        );
        builder = builder.with_labels(self.labels.clone());
        if !self.notes.is_empty() {
            builder = builder.with_note(self.notes.join("\n"));
        }
        builder.finish()
    }

    fn source(&self) -> Source {
        Source::from(self.context.clone().unwrap_or_default())
    }

    ///Reports the full error
    pub fn report(&self) {
        log::error!("{}", self.error);
        if let Err(e) = self.build_report(true).eprint(self.source()) {
            log::error!("failed to print report: {}", e);
        }
        if let Some(bt) = &self.backtrace {
            eprintln!("Backtrace:\n{:?}", bt);
        }
    }
}

impl<E: Error> From<E> for AasmError<E> {
    fn from(value: E) -> Self {
        AasmError::new(value)
    }
}

impl<E: Error> Display for AasmError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = Vec::new();
        self.build_report(false)
            .write(self.source(), &mut rendered)
            .map_err(|_| std::fmt::Error)?;
        write!(f, "{}", String::from_utf8_lossy(&rendered))?;
        if let Some(bt) = &self.backtrace {
            write!(f, "\nBacktrace:")?;
            write!(f, "\n{:?}", bt)?;
        }
        Ok(())
    }
}

impl<E: Error> Debug for AasmError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "[{}]: {}", context, self.error)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

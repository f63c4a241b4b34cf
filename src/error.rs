//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used by the editing APIs of the
//! definition trees and by the argument type grammar. Renderers never fail with an [Error];
//! when there's nothing valid to render they return an empty string instead.

use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For type tokens, for
/// instance, the context string is populated with a snippet of the token marking the offending
/// span.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of condition an [Error] reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// A selection node would be nested at or beyond the configured maximum depth.
    StructuralLimitExceeded,
    /// An operation is missing its name or has no selectable fields.
    InvalidOperationSpec,
    /// An argument's type token doesn't follow the argument type grammar.
    MalformedArgumentType,
    /// A path, node id, entity index or field index doesn't address anything.
    InvalidPath,
    /// An edit attempted to remove an entity's identifier field.
    ProtectedField,
    /// A project document couldn't be read or written.
    Serialization,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        context: S,
        error_type: ErrorType,
    ) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::StructuralLimitExceeded => {
                format!("Structural Limit Exceeded: {}", self.message)
            }
            ErrorType::InvalidOperationSpec => {
                format!("Invalid Operation: {}", self.message)
            }
            ErrorType::MalformedArgumentType => {
                format!("Malformed Argument Type: {}", self.message)
            }
            ErrorType::InvalidPath => format!("Invalid Path: {}", self.message),
            ErrorType::ProtectedField => format!("Protected Field: {}", self.message),
            ErrorType::Serialization => format!("Serialization Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// Prints a single-line source with a caret marker underneath the given span.
pub(crate) fn print_span(source: &str, span: Span) -> String {
    let start = span.start.min(source.len());
    let end = span.end.clamp(start, source.len());
    let width = source[start..end].chars().count().max(1);

    let mut out = String::with_capacity(source.len() * 2 + 6);
    out.push_str(" | ");
    out.push_str(source);
    out.push('\n');
    out.push_str(" | ");
    out.push_str(&" ".repeat(source[..start].chars().count()));
    out.push_str(&"^".repeat(width));
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(error.to_string(), ErrorType::Serialization)
    }
}

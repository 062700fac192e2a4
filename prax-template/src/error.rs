//! Error types for template rendering with actionable messages.
//!
//! Every failure the renderer can produce is a caller contract violation:
//! the template and the argument list do not fit together, or a value has a
//! type the fragment cannot accept. None of them are transient, so nothing
//! here is ever retryable.
//!
//! # Error Codes
//!
//! Error codes follow the pattern `S{number}`:
//! - 1001: argument count does not match the template
//! - 1002: the fragment cursor ran past the argument list
//! - 1003: a value has a type the fragment cannot render
//! - 1004: a supplied argument was never consumed
//!
//! ```rust
//! use prax_template::{ErrorCode, SanitizeError};
//!
//! let err = SanitizeError::arity_mismatch(3, Some(2));
//! assert_eq!(err.code, ErrorCode::ArityMismatch);
//! assert_eq!(err.to_string(), "[S1001] invalid number of arguments: 3 instead of 2");
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for rendering operations.
pub type SanitizeResult<T> = Result<T, SanitizeError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Argument count differs from fragment count minus one (S1001).
    ArityMismatch = 1001,
    /// The cursor exceeded the argument list while a fragment needed a value (S1002).
    IndexOutOfRange = 1002,
    /// A value's runtime type does not match the fragment (S1003).
    InvalidArgType = 1003,
    /// A supplied argument position was never consumed (S1004).
    UnusedArgument = 1004,
}

impl ErrorCode {
    /// Get the error code string (e.g., "S1001").
    pub fn code(&self) -> String {
        format!("S{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ArityMismatch => "Argument count mismatch",
            Self::IndexOutOfRange => "Argument index out of range",
            Self::InvalidArgType => "Invalid argument type",
            Self::UnusedArgument => "Unused argument",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The argument position involved.
    pub position: Option<usize>,
    /// The number of arguments the template expects.
    pub expected: Option<usize>,
    /// The number of arguments supplied.
    pub actual: Option<usize>,
    /// The runtime type of the offending value.
    pub type_name: Option<&'static str>,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<String>,
    /// Help text.
    pub help: Option<String>,
}

/// Errors that can occur while rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct SanitizeError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
}

impl fmt::Display for SanitizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl SanitizeError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context.suggestions.push(suggestion.into());
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the argument position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.context.position = Some(position);
        self
    }

    // ============== Constructor Functions ==============

    /// Create an arity mismatch error.
    ///
    /// `expected` is `None` for a template with no fragments, which cannot
    /// accept any argument list.
    pub fn arity_mismatch(actual: usize, expected: Option<usize>) -> Self {
        let message = match expected {
            Some(expected) => format!(
                "invalid number of arguments: {} instead of {}",
                actual, expected
            ),
            None => format!(
                "invalid number of arguments: {} for a template without fragments",
                actual
            ),
        };

        let mut err = Self::new(ErrorCode::ArityMismatch, message)
            .with_suggestion("Pass exactly one argument fewer than the template has fragments");
        err.context.expected = expected;
        err.context.actual = Some(actual);
        err
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize) -> Self {
        Self::new(
            ErrorCode::IndexOutOfRange,
            format!("unexpected argument index: {}", index),
        )
        .with_position(index)
        .with_help(
            "The cursor advances once per fragment, so a bound fragment cannot be the last one",
        )
    }

    /// Create an invalid argument type error.
    pub fn invalid_arg_type(position: usize, type_name: &'static str) -> Self {
        let mut err = Self::new(
            ErrorCode::InvalidArgType,
            format!("invalid arg type: {}", type_name),
        )
        .with_position(position)
        .with_suggestion("Index references accept text only")
        .with_suggestion("Typed slots accept i64, f64, bool, bytes, timestamp or null");
        err.context.type_name = Some(type_name);
        err
    }

    /// Create an unused argument error.
    pub fn unused_argument(position: usize) -> Self {
        Self::new(
            ErrorCode::UnusedArgument,
            format!("argument {} was not used", position),
        )
        .with_position(position)
        .with_suggestion(format!(
            "Reference argument {} from the template or drop it from the call",
            position
        ))
    }

    // ============== Error Checks ==============

    /// Check if this is an arity mismatch.
    pub fn is_arity_mismatch(&self) -> bool {
        self.code == ErrorCode::ArityMismatch
    }

    /// Check if this is an index out of range error.
    pub fn is_index_out_of_range(&self) -> bool {
        self.code == ErrorCode::IndexOutOfRange
    }

    /// Check if this is an invalid argument type error.
    pub fn is_invalid_arg_type(&self) -> bool {
        self.code == ErrorCode::InvalidArgType
    }

    /// Check if this is an unused argument error.
    pub fn is_unused_argument(&self) -> bool {
        self.code == ErrorCode::UnusedArgument
    }

    /// Rendering errors come from caller input and never succeed on retry.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Display the full error with all context and suggestions.
    pub fn display_full(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error [{}]: {}\n", self.code.code(), self.message));
        output.push_str(&format!("  → Kind: {}\n", self.code.description()));

        if let Some(position) = self.context.position {
            output.push_str(&format!("  → Argument: {}\n", position));
        }
        if let (Some(actual), Some(expected)) = (self.context.actual, self.context.expected) {
            output.push_str(&format!("  → Supplied: {}, expected: {}\n", actual, expected));
        }
        if let Some(type_name) = self.context.type_name {
            output.push_str(&format!("  → Type: {}\n", type_name));
        }

        if !self.context.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for (i, suggestion) in self.context.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\nHelp: {}\n", help));
        }

        output
    }
}

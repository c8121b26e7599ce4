//! Error type shared by both reminder pipelines.

use std::io;
use std::path::PathBuf;

/// Errors raised while reading, classifying or reporting records.
///
/// Every variant is fatal: the executors stop at the first error and hand
/// it back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// A field could not be parsed (bad date text, bad lead time).
    #[error("Invalid value \"{value}\": {reason}")]
    Validation {
        /// The offending field text, verbatim.
        value: String,
        /// What was expected instead.
        reason: String,
    },

    /// The leading tag of a row names no known record kind.
    #[error("Line {line}: unknown reminder type \"{tag}\"")]
    UnknownKind { tag: String, line: usize },

    /// The row has too few or too many fields.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    RowShape {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    /// The record file could not be read.
    #[error("Error reading record file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file could not be read or parsed.
    #[error("Error loading settings '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Writing a report line to the output sink failed.
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ReminderError {
    pub(crate) fn validation(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Attach a source line number to a validation failure.
    ///
    /// Other variants already carry their own context and pass through.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Validation { value, reason } => Self::Validation {
                value,
                reason: format!("{reason} (line {line})"),
            },
            other => other,
        }
    }
}
